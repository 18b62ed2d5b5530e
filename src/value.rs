//! The dynamic values that get interpolated into templates.

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use kstring::KString;

use crate::myfrom::MyFrom;
use crate::template::Template;

/// Anything that is not a template, a sequence or empty. Printed via
/// its canonical string form, then escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(KString),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

fn write_float(out: &mut impl Write, x: f64) -> fmt::Result {
    if x.is_nan() {
        out.write_str("NaN")
    } else if x.is_infinite() {
        out.write_str(if x > 0. { "Infinity" } else { "-Infinity" })
    } else if x == 0. {
        // also catches -0
        out.write_str("0")
    } else {
        // Display never uses exponent notation and leaves off ".0"
        write!(out, "{x}")
    }
}

impl Scalar {
    /// The string form before escaping. Borrows for strings.
    pub fn to_canonical(&self) -> Cow<'_, str> {
        match self {
            Scalar::Str(s) => Cow::Borrowed(s.as_str()),
            Scalar::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            _ => Cow::Owned(self.to_string()),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Char(c) => f.write_char(*c),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::UInt(u) => write!(f, "{u}"),
            Scalar::Float(x) => write_float(f, *x),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}


/// A value interpolated into a template. Which case applies is looked
/// at during serialization only.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value, prints as nothing.
    Empty,
    Nested(Template),
    /// Elements are printed one after the other, without separator.
    Sequence(Vec<Value>),
    Scalar(Scalar),
}

impl Default for Value {
    fn default() -> Self {
        Value::Empty
    }
}

impl Value {
    pub fn text<T>(s: T) -> Self
    where KString: MyFrom<T>
    {
        Value::Scalar(Scalar::Str(KString::myfrom(s)))
    }

    pub fn as_template(&self) -> Option<&Template> {
        match self {
            Value::Nested(t) => Some(t),
            _ => None
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}


impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Template> for Value {
    fn from(t: Template) -> Self {
        Value::Nested(t)
    }
}

impl From<&Template> for Value {
    fn from(t: &Template) -> Self {
        Value::Nested(t.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Empty, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::Sequence(v.iter().cloned().map(Into::into).collect())
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl From<KString> for Value {
    fn from(s: KString) -> Self {
        Value::text(s)
    }
}

impl From<&KString> for Value {
    fn from(s: &KString) -> Self {
        Value::text(s.clone())
    }
}

impl<'t> From<Cow<'t, str>> for Value {
    fn from(s: Cow<'t, str>) -> Self {
        match s {
            Cow::Borrowed(s) => s.into(),
            Cow::Owned(s) => s.into(),
        }
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Scalar(Scalar::Char(c))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        // Go via the shortest f32 representation so that 0.1f32
        // prints as "0.1", not with the widening noise.
        let x = x.to_string().parse().unwrap_or(x as f64);
        Value::Scalar(Scalar::Float(x))
    }
}

macro_rules! from_ints {
    ($variant:ident, $to:ty; $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(Scalar::$variant(v as $to))
                }
            }
        )*
    }
}

from_ints!(Int, i64; i8, i16, i32, i64, isize);
from_ints!(UInt, u64; u8, u16, u32, u64, usize);


#[cfg(test)]
mod tests {
    use super::*;

    fn canon(v: impl Into<Value>) -> String {
        match v.into() {
            Value::Scalar(s) => s.to_canonical().into_owned(),
            other => panic!("not a scalar: {other:?}")
        }
    }

    #[test]
    fn t_canonical() {
        assert_eq!(canon(42), "42");
        assert_eq!(canon(-7i8), "-7");
        assert_eq!(canon(u64::MAX), "18446744073709551615");
        assert_eq!(canon(true), "true");
        assert_eq!(canon(false), "false");
        assert_eq!(canon('x'), "x");
        assert_eq!(canon("<b>"), "<b>");
        assert_eq!(canon(String::from("s")), "s");
    }

    #[test]
    fn t_float() {
        assert_eq!(canon(1.5), "1.5");
        assert_eq!(canon(1.0), "1");
        assert_eq!(canon(-0.0), "0");
        assert_eq!(canon(0.1f32), "0.1");
        assert_eq!(canon(f64::NAN), "NaN");
        assert_eq!(canon(f64::INFINITY), "Infinity");
        assert_eq!(canon(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(canon(1e21), "1000000000000000000000");
    }

    #[test]
    fn t_conversions() {
        assert_eq!(Value::from(None::<&str>), Value::Empty);
        assert_eq!(Value::from(()), Value::Empty);
        assert_eq!(Value::from(Some(1)), Value::Scalar(Scalar::Int(1)));
        assert_eq!(Value::from(vec![1, 2]),
                   Value::Sequence(vec![Value::Scalar(Scalar::Int(1)),
                                        Value::Scalar(Scalar::Int(2))]));
        assert_eq!(Value::from(["a"]), Value::Sequence(vec![Value::from("a")]));
        let v: Value = (0..3u8).collect();
        assert_eq!(v, Value::from(&[0u8, 1, 2][..]));
        assert!(Value::default().is_empty());
        assert_eq!(Value::from(1).as_template(), None);
    }
}

//! Templates: static fragments with dynamic values in between.

use std::sync::Arc;

use kstring::KString;

use crate::error::ShapeError;
use crate::myfrom::MyFrom;
use crate::value::Value;

/// Carried by the serialized (JSON) form of every `Template`, so that
/// templates are recognized by their shape, not by the type identity
/// of one particular build of this crate.
pub const TEMPLATE_MARKER: &str = "thtml.template.v1";

/// Name of the marker field in the serialized form.
pub const MARKER_FIELD: &str = "$thtml";

/// An immutable parsed template. Always has exactly one more fragment
/// than values: `fragments[0] values[0] fragments[1] ...
/// fragments[n]`. Cloning is cheap (the parts are shared).
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    fragments: Arc<[KString]>,
    values: Arc<[Value]>,
}

impl Template {
    /// Checked constructor for templates built at runtime. Use the
    /// `html!` macro for literal templates.
    pub fn new<F, V>(fragments: F, values: V) -> Result<Template, ShapeError>
    where F: IntoIterator,
          KString: MyFrom<F::Item>,
          V: IntoIterator,
          V::Item: Into<Value>
    {
        let fragments: Arc<[KString]> = fragments.into_iter().map(KString::myfrom).collect();
        let values: Arc<[Value]> = values.into_iter().map(Into::into).collect();
        ShapeError::check(fragments.len(), values.len())?;
        Ok(Template {
            fragments,
            values
        })
    }

    /// Used by `html!`, which guarantees the shape by its syntax.
    #[doc(hidden)]
    pub fn from_literal(fragments: Vec<KString>, values: Vec<Value>) -> Template {
        debug_assert_eq!(fragments.len(), values.len() + 1);
        Template {
            fragments: fragments.into(),
            values: values.into()
        }
    }

    pub fn fragments(&self) -> &[KString] {
        &self.fragments
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Whether `value` is a (nested) template.
pub fn is_template(value: &Value) -> bool {
    value.as_template().is_some()
}


/// Build a `Template` from alternating string literals and values,
/// starting and ending with a literal:
///
/// ```
/// use thtml::{html, serialize};
/// let name = "<Alice>";
/// let t = html!("<div>Hello ", name, "</div>");
/// assert_eq!(serialize(&t), "<div>Hello &lt;Alice&gt;</div>");
/// ```
///
/// Values can be anything convertible into `Value`: strings,
/// numbers, booleans, `Option`s, other templates, and `Vec`s or
/// arrays of those. To put two values next to each other, separate
/// them with an empty literal.
#[macro_export]
macro_rules! html {
    ($fragment:literal $(, $value:expr, $fragments:literal)*) => {
        $crate::template::Template::from_literal(
            vec![$crate::kstring::KString::from_static($fragment)
                 $(, $crate::kstring::KString::from_static($fragments))*],
            vec![$(::core::convert::Into::<$crate::value::Value>::into($value)),*])
    }
}

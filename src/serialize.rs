//! Turning templates into HTML strings.

use std::fmt::{self, Display};
use std::io::Write;

use anyhow::Result;

use crate::escape::{html_escape_into, write_html_escaped};
use crate::template::Template;
use crate::value::Value;
use crate::trace;

/// The HTML for `template`: fragments verbatim, values in between
/// them escaped, nested templates and sequences recursively
/// serialized. Never fails and never changes `template`.
pub fn serialize(template: &Template) -> String {
    trace!("serialize: {} fragments", template.fragments().len());
    let mut out = String::new();
    serialize_into(&mut out, template);
    out
}

/// Append the serialization of `template` to `out`.
pub fn serialize_into(out: &mut String, template: &Template) {
    let values = template.values();
    for (i, fragment) in template.fragments().iter().enumerate() {
        out.push_str(fragment);
        if let Some(value) = values.get(i) {
            stringify_into(out, value);
        }
    }
}

/// Append the string form of a single dynamic value to `out`.
pub fn stringify_into(out: &mut String, value: &Value) {
    match value {
        Value::Nested(template) => serialize_into(out, template),
        Value::Sequence(values) => {
            for value in values {
                stringify_into(out, value);
            }
        }
        Value::Empty => (),
        Value::Scalar(scalar) => html_escape_into(out, &scalar.to_canonical()),
    }
}

pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    stringify_into(&mut out, value);
    out
}


pub trait PrintHtml {
    /// Print serialized HTML. Only fails if `out` does.
    fn print_html(&self, out: &mut impl Write) -> Result<()>;
}

impl PrintHtml for Template {
    fn print_html(&self, out: &mut impl Write) -> Result<()> {
        let values = self.values();
        for (i, fragment) in self.fragments().iter().enumerate() {
            out.write_all(fragment.as_bytes())?;
            if let Some(value) = values.get(i) {
                value.print_html(out)?;
            }
        }
        Ok(())
    }
}

impl PrintHtml for Value {
    fn print_html(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Value::Nested(template) => template.print_html(out)?,
            Value::Sequence(values) => {
                for value in values {
                    value.print_html(out)?;
                }
            }
            Value::Empty => (),
            Value::Scalar(scalar) =>
                write_html_escaped(out, scalar.to_canonical().as_bytes())?,
        }
        Ok(())
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

//! Templates and values as JSON, e.g. for data coming from another
//! process. Templates are recognized structurally, via the marker
//! field (see `TEMPLATE_MARKER`).

use kstring::KString;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::TemplateError;
use crate::template::{Template, MARKER_FIELD, TEMPLATE_MARKER};
use crate::value::{Scalar, Value};
use crate::nowarn as warn;

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(MARKER_FIELD, TEMPLATE_MARKER)?;
        let fragments: Vec<&str> = self.fragments().iter().map(|s| s.as_str()).collect();
        map.serialize_entry("fragments", &fragments)?;
        map.serialize_entry("values", self.values())?;
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Empty => serializer.serialize_unit(),
            Value::Nested(t) => t.serialize(serializer),
            Value::Sequence(vs) => vs.serialize(serializer),
            Value::Scalar(s) => match s {
                Scalar::Str(s) => serializer.serialize_str(s),
                Scalar::Char(c) => serializer.serialize_char(*c),
                Scalar::Int(i) => serializer.serialize_i64(*i),
                Scalar::UInt(u) => serializer.serialize_u64(*u),
                // (serde_json writes non-finite floats as null)
                Scalar::Float(x) => serializer.serialize_f64(*x),
                Scalar::Bool(b) => serializer.serialize_bool(*b),
            }
        }
    }
}


fn is_template_object(map: &Map<String, JsonValue>) -> bool {
    map.get(MARKER_FIELD).and_then(JsonValue::as_str) == Some(TEMPLATE_MARKER)
}

/// Whether `json` is the serialized form of a template (only looks at
/// the marker, the rest may still be malformed).
pub fn is_template_json(json: &JsonValue) -> bool {
    match json {
        JsonValue::Object(map) => is_template_object(map),
        _ => false
    }
}

fn template_from_object(mut map: Map<String, JsonValue>) -> Result<Template, TemplateError> {
    let fragments = match map.remove("fragments") {
        Some(JsonValue::Array(fragments)) => fragments,
        _ => return Err(TemplateError::Json("missing \"fragments\" array".into()))
    };
    let values = match map.remove("values") {
        Some(JsonValue::Array(values)) => values,
        None => Vec::new(),
        _ => return Err(TemplateError::Json("\"values\" is not an array".into()))
    };
    let fragments = fragments.into_iter().map(|f| match f {
        JsonValue::String(s) => Ok(KString::from_string(s)),
        other => Err(TemplateError::Json(format!("fragment is not a string: {other}")))
    }).collect::<Result<Vec<_>, _>>()?;
    let values = values.into_iter().map(Value::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Template::new(fragments, values)?)
}

impl TryFrom<JsonValue> for Value {
    type Error = TemplateError;

    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        Ok(match json {
            JsonValue::Null => Value::Empty,
            JsonValue::Bool(b) => b.into(),
            JsonValue::Number(n) =>
                if let Some(i) = n.as_i64() {
                    i.into()
                } else if let Some(u) = n.as_u64() {
                    u.into()
                } else {
                    n.as_f64().unwrap_or(f64::NAN).into()
                },
            JsonValue::String(s) => s.into(),
            JsonValue::Array(vs) => Value::Sequence(
                vs.into_iter().map(Value::try_from).collect::<Result<_, _>>()?),
            JsonValue::Object(map) =>
                if is_template_object(&map) {
                    Value::Nested(template_from_object(map)?)
                } else {
                    // Any other object prints as its JSON text
                    let s = JsonValue::Object(map).to_string();
                    warn!("plain JSON object as value: {s}");
                    s.into()
                }
        })
    }
}

impl TryFrom<JsonValue> for Template {
    type Error = TemplateError;

    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        match json {
            JsonValue::Object(map) if is_template_object(&map) => template_from_object(map),
            other => Err(TemplateError::Json(format!("not a template: {other}")))
        }
    }
}

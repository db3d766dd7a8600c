//! Module: value::json
//! Responsibility: lift `serde_json` documents into `Value` records.
//! Does not own: timestamp detection; JSON has no date type, so dates arrive
//! as numbers or text and stay that way.

use crate::value::Value;
use serde_json::Value as JsonValue;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(v) => Self::Bool(v),
            // serde_json numbers without arbitrary precision always fit f64.
            JsonValue::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(v) => Self::Text(v),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Self::from(json.clone())
    }
}

use crate::value::Value;

///
/// ValueTag
///
/// Stable value-variant tag used by diagnostics and metrics surfaces.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Bool,
    List,
    Map,
    Null,
    Number,
    Text,
    Timestamp,
}

impl ValueTag {
    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
        }
    }

    /// Whether values of this kind can be a key component.
    #[must_use]
    pub const fn is_key_component(self) -> bool {
        matches!(self, Self::Number | Self::Text | Self::Timestamp)
    }
}

#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Bool(_) => ValueTag::Bool,
        Value::List(_) => ValueTag::List,
        Value::Map(_) => ValueTag::Map,
        Value::Null => ValueTag::Null,
        Value::Number(_) => ValueTag::Number,
        Value::Text(_) => ValueTag::Text,
        Value::Timestamp(_) => ValueTag::Timestamp,
    }
}

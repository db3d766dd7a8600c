mod normalize;
mod path;
mod resolve;


use crate::{codec::KeyEncodeError, types::Timestamp, value::Value};
use std::cmp::Ordering;

// re-exports
pub use normalize::normalize_keys;
pub use path::{FieldLocator, KeyPath, KeyPathError, KeyShape};
pub use resolve::{resolve_key, resolve_locator};

///
/// KeyComponent
///
/// One scalar contributing to a key.
/// This set is closed: nothing else is key-encodable.
///

#[derive(Clone, Debug, PartialEq)]
pub enum KeyComponent {
    Number(f64),
    Timestamp(Timestamp),
    Text(String),
}

impl KeyComponent {
    // ── Cross-type rank (do not reorder) ─────────────
    pub(crate) const RANK_NUMBER: u8 = 0;
    pub(crate) const RANK_TIMESTAMP: u8 = 1;
    pub(crate) const RANK_TEXT: u8 = 2;

    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => Self::RANK_NUMBER,
            Self::Timestamp(_) => Self::RANK_TIMESTAMP,
            Self::Text(_) => Self::RANK_TEXT,
        }
    }

    /// Borrowing conversion from a structured value.
    pub fn try_from_value(value: &Value) -> Result<Self, KeyEncodeError> {
        match value {
            Value::Number(v) => Ok(Self::Number(*v)),
            Value::Timestamp(v) => Ok(Self::Timestamp(*v)),
            Value::Text(v) => Ok(Self::Text(v.clone())),
            Value::Bool(_) | Value::List(_) | Value::Map(_) | Value::Null => {
                Err(KeyEncodeError::UnsupportedKeyType { kind: value.kind() })
            }
        }
    }
}

impl TryFrom<&Value> for KeyComponent {
    type Error = KeyEncodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl TryFrom<Value> for KeyComponent {
    type Error = KeyEncodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(v) => Ok(Self::Text(v)),
            other => Self::try_from_value(&other),
        }
    }
}

impl From<KeyComponent> for Value {
    fn from(component: KeyComponent) -> Self {
        match component {
            KeyComponent::Number(v) => Self::Number(v),
            KeyComponent::Timestamp(v) => Self::Timestamp(v),
            KeyComponent::Text(v) => Self::Text(v),
        }
    }
}

/// Natural key order: type rank first (number < timestamp < text), then the
/// type's own order. `None` only when a NaN is compared with a number.
impl PartialOrd for KeyComponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => Some(self.rank().cmp(&other.rank())),
        }
    }
}

/// Lexicographic natural order over component sequences; the first
/// differing component decides.
#[must_use]
pub fn compare_components(left: &[KeyComponent], right: &[KeyComponent]) -> Option<Ordering> {
    for (l, r) in left.iter().zip(right) {
        match l.partial_cmp(r)? {
            Ordering::Equal => {}
            order => return Some(order),
        }
    }

    Some(left.len().cmp(&right.len()))
}

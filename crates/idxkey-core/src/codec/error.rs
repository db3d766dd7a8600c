use crate::{
    error::InternalError,
    key::{KeyPath, KeyShape},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// KeyEncodeError
///
/// Key encoding failures. All of them are caller or schema bugs and are
/// surfaced immediately; a malformed key is never coerced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyEncodeError {
    #[error("key component of kind '{kind}' is not key-encodable (expected Number, Timestamp, or Text)")]
    UnsupportedKeyType { kind: &'static str },

    #[error("key shape mismatch: key path {key_path} expects a {expected}, got {key}")]
    ShapeMismatch {
        expected: KeyShape,
        key: String,
        key_path: String,
    },

    #[error("key prefix of {len} components is invalid for a key path of arity {arity}")]
    InvalidPrefix { len: usize, arity: usize },
}

impl KeyEncodeError {
    /// Build a shape mismatch naming both the offending key and key path.
    pub(crate) fn shape_mismatch(key: &Value, key_path: &KeyPath) -> Self {
        Self::ShapeMismatch {
            expected: key_path.shape(),
            key: key.to_string(),
            key_path: key_path.to_string(),
        }
    }
}

impl From<KeyEncodeError> for InternalError {
    fn from(err: KeyEncodeError) -> Self {
        match err {
            KeyEncodeError::UnsupportedKeyType { .. } => Self::encode_unsupported(err.to_string()),
            KeyEncodeError::ShapeMismatch { .. } | KeyEncodeError::InvalidPrefix { .. } => {
                Self::encode_invariant(err.to_string())
            }
        }
    }
}

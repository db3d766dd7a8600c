//! Module: codec
//! Responsibility: whole-key encoding for index entries and range bounds.
//! Does not own: key extraction from records (see `key`).
//! Boundary: every output string orders like the key it encodes.

mod error;
mod join;
mod range;
mod scalar;


use crate::{
    config::{ConfigError, KeyCodecConfig},
    key::{KeyComponent, KeyPath, normalize_keys},
    obs::sink::{self, MetricsEvent, RejectKind},
    value::Value,
};

// re-exports
pub use error::KeyEncodeError;
pub use range::EncodedKeyRange;
pub use scalar::encode_scalar;

///
/// KeyCodec
///
/// Configured key encoder. Holds no state beyond its configuration, so one
/// codec can be shared freely across threads.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyCodec {
    config: KeyCodecConfig,
}

impl KeyCodec {
    /// Build a codec from a validated configuration.
    pub fn new(config: KeyCodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &KeyCodecConfig {
        &self.config
    }

    /// Orderable text for one scalar value under this codec's number policy.
    pub fn encode_scalar(&self, value: &Value) -> Result<String, KeyEncodeError> {
        let component = KeyComponent::try_from_value(value).inspect_err(record_rejection)?;

        let mut out = String::new();
        scalar::push_component(&mut out, &component, self.config.non_finite);

        Ok(out)
    }

    /// Encode one key against its key path.
    ///
    /// Compound paths need a list of exactly the path's arity; simple paths
    /// need a non-list value.
    pub fn encode_key(&self, key: &Value, key_path: &KeyPath) -> Result<String, KeyEncodeError> {
        let encoded = self.encode_key_inner(key, key_path).inspect_err(record_rejection)?;

        sink::record(MetricsEvent::KeyEncoded {
            arity: key_path.arity(),
        });

        Ok(encoded)
    }

    /// Normalize `input` into a batch and encode every entry in input order.
    pub fn encode_key_batch(
        &self,
        input: &Value,
        key_path: &KeyPath,
    ) -> Result<Vec<String>, KeyEncodeError> {
        let keys = normalize_keys(input, key_path).inspect_err(record_rejection)?;
        let encoded = keys
            .iter()
            .map(|key| self.encode_key(key, key_path))
            .collect::<Result<Vec<_>, _>>()?;

        sink::record(MetricsEvent::BatchEncoded {
            keys: u64::try_from(encoded.len()).unwrap_or(u64::MAX),
        });

        Ok(encoded)
    }

    fn encode_key_inner(&self, key: &Value, key_path: &KeyPath) -> Result<String, KeyEncodeError> {
        let mut out = String::new();

        match (key_path, key) {
            (KeyPath::Compound(locators), Value::List(items)) if items.len() == locators.len() => {
                let components = to_components(items)?;
                join::push_compound(&mut out, &components, &self.config);
            }
            (KeyPath::Simple(_), key) if !key.is_list() => {
                let component = KeyComponent::try_from_value(key)?;
                scalar::push_component(&mut out, &component, self.config.non_finite);
            }
            _ => return Err(KeyEncodeError::shape_mismatch(key, key_path)),
        }

        Ok(out)
    }
}

/// Encode one key with the default codec.
pub fn encode_key(key: &Value, key_path: &KeyPath) -> Result<String, KeyEncodeError> {
    KeyCodec::default().encode_key(key, key_path)
}

/// Encode a key or batch of keys with the default codec, preserving order.
pub fn encode_key_batch(input: &Value, key_path: &KeyPath) -> Result<Vec<String>, KeyEncodeError> {
    KeyCodec::default().encode_key_batch(input, key_path)
}

#[must_use]
pub const fn is_compound_key_path(key_path: &KeyPath) -> bool {
    key_path.is_compound()
}

fn to_components(items: &[Value]) -> Result<Vec<KeyComponent>, KeyEncodeError> {
    items.iter().map(KeyComponent::try_from_value).collect()
}

fn record_rejection(err: &KeyEncodeError) {
    let kind = match err {
        KeyEncodeError::UnsupportedKeyType { .. } => RejectKind::UnsupportedKeyType,
        KeyEncodeError::ShapeMismatch { .. } => RejectKind::ShapeMismatch,
        KeyEncodeError::InvalidPrefix { .. } => RejectKind::InvalidPrefix,
    };

    sink::record(MetricsEvent::EncodeRejected { kind });
}

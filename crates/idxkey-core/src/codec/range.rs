use crate::{
    codec::{KeyCodec, KeyEncodeError, join, record_rejection, scalar::TAG_CEILING, to_components},
    key::KeyPath,
    value::Value,
};
use std::ops::{Bound, RangeBounds};

///
/// EncodedKeyRange
///
/// Encoded bounds for an index range scan.
/// Bounds compare against encoded keys with plain string ordering.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedKeyRange {
    lower: Bound<String>,
    upper: Bound<String>,
}

impl EncodedKeyRange {
    /// Range covering every encoded key.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    #[must_use]
    pub fn lower(&self) -> Bound<&str> {
        self.lower.as_ref().map(String::as_str)
    }

    #[must_use]
    pub fn upper(&self) -> Bound<&str> {
        self.upper.as_ref().map(String::as_str)
    }

    #[must_use]
    pub fn contains_encoded(&self, encoded: &str) -> bool {
        RangeBounds::<str>::contains(self, encoded)
    }
}

impl RangeBounds<str> for EncodedKeyRange {
    fn start_bound(&self) -> Bound<&str> {
        self.lower()
    }

    fn end_bound(&self) -> Bound<&str> {
        self.upper()
    }
}

impl KeyCodec {
    /// Encode both ends of a key range; each bound must be a whole key.
    pub fn encode_range(
        &self,
        lower: Bound<&Value>,
        upper: Bound<&Value>,
        key_path: &KeyPath,
    ) -> Result<EncodedKeyRange, KeyEncodeError> {
        Ok(EncodedKeyRange {
            lower: self.encode_bound(lower, key_path)?,
            upper: self.encode_bound(upper, key_path)?,
        })
    }

    /// Range covering every compound key whose leading components equal
    /// `prefix`. The prefix must be non-empty and shorter than the path.
    pub fn prefix_range(
        &self,
        prefix: &[Value],
        key_path: &KeyPath,
    ) -> Result<EncodedKeyRange, KeyEncodeError> {
        let arity = key_path.arity();
        if !key_path.is_compound() || prefix.is_empty() || prefix.len() >= arity {
            let err = KeyEncodeError::InvalidPrefix {
                len: prefix.len(),
                arity,
            };
            record_rejection(&err);
            return Err(err);
        }

        let components = to_components(prefix).inspect_err(record_rejection)?;

        // Every longer key continues with the joiner and then a type tag,
        // and every tag sorts below TAG_CEILING.
        let mut lower = String::new();
        join::push_compound(&mut lower, &components, self.config());
        lower.push_str(&self.config().joiner);

        let mut upper = lower.clone();
        upper.push(TAG_CEILING);

        Ok(EncodedKeyRange {
            lower: Bound::Included(lower),
            upper: Bound::Excluded(upper),
        })
    }

    fn encode_bound(
        &self,
        bound: Bound<&Value>,
        key_path: &KeyPath,
    ) -> Result<Bound<String>, KeyEncodeError> {
        Ok(match bound {
            Bound::Included(key) => Bound::Included(self.encode_key(key, key_path)?),
            Bound::Excluded(key) => Bound::Excluded(self.encode_key(key, key_path)?),
            Bound::Unbounded => Bound::Unbounded,
        })
    }
}

//! Core runtime for idxkey: key paths, key resolution, batch normalization,
//! and order-preserving key encoding, plus the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod codec;
pub mod config;
pub mod error;
pub mod key;
pub mod obs;
pub mod types;
pub mod value;

// re-exports
pub use codec::{encode_key, encode_key_batch, encode_scalar, is_compound_key_path};
pub use key::{normalize_keys, resolve_key};

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the codec entry points.
/// No errors, sinks, or config internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        codec::{EncodedKeyRange, KeyCodec},
        key::{FieldLocator, KeyComponent, KeyPath},
        types::Timestamp,
        value::Value,
    };
}

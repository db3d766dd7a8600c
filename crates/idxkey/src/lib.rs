//! idxkey: order-preserving index keys for record stores
//!
//! This is the public meta-crate. Downstream users depend on **idxkey** only.
//!
//! It re-exports the stable public API from `idxkey-core`:
//!   - key paths, resolution, and batch normalization (`key`)
//!   - scalar and compound key encoding, plus range bounds (`codec`)
//!   - codec configuration (`config`)
//!   - per-thread counters and sink overrides (`obs`)

pub use idxkey_core as core;
pub use idxkey_core::{codec, config, key, obs, types, value};

//
// Errors
//

pub use idxkey_core::error::InternalError as Error;

//
// Entry points
//

pub use idxkey_core::{
    encode_key, encode_key_batch, encode_scalar, is_compound_key_path, normalize_keys, resolve_key,
};

///
/// CONSTANTS
///

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Prelude
//

pub mod prelude {
    pub use idxkey_core::prelude::*;
}

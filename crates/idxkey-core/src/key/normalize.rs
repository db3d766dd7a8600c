use crate::{codec::KeyEncodeError, key::KeyPath, value::Value};

/// Normalize a caller-supplied key or batch of keys into an explicit batch.
///
/// Compound paths:
/// - the input must be a list;
/// - a list whose first element is not itself a list is one compound key
///   and becomes a one-element batch;
/// - anything else is already a batch.
///
/// Simple paths treat a list as a batch and wrap any other value.
/// Arity is not checked here; `encode_key` rejects mismatched entries.
pub fn normalize_keys(input: &Value, key_path: &KeyPath) -> Result<Vec<Value>, KeyEncodeError> {
    if key_path.is_compound() {
        let Some(items) = input.as_list() else {
            return Err(KeyEncodeError::shape_mismatch(input, key_path));
        };

        let is_single_key = !items.first().is_some_and(Value::is_list);
        if is_single_key {
            return Ok(vec![input.clone()]);
        }

        return Ok(items.to_vec());
    }

    Ok(input
        .as_list()
        .map_or_else(|| vec![input.clone()], <[Value]>::to_vec))
}

use crate::{
    key::{FieldLocator, KeyPath},
    obs::sink::{self, MetricsEvent},
    value::Value,
};

/// Walk one locator through nested `Map`s.
/// Absence at any level (or a non-map intermediate) yields `None`.
#[must_use]
pub fn resolve_locator<'a>(record: &'a Value, locator: &FieldLocator) -> Option<&'a Value> {
    locator
        .segments()
        .try_fold(record, |current, segment| current.get(segment))
}

/// Extract the key a record maps to under `key_path`.
///
/// Returns `None` when any component is missing or null; partial keys are
/// never produced. Simple paths yield the component itself, compound paths
/// a `Value::List` in key-path order.
#[must_use]
pub fn resolve_key(record: &Value, key_path: &KeyPath) -> Option<Value> {
    let mut components = Vec::with_capacity(key_path.arity());

    for locator in key_path.locators() {
        match resolve_locator(record, locator) {
            Some(value) if !value.is_null() => components.push(value.clone()),
            _ => {
                sink::record(MetricsEvent::KeyMissing);
                return None;
            }
        }
    }

    sink::record(MetricsEvent::KeyResolved);

    match key_path {
        KeyPath::Simple(_) => components.pop(),
        KeyPath::Compound(_) => Some(Value::List(components)),
    }
}

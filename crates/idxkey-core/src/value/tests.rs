use super::*;
use crate::types::Timestamp;

#[test]
fn map_builder_replaces_duplicate_names() {
    let value = Value::map([("a", 1), ("a", 2)]);

    assert_eq!(value.get("a"), Some(&Value::Number(2.0)));
}

#[test]
fn get_on_non_map_is_none() {
    assert_eq!(Value::Number(1.0).get("a"), None);
    assert_eq!(Value::list([1, 2]).get("0"), None);
}

#[test]
fn as_list_borrows_list_items_only() {
    let list = Value::list([1, 2]);

    assert_eq!(
        list.as_list(),
        Some([Value::from(1), Value::from(2)].as_slice())
    );
    assert_eq!(Value::from("a").as_list(), None);
}

#[test]
fn kind_labels_are_stable() {
    assert_eq!(Value::Null.kind(), "Null");
    assert_eq!(Value::Bool(true).kind(), "Bool");
    assert_eq!(Value::Number(1.0).kind(), "Number");
    assert_eq!(Value::Text("x".into()).kind(), "Text");
    assert_eq!(
        Value::Timestamp(Timestamp::from_millis(1)).kind(),
        "Timestamp"
    );
    assert_eq!(Value::List(vec![]).kind(), "List");
    assert_eq!(Value::map::<&str, Value, _>([]).kind(), "Map");
}

#[test]
fn only_scalar_kinds_are_key_components() {
    assert!(ValueTag::Number.is_key_component());
    assert!(ValueTag::Timestamp.is_key_component());
    assert!(ValueTag::Text.is_key_component());
    assert!(!ValueTag::Null.is_key_component());
    assert!(!ValueTag::Bool.is_key_component());
    assert!(!ValueTag::List.is_key_component());
    assert!(!ValueTag::Map.is_key_component());
}

#[test]
fn display_renders_nested_values_for_diagnostics() {
    let value = Value::list([
        Value::Number(1.0),
        Value::from("b"),
        Value::map([("k", Value::Null)]),
    ]);

    assert_eq!(value.to_string(), r#"[1, "b", {"k": null}]"#);
}

#[test]
fn option_none_becomes_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Number(3.0));
}

#[cfg(feature = "json")]
#[test]
fn json_documents_lift_into_records() {
    let json = serde_json::json!({
        "id": 7,
        "name": "ada",
        "tags": ["x", "y"],
        "meta": { "deleted": false, "parent": null },
    });

    let value = Value::from(json);

    assert_eq!(value.get("id"), Some(&Value::Number(7.0)));
    assert_eq!(value.get("name"), Some(&Value::Text("ada".into())));
    assert_eq!(value.get("tags"), Some(&Value::list(["x", "y"])));

    let meta = value.get("meta").expect("meta should be present");
    assert_eq!(meta.get("deleted"), Some(&Value::Bool(false)));
    assert_eq!(meta.get("parent"), Some(&Value::Null));
}

use lineage_core::{ArrayValue, LineageError, NodeKind, ObjectValue, Property, Value};
use serde_json::json;

#[test]
fn from_json_str_preserves_declaration_order() {
    let root = Value::from_json_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
    let keys: Vec<&str> = root
        .as_object()
        .unwrap()
        .properties()
        .iter()
        .map(Property::key)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn from_json_str_rejects_invalid_json() {
    let err = Value::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, LineageError::JsonParse(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn conversion_from_serde_value_maps_every_kind() {
    let root = Value::from(json!({
        "s": "text",
        "n": -4,
        "f": 1.5,
        "b": false,
        "z": null,
        "a": [],
        "o": {}
    }));
    let object = root.as_object().unwrap();
    let kinds: Vec<NodeKind> = object.properties().iter().map(|p| p.value().kind()).collect();
    assert_eq!(
        kinds,
        [
            NodeKind::String,
            NodeKind::Number,
            NodeKind::Number,
            NodeKind::Boolean,
            NodeKind::Null,
            NodeKind::Array,
            NodeKind::Object
        ]
    );
    assert_eq!(object.get("s").and_then(Value::as_str), Some("text"));
    assert_eq!(object.get("n"), Some(&Value::number(-4)));
}

#[test]
fn conversion_from_borrowed_serde_value() {
    let source = json!([1, [2]]);
    let root = Value::from(&source);
    let array = root.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array.get(1).unwrap().as_array().unwrap().len(), 1);
}

#[test]
fn builders_match_parsed_tree() {
    let built = Value::Object(ObjectValue::from_iter([
        ("a", Value::Array(ArrayValue::from_iter([Value::boolean(true), Value::null()]))),
        ("b", Value::string("x")),
    ]));
    let parsed = Value::from_json_str(r#"{"a":[true,null],"b":"x"}"#).unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn object_lookup_returns_first_duplicate() {
    let object = ObjectValue::new(vec![
        Property::new("k", Value::number(1)),
        Property::new("k", Value::number(2)),
    ]);
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("k"), Some(&Value::number(1)));
    assert!(object.get("missing").is_none());
}

#[test]
fn empty_containers() {
    assert!(ObjectValue::default().is_empty());
    assert!(ArrayValue::default().is_empty());
    assert_eq!(Value::from(ObjectValue::default()).kind(), NodeKind::Object);
    assert_eq!(Value::from(ArrayValue::default()).kind(), NodeKind::Array);
}

#[test]
fn node_kind_names_and_containers() {
    assert_eq!(NodeKind::Property.to_string(), "property");
    assert_eq!(NodeKind::Null.to_string(), "null");
    assert!(NodeKind::Array.is_container());
    assert!(NodeKind::Property.is_container());
    assert!(!NodeKind::String.is_container());
}

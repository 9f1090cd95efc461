use serde::{Deserialize, Serialize};

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Item {
    id: String,
    name: String,
}

fn item(id: &str, name: &str) -> Item {
    Item { id: id.to_owned(), name: name.to_owned() }
}

// =============================================================
// decode_entries
// =============================================================

#[test]
fn decode_empty_array() {
    let items: Vec<Item> = decode_entries("[]").unwrap();
    assert!(items.is_empty());
}

#[test]
fn decode_valid_payload() {
    let items: Vec<Item> = decode_entries(r#"[{"id":"a","name":"Soap"}]"#).unwrap();
    assert_eq!(items, vec![item("a", "Soap")]);
}

#[test]
fn decode_preserves_order() {
    let items: Vec<Item> =
        decode_entries(r#"[{"id":"b","name":"B"},{"id":"a","name":"A"}]"#).unwrap();
    assert_eq!(items[0].id, "b");
    assert_eq!(items[1].id, "a");
}

#[test]
fn decode_invalid_json_is_malformed() {
    let result: Result<Vec<Item>, DecodeFailure> = decode_entries("not json at all");
    assert!(matches!(result, Err(DecodeFailure::Malformed(_))));
}

#[test]
fn decode_wrong_shape_is_malformed() {
    // An object where an array is expected.
    let result: Result<Vec<Item>, DecodeFailure> = decode_entries(r#"{"id":"a"}"#);
    assert!(result.is_err());
}

#[test]
fn decode_wrong_entry_schema_is_malformed() {
    // Entries missing required fields.
    let result: Result<Vec<Item>, DecodeFailure> = decode_entries(r#"[{"id":"a"}]"#);
    assert!(result.is_err());
}

#[test]
fn decode_failure_displays_cause() {
    let result: Result<Vec<Item>, DecodeFailure> = decode_entries("{{");
    let message = result.unwrap_err().to_string();
    assert!(message.starts_with("slot does not hold a valid collection payload"));
}

// =============================================================
// encode_entries
// =============================================================

#[test]
fn encode_empty_collection() {
    let entries: Vec<Item> = Vec::new();
    assert_eq!(encode_entries(&entries), "[]");
}

#[test]
fn encode_then_decode_round_trips() {
    let entries = vec![item("a", "Soap"), item("b", "Towel")];
    let raw = encode_entries(&entries);
    let back: Vec<Item> = decode_entries(&raw).unwrap();
    assert_eq!(back, entries);
}

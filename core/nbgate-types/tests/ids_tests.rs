use nbgate_types::{DocumentId, Error};
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn document_id_new_is_unique() {
    let a = DocumentId::new();
    let b = DocumentId::new();
    assert_ne!(a, b);
}

#[test]
fn document_id_from_uuid_keeps_value() {
    let uuid = uuid::Uuid::now_v7();
    let id = DocumentId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn document_id_display_and_parse() {
    let id = DocumentId::new();
    let parsed = DocumentId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn document_id_parse_trims_whitespace() {
    let id = DocumentId::new();
    let parsed = DocumentId::from_str(&format!("  {id}\n")).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn document_id_parse_invalid() {
    let err = DocumentId::parse("not-a-uuid").unwrap_err();
    assert!(matches!(err, Error::InvalidDocumentId(_)));
    assert!(err.to_string().starts_with("invalid document id"));
}

#[test]
fn document_ids_are_time_ordered() {
    let first = DocumentId::new();
    let second = DocumentId::new();
    assert!(first < second);
}

#[test]
fn document_id_hash_and_eq() {
    let id = DocumentId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn document_id_serializes_as_plain_string() {
    let id = DocumentId::new();
    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json, serde_json::Value::String(id.to_string()));
}

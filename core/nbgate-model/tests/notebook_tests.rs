use nbgate_model::{Document, ModelError, Notebook, NOTEBOOK_DOC_TYPE};
use nbgate_types::{DocumentId, Requester};
use pretty_assertions::assert_eq;
use serde_json::json;

fn alice() -> Requester {
    Requester::new("alice").unwrap()
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_accepts_object() {
    let nb = Notebook::parse(r#"{"name":"Sales","snippets":[]}"#).unwrap();
    assert_eq!(nb.name(), "Sales");
    assert_eq!(nb.as_map().len(), 2);
}

#[test]
fn parse_rejects_malformed_json() {
    let err = Notebook::parse("{not json").unwrap_err();
    assert!(matches!(err, ModelError::InvalidPayload { field: "notebook", .. }));
}

#[test]
fn parse_rejects_non_object() {
    assert!(Notebook::parse("[1,2,3]").is_err());
    assert!(Notebook::parse("42").is_err());
}

#[test]
fn name_defaults_to_empty() {
    let nb = Notebook::parse(r#"{"name": 7}"#).unwrap();
    assert_eq!(nb.name(), "");
    assert_eq!(Notebook::default().name(), "");
}

// ── Document id ──────────────────────────────────────────────────

#[test]
fn document_id_absent_null_or_empty_is_none() {
    for raw in [r#"{}"#, r#"{"id": null}"#, r#"{"id": ""}"#] {
        let nb = Notebook::parse(raw).unwrap();
        assert_eq!(nb.document_id().unwrap(), None, "payload {raw}");
    }
}

#[test]
fn document_id_parses_uuid() {
    let id = DocumentId::new();
    let nb = Notebook::parse(&json!({ "id": id.to_string() }).to_string()).unwrap();
    assert_eq!(nb.document_id().unwrap(), Some(id));
}

#[test]
fn document_id_rejects_foreign_ids() {
    let nb = Notebook::parse(r#"{"id": "n1"}"#).unwrap();
    assert!(matches!(nb.document_id(), Err(ModelError::InvalidDocumentId(s)) if s == "n1"));

    let nb = Notebook::parse(r#"{"id": 12}"#).unwrap();
    assert!(matches!(nb.document_id(), Err(ModelError::InvalidDocumentId(_))));
}

// ── Document view ────────────────────────────────────────────────

#[test]
fn from_document_injects_id() {
    let mut doc = Document::new("Sales", NOTEBOOK_DOC_TYPE, &alice());
    let nb = Notebook::parse(r#"{"name":"Sales","snippets":[{"type":"hive"}]}"#).unwrap();
    doc.update_data(&nb);

    let view = Notebook::from_document(&doc).unwrap();
    assert_eq!(view.document_id().unwrap(), Some(doc.id));
    assert_eq!(
        view.to_value(),
        json!({"id": doc.id.to_string(), "name": "Sales", "snippets": [{"type": "hive"}]})
    );
}

#[test]
fn from_document_overrides_stale_id() {
    let mut doc = Document::new("x", NOTEBOOK_DOC_TYPE, &alice());
    doc.data = json!({"id": "stale"});
    let view = Notebook::from_document(&doc).unwrap();
    assert_eq!(view.as_map()["id"], json!(doc.id.to_string()));
}

#[test]
fn from_document_rejects_non_object_data() {
    let mut doc = Document::new("x", NOTEBOOK_DOC_TYPE, &alice());
    doc.data = json!([1, 2]);
    assert!(matches!(
        Notebook::from_document(&doc),
        Err(ModelError::CorruptDocument(id)) if id == doc.id.to_string()
    ));
}

#[test]
fn to_json_string_is_parseable_json() {
    let nb = Notebook::parse(r#"{"name":"n","snippets":[]}"#).unwrap();
    let text = nb.to_json_string().unwrap();
    let back: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, json!({"name": "n", "snippets": []}));
}

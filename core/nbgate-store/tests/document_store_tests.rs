use nbgate_model::{Notebook, NOTEBOOK_DOC_TYPE};
use nbgate_store::{DocumentStore, StorageError};
use nbgate_types::{DocumentId, Requester};
use pretty_assertions::assert_eq;
use serde_json::json;

fn alice() -> Requester {
    Requester::new("alice").unwrap()
}

#[test]
fn create_then_get() {
    let store = DocumentStore::open_in_memory().unwrap();
    let doc = store.create("Sales", NOTEBOOK_DOC_TYPE, &alice()).unwrap();

    let loaded = store.get(&doc.id).unwrap();
    assert_eq!(loaded, doc);
    assert_eq!(loaded.owner, "alice");
    assert_eq!(loaded.doc_type, "notebook");
    assert_eq!(loaded.data, json!({}));
}

#[test]
fn get_missing_is_not_found() {
    let store = DocumentStore::open_in_memory().unwrap();
    let id = DocumentId::new();
    match store.get(&id) {
        Err(StorageError::NotFound(missing)) => assert_eq!(missing, id.to_string()),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn save_overwrites_name_and_data() {
    let store = DocumentStore::open_in_memory().unwrap();
    let mut doc = store.create("Draft", NOTEBOOK_DOC_TYPE, &alice()).unwrap();

    let nb = Notebook::parse(r#"{"name":"Final","snippets":[{"type":"hive"}]}"#).unwrap();
    doc.update_data(&nb);
    doc.set_name("Final");
    store.save(&doc).unwrap();

    let loaded = store.get(&doc.id).unwrap();
    assert_eq!(loaded.name, "Final");
    assert_eq!(loaded.data, json!({"name": "Final", "snippets": [{"type": "hive"}]}));
    assert_eq!(loaded.created_at, doc.created_at);
}

#[test]
fn save_keeps_original_owner() {
    let store = DocumentStore::open_in_memory().unwrap();
    let mut doc = store.create("Shared", NOTEBOOK_DOC_TYPE, &alice()).unwrap();

    doc.owner = "mallory".into();
    doc.set_name("Renamed");
    store.save(&doc).unwrap();

    let loaded = store.get(&doc.id).unwrap();
    assert_eq!(loaded.owner, "alice");
    assert_eq!(loaded.name, "Renamed");
}

#[test]
fn documents_are_independent() {
    let store = DocumentStore::open_in_memory().unwrap();
    let a = store.create("a", NOTEBOOK_DOC_TYPE, &alice()).unwrap();
    let b = store.create("b", NOTEBOOK_DOC_TYPE, &Requester::new("bob").unwrap()).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(store.get(&a.id).unwrap().name, "a");
    assert_eq!(store.get(&b.id).unwrap().owner, "bob");
}

#[test]
fn documents_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("documents.duckdb");

    let id = {
        let store = DocumentStore::open(&path).unwrap();
        let mut doc = store.create("Persisted", NOTEBOOK_DOC_TYPE, &alice()).unwrap();
        doc.update_data(&Notebook::parse(r#"{"name":"Persisted"}"#).unwrap());
        store.save(&doc).unwrap();
        doc.id
    };

    let store = DocumentStore::open(&path).unwrap();
    let loaded = store.get(&id).unwrap();
    assert_eq!(loaded.name, "Persisted");
    assert_eq!(loaded.data, json!({"name": "Persisted"}));
}

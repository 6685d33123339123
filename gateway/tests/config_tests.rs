use nbgate_model::NOTEBOOK_DOC_TYPE;
use nbgate_server::GatewayConfig;
use nbgate_types::Requester;

#[test]
fn default_config() {
    let config = GatewayConfig::default();
    assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8899");
    assert_eq!(config.user_header.as_str(), "x-remote-user");
    assert!(config.database.is_none());
}

#[test]
fn default_config_opens_in_memory_store() {
    let store = GatewayConfig::default().open_documents().unwrap();
    let doc = store
        .create("n", NOTEBOOK_DOC_TYPE, &Requester::new("alice").unwrap())
        .unwrap();
    assert_eq!(store.get(&doc.id).unwrap().name, "n");
}

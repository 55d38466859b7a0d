mod common;

use common::init_tracing;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use transcend_client::mock::MockTransport;
use transcend_reconcile::{Enricher, Operation, ReconcileError, Reconciler};
use transcend_types::{ConfigValue, ResourceData, ValueSet};

fn setup() -> (Arc<MockTransport>, Reconciler<Enricher>) {
    init_tracing();
    let mock = Arc::new(MockTransport::new());
    let reconciler = Reconciler::<Enricher>::new(mock.clone());
    (mock, reconciler)
}

fn remote_enricher(id: &str) -> serde_json::Value {
    json!({
        "enrichers": { "nodes": [{
            "id": id,
            "title": "User Lookup",
            "description": "Finds phone numbers",
            "url": "https://example.com/lookup",
            "inputIdentifier": { "name": "email" },
            "identifiers": [{ "name": "email" }, { "name": "phone" }],
            "actions": ["ACCESS", "ERASURE"],
            "headers": [{ "name": "x-api", "value": "abc", "isSecret": true }]
        }]}
    })
}

fn lookup_values() -> ValueSet {
    ValueSet::new()
        .with("title", "User Lookup")
        .with("description", "Finds phone numbers")
        .with("url", "https://example.com/lookup")
        .with("input_identifier", "email")
        .with("identifiers", vec!["email", "phone"])
        .with("actions", vec!["ACCESS", "ERASURE"])
        .with(
            "headers",
            vec![
                ValueSet::new()
                    .with("name", "x-api")
                    .with("value", "abc")
                    .with("is_secret", true),
            ],
        )
}

#[tokio::test]
async fn import_populates_every_synced_field() {
    let (mock, reconciler) = setup();
    mock.push_data(remote_enricher("enr-1"));

    let data = reconciler.import("enr-1").await.unwrap();

    assert_eq!(data.id().map(|id| id.as_str()), Some("enr-1"));
    assert_eq!(data.values(), &lookup_values());

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request.name(), "Enrichers");
    assert_eq!(requests[0].request.variables, json!({ "ids": ["enr-1"] }));
}

#[tokio::test]
async fn create_sends_flattened_identifiers() {
    let (mock, reconciler) = setup();
    mock.push_data(json!({ "updateOrCreateEnricher": { "enricher": { "id": "enr-1" } } }));
    mock.push_data(remote_enricher("enr-1"));

    let mut data = ResourceData::new(lookup_values());
    let id = reconciler.create(&mut data).await.unwrap();

    assert_eq!(id.as_str(), "enr-1");
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);

    let input = &requests[0].request.variables["input"];
    assert_eq!(input["inputIdentifier"], json!("email"));
    assert_eq!(input["identifiers"], json!(["email", "phone"]));
    assert_eq!(input["actions"], json!(["ACCESS", "ERASURE"]));
    assert_eq!(
        input["headers"],
        json!([{ "name": "x-api", "value": "abc", "isSecret": true }])
    );
    assert!(input.get("id").is_none());
}

#[tokio::test]
async fn missing_remote_input_identifier_reads_as_empty() {
    let (mock, reconciler) = setup();
    mock.push_data(json!({
        "enrichers": { "nodes": [{
            "id": "enr-2",
            "title": "Bare",
            "description": null,
            "url": null,
            "inputIdentifier": null
        }]}
    }));

    let data = reconciler.import("enr-2").await.unwrap();
    let values = data.values();

    assert_eq!(values.get("input_identifier"), Some(&ConfigValue::from("")));
    assert_eq!(values.get("url"), Some(&ConfigValue::from("")));
    assert_eq!(values.get("identifiers"), Some(&ConfigValue::List(Vec::new())));
    assert_eq!(values.get("headers"), Some(&ConfigValue::List(Vec::new())));
}

#[tokio::test]
async fn delete_sends_id_list_and_clears_id() {
    let (mock, reconciler) = setup();
    mock.push_data(json!({ "deleteEnrichers": { "success": true } }));

    let mut data = ResourceData::with_id("enr-1".parse().unwrap());
    reconciler.delete(&mut data).await.unwrap();

    assert!(data.id().is_none());
    let requests = mock.requests();
    assert_eq!(requests[0].request.name(), "DeleteEnrichers");
    assert_eq!(requests[0].request.variables, json!({ "ids": ["enr-1"] }));
}

#[tokio::test]
async fn update_without_id_is_rejected_locally() {
    let (mock, reconciler) = setup();

    let mut data = ResourceData::new(lookup_values());
    let err = reconciler.update(&mut data).await.unwrap_err();

    assert!(matches!(
        err,
        ReconcileError::MissingId {
            operation: Operation::Update,
            ..
        }
    ));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn wrong_shape_for_identifiers_is_type_mismatch() {
    let (mock, reconciler) = setup();

    let mut data = ResourceData::new(lookup_values().with("identifiers", "email"));
    let err = reconciler.create(&mut data).await.unwrap_err();

    assert!(matches!(err, ReconcileError::TypeMismatch { .. }));
    assert!(mock.requests().is_empty());
}

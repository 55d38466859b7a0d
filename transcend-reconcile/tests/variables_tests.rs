use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;
use transcend_reconcile::VariableSet;
use transcend_types::ResourceId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitleInput {
    title: String,
    owner_emails: Vec<String>,
}

#[derive(Serialize)]
struct WithStrayId {
    id: &'static str,
    name: &'static str,
}

fn title_input() -> TitleInput {
    TitleInput {
        title: "Webhook".to_string(),
        owner_emails: vec!["a@example.com".to_string()],
    }
}

#[test]
fn new_resource_has_no_id() {
    let variables = VariableSet::NewResource(title_input());

    assert!(variables.id().is_none());
    assert_eq!(
        variables.to_variables().unwrap(),
        json!({ "input": { "title": "Webhook", "ownerEmails": ["a@example.com"] } })
    );
}

#[test]
fn existing_resource_carries_id_inside_input() {
    let id = ResourceId::parse("silo-7").unwrap();
    let variables = VariableSet::ExistingResource(id.clone(), title_input());

    assert_eq!(variables.id(), Some(&id));
    assert_eq!(variables.input(), &title_input());
    assert_eq!(
        variables.to_variables().unwrap(),
        json!({ "input": {
            "id": "silo-7",
            "title": "Webhook",
            "ownerEmails": ["a@example.com"]
        }})
    );
}

#[test]
fn new_resource_drops_id_from_input() {
    let variables = VariableSet::NewResource(WithStrayId {
        id: "leftover",
        name: "x",
    });

    assert_eq!(
        variables.to_variables().unwrap(),
        json!({ "input": { "name": "x" } })
    );
}

#[test]
fn existing_id_wins_over_input_id() {
    let id = ResourceId::parse("real").unwrap();
    let variables = VariableSet::ExistingResource(
        id,
        WithStrayId {
            id: "leftover",
            name: "x",
        },
    );

    assert_eq!(variables.to_variables().unwrap()["input"]["id"], json!("real"));
}

#[test]
fn non_object_input_is_rejected() {
    let variables = VariableSet::NewResource(vec!["not", "an", "object"]);
    let err = variables.to_variables().unwrap_err();
    assert!(err.to_string().contains("must serialize to an object"));
}

#[test]
fn unit_input_renders_empty_object() {
    let variables = VariableSet::NewResource(());
    assert_eq!(variables.to_variables().unwrap(), json!({ "input": {} }));
}

//! In-memory stand-in for the data point GraphQL API.
//!
//! Stores each upserted data point as the remote entity shape so reads go
//! through the same decoding as the real API. Updates replace the stored
//! entity wholesale, like the backend does.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::sync::Mutex;
use transcend_client::{ClientError, ClientResult, GraphqlError, GraphqlRequest, Transport};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct FakeDataPointApi {
    entities: Mutex<BTreeMap<String, Value>>,
    calls: Mutex<Vec<GraphqlRequest>>,
    fail_next: Mutex<Option<ClientError>>,
}

impl FakeDataPointApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with `error` without touching state.
    pub fn fail_next(&self, error: ClientError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<GraphqlRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operation_names(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.name().to_string()).collect()
    }

    pub fn stored(&self, id: &str) -> Option<Value> {
        self.entities.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entities.lock().unwrap().len()
    }

    fn handle(&self, request: GraphqlRequest) -> ClientResult<Value> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }

        match request.name() {
            "UpdateOrCreateDataPoint" => self.upsert(&request.variables["input"]),
            "DataPoints" => Ok(self.read(&request.variables["ids"])),
            "DeleteDataPoints" => Ok(self.delete(&request.variables["ids"])),
            other => Err(graphql_error(&format!("unknown operation {other}"))),
        }
    }

    fn upsert(&self, input: &Value) -> ClientResult<Value> {
        let mut entities = self.entities.lock().unwrap();

        let id = match input.get("id").and_then(Value::as_str) {
            Some(id) if !entities.contains_key(id) => {
                return Err(graphql_error(&format!("data point {id} does not exist")));
            }
            Some(id) => id.to_string(),
            None => uuid::Uuid::new_v4().to_string(),
        };

        let tag = input["dataCollectionTag"].as_str().unwrap_or_default();
        let mut entity = Map::new();
        entity.insert("id".into(), json!(id));
        entity.insert("name".into(), input["name"].clone());
        entity.insert("title".into(), json!({ "defaultMessage": input["title"] }));
        entity.insert(
            "description".into(),
            json!({ "defaultMessage": input["description"] }),
        );
        entity.insert("dataSilo".into(), json!({ "id": input["dataSiloId"] }));
        entity.insert(
            "dataCollection".into(),
            if tag.is_empty() { Value::Null } else { json!({ "visualId": tag }) },
        );
        entity.insert("enabledActions".into(), input["enabledActions"].clone());
        entity.insert("querySuggestions".into(), input["querySuggestions"].clone());
        entity.insert("subDataPoints".into(), input["subDataPoints"].clone());

        entities.insert(id.clone(), Value::Object(entity));

        Ok(json!({
            "updateOrCreateDataPoint": {
                "dataPoint": { "id": id, "name": input["name"] }
            }
        }))
    }

    fn read(&self, ids: &Value) -> Value {
        let entities = self.entities.lock().unwrap();
        let nodes: Vec<Value> = ids
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .filter_map(|id| entities.get(id).cloned())
            .collect();
        json!({ "dataPoints": { "nodes": nodes } })
    }

    fn delete(&self, ids: &Value) -> Value {
        let mut entities = self.entities.lock().unwrap();
        for id in ids.as_array().into_iter().flatten().filter_map(Value::as_str) {
            entities.remove(id);
        }
        json!({ "deleteDataPoints": { "success": true } })
    }
}

#[async_trait]
impl Transport for FakeDataPointApi {
    async fn query(&self, request: GraphqlRequest) -> ClientResult<Value> {
        self.handle(request)
    }

    async fn mutate(&self, request: GraphqlRequest) -> ClientResult<Value> {
        self.handle(request)
    }
}

pub fn graphql_error(message: &str) -> ClientError {
    ClientError::Graphql(vec![GraphqlError {
        message: message.to_string(),
        path: Vec::new(),
    }])
}

//! Mutation variables for the create-or-update path.

use serde::Serialize;
use serde_json::{Map, Value, json};
use transcend_types::ResourceId;

/// Input for the shared create-or-update mutation.
///
/// The backend decides between create and update purely on whether `id` is
/// present, so the two cases are kept as distinct variants.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableSet<I> {
    /// No id: the backend assigns one.
    NewResource(I),
    /// Existing id: the backend replaces the entity in full.
    ExistingResource(ResourceId, I),
}

impl<I> VariableSet<I> {
    pub fn id(&self) -> Option<&ResourceId> {
        match self {
            VariableSet::NewResource(_) => None,
            VariableSet::ExistingResource(id, _) => Some(id),
        }
    }

    pub fn input(&self) -> &I {
        match self {
            VariableSet::NewResource(input) | VariableSet::ExistingResource(_, input) => input,
        }
    }
}

impl<I: Serialize> VariableSet<I> {
    /// Renders `{ "input": { ...fields, "id"? } }`.
    pub fn to_variables(&self) -> serde_json::Result<Value> {
        let mut input = match serde_json::to_value(self.input())? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "mutation input must serialize to an object, got {other}"
                )));
            }
        };

        match self.id() {
            Some(id) => {
                input.insert("id".to_string(), Value::String(id.to_string()));
            }
            None => {
                input.remove("id");
            }
        }

        Ok(json!({ "input": input }))
    }
}

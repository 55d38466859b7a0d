//! GraphQL-over-JSON envelope types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a request reads or writes remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Query => f.write_str("query"),
            OperationKind::Mutation => f.write_str("mutation"),
        }
    }
}

/// A single GraphQL operation with its variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    /// Creates a request for a named operation.
    pub fn new(
        query: impl Into<String>,
        operation_name: impl Into<String>,
        variables: serde_json::Value,
    ) -> Self {
        Self {
            query: query.into(),
            operation_name: Some(operation_name.into()),
            variables,
        }
    }

    /// Operation name for logs, or `"anonymous"`.
    pub fn name(&self) -> &str {
        self.operation_name.as_deref().unwrap_or("anonymous")
    }
}

/// Response envelope. `data` and `errors` may both be present.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        let path = self
            .path
            .iter()
            .map(|seg| match seg {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{} (at {})", self.message, path)
    }
}

//! Transport error types.

use thiserror::Error;

use crate::graphql::GraphqlError;

/// Result type for transport operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the remote API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),

    #[error("response contained no data")]
    MissingData,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true if the backend rejected the request (validation,
    /// authorization) rather than the request failing to arrive.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, ClientError::Graphql(_) | ClientError::Api { .. })
    }

    /// Returns true if this is a 401/403 response.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ClientError::Api { status, .. } => *status == 401 || *status == 403,
            ClientError::Http(e) => e
                .status()
                .is_some_and(|s| s.as_u16() == 401 || s.as_u16() == 403),
            _ => false,
        }
    }
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

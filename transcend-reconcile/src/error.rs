//! Error types for reconciliation.

use std::fmt;
use thiserror::Error;
use transcend_client::ClientError;
use transcend_convert::ConvertError;
use transcend_types::ResourceId;

/// Result type for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// The lifecycle operation that was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Import => "import",
        };
        f.write_str(verb)
    }
}

/// Errors that can occur while reconciling a resource.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Configuration did not match the declared field shapes.
    #[error("invalid {kind} configuration: {source}")]
    TypeMismatch {
        kind: &'static str,
        #[source]
        source: ConvertError,
    },

    /// The backend rejected or failed a create, update or delete.
    #[error("failed to {operation} {kind}{}: {source}", fmt_id(.id.as_ref()))]
    RemoteMutation {
        kind: &'static str,
        operation: Operation,
        id: Option<ResourceId>,
        #[source]
        source: ClientError,
    },

    /// The read query itself failed (distinct from finding nothing).
    #[error("failed to read {kind} {id}: {source}")]
    RemoteQuery {
        kind: &'static str,
        id: ResourceId,
        #[source]
        source: ClientError,
    },

    /// No remote entity matches the identifier.
    #[error("cannot find {kind} {id}")]
    NotFound { kind: &'static str, id: ResourceId },

    /// The operation needs an identifier but the resource has none.
    #[error("cannot {operation} {kind}: resource has no identifier")]
    MissingId {
        kind: &'static str,
        operation: Operation,
    },

    /// The backend answered an update with a different identifier.
    #[error("{kind} {expected} was returned as {actual} after update")]
    IdentityChanged {
        kind: &'static str,
        expected: ResourceId,
        actual: ResourceId,
    },

    /// The backend answered with a shape we could not interpret.
    #[error("unexpected {kind} response: {message}")]
    UnexpectedResponse { kind: &'static str, message: String },

    #[error("invalid identifier: {0}")]
    InvalidId(#[from] transcend_types::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReconcileError {
    /// Returns true if the remote entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReconcileError::NotFound { .. })
    }

    /// Returns the identifier the failing operation was keyed by, if any.
    pub fn resource_id(&self) -> Option<&ResourceId> {
        match self {
            ReconcileError::RemoteMutation { id, .. } => id.as_ref(),
            ReconcileError::RemoteQuery { id, .. } | ReconcileError::NotFound { id, .. } => {
                Some(id)
            }
            ReconcileError::IdentityChanged { expected, .. } => Some(expected),
            _ => None,
        }
    }
}

fn fmt_id(id: Option<&ResourceId>) -> String {
    id.map(|id| format!(" {id}")).unwrap_or_default()
}

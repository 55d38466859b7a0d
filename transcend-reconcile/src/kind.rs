//! Per-resource-kind description consumed by the generic reconciler.

use serde::Serialize;
use serde::de::DeserializeOwned;
use transcend_client::GraphqlRequest;
use transcend_convert::{ConvertResult, FieldProjection};
use transcend_types::{ResourceId, ValueSet};

/// GraphQL documents and response locations for one resource kind.
///
/// Pointers are JSON pointers into the response's `data` object.
#[derive(Debug, Clone, Copy)]
pub struct Operations {
    /// Create-or-update mutation taking `$input`.
    pub upsert: &'static str,
    pub upsert_name: &'static str,
    /// Location of the id assigned or confirmed by the upsert.
    pub upsert_id: &'static str,
    /// Query taking `$ids` and returning a connection.
    pub read: &'static str,
    pub read_name: &'static str,
    /// Location of the `nodes` array in the read response.
    pub read_nodes: &'static str,
    /// Mutation taking `$ids`.
    pub delete: &'static str,
    pub delete_name: &'static str,
}

/// One resource type the reconciler can manage.
///
/// Implementors are zero-sized markers; all state lives in the
/// [`ResourceData`](transcend_types::ResourceData) passed to each call.
pub trait ResourceKind: Send + Sync + 'static {
    /// Human-readable kind used in logs and errors.
    const KIND: &'static str;

    const OPERATIONS: Operations;

    /// Mutation input built from the full declared value set.
    type Input: Serialize + Send + Sync;

    /// Entity shape returned by the read query.
    type Remote: DeserializeOwned + Send;

    /// Builds mutation input. Every owned nested collection must be present,
    /// even when empty.
    fn build_input(values: &ValueSet) -> ConvertResult<Self::Input>;

    /// Fields written back into local state after a read.
    fn projection() -> Vec<FieldProjection<Self::Remote>>;

    /// Extra mutation to run after a successful upsert.
    fn follow_up(values: &ValueSet, id: &ResourceId) -> ConvertResult<Option<GraphqlRequest>> {
        let _ = (values, id);
        Ok(None)
    }
}

//! Transport abstraction.
//!
//! Lets the reconciler run against the real API or an in-memory stand-in.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ClientResult;
use crate::graphql::GraphqlRequest;

/// Executes GraphQL operations against the remote API.
///
/// Both calls return the response's `data` object. A response carrying
/// GraphQL errors is an `Err`, never a partial `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Runs a read-only query.
    async fn query(&self, request: GraphqlRequest) -> ClientResult<serde_json::Value>;

    /// Runs a mutation.
    async fn mutate(&self, request: GraphqlRequest) -> ClientResult<serde_json::Value>;
}

/// Decodes a `data` object into the expected result shape.
pub fn decode<T: DeserializeOwned>(data: serde_json::Value) -> ClientResult<T> {
    Ok(serde_json::from_value(data)?)
}

//! A scripted transport for testing.
//!
//! Responses are replayed in FIFO order regardless of operation; every
//! request is recorded so tests can assert on the variables sent.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ClientError, ClientResult};
use crate::graphql::{GraphqlRequest, OperationKind};
use crate::transport::Transport;

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub kind: OperationKind,
    pub request: GraphqlRequest,
}

/// Transport that replays queued responses.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ClientResult<serde_json::Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful `data` payload.
    pub fn push_data(&self, data: serde_json::Value) {
        self.lock_responses().push_back(Ok(data));
    }

    /// Queues an error.
    pub fn push_error(&self, error: ClientError) {
        self.lock_responses().push_back(Err(error));
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.lock_responses().len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<ClientResult<serde_json::Value>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next(&self, kind: OperationKind, request: GraphqlRequest) -> ClientResult<serde_json::Value> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest { kind, request });
        self.lock_responses()
            .pop_front()
            .unwrap_or(Err(ClientError::MissingData))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn query(&self, request: GraphqlRequest) -> ClientResult<serde_json::Value> {
        self.next(OperationKind::Query, request)
    }

    async fn mutate(&self, request: GraphqlRequest) -> ClientResult<serde_json::Value> {
        self.next(OperationKind::Mutation, request)
    }
}

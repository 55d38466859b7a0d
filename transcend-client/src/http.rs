//! HTTP transport.
//!
//! POSTs GraphQL requests as JSON to a single endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::INTERNAL_AUTH_HEADER;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::graphql::{GraphqlRequest, GraphqlResponse, OperationKind};
use crate::transport::Transport;

/// GraphQL-over-HTTP transport with bearer authentication.
pub struct HttpTransport {
    config: ClientConfig,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport from validated settings.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Returns the endpoint this transport talks to.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    async fn execute(
        &self,
        kind: OperationKind,
        request: GraphqlRequest,
    ) -> ClientResult<serde_json::Value> {
        debug!("Sending {} {} to {}", kind, request.name(), self.config.url);

        let mut builder = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_token)
            .json(&request);

        if let Some(key) = self.config.internal_key.as_deref() {
            builder = builder.header(INTERNAL_AUTH_HEADER, format!("Bearer {key}"));
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("{} {} failed with status {}", kind, request.name(), status);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphqlResponse<serde_json::Value> = response.json().await?;

        if !body.errors.is_empty() {
            debug!(
                "{} {} returned {} GraphQL error(s)",
                kind,
                request.name(),
                body.errors.len()
            );
            return Err(ClientError::Graphql(body.errors));
        }

        match body.data {
            Some(serde_json::Value::Null) | None => Err(ClientError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn query(&self, request: GraphqlRequest) -> ClientResult<serde_json::Value> {
        self.execute(OperationKind::Query, request).await
    }

    async fn mutate(&self, request: GraphqlRequest) -> ClientResult<serde_json::Value> {
        self.execute(OperationKind::Mutation, request).await
    }
}

//! GraphQL transport for the Transcend API.
//!
//! The reconciler only needs two calls from the outside world: run a query,
//! run a mutation. This crate provides the [`Transport`] seam for that plus
//! an HTTP implementation that speaks GraphQL-over-JSON with bearer
//! credentials.
//!
//! # Example
//!
//! ```no_run
//! use transcend_client::{ClientConfig, HttpTransport};
//!
//! let config = ClientConfig {
//!     api_token: "secret".to_string(),
//!     ..Default::default()
//! };
//! let transport = HttpTransport::new(config).unwrap();
//! ```

mod config;
mod error;
mod graphql;
mod http;
pub mod mock;
mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use graphql::{GraphqlError, GraphqlRequest, GraphqlResponse, OperationKind};
pub use http::HttpTransport;
pub use transport::{Transport, decode};

/// Header carrying the secondary gateway credential.
pub const INTERNAL_AUTH_HEADER: &str = "x-sombra-authorization";

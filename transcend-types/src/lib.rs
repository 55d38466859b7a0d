//! Core type definitions for Transcend resource reconciliation.
//!
//! This crate defines the shapes shared by every layer of the reconciler:
//! - Resource identifiers assigned by the remote service
//! - Configuration values as declared by an operator
//! - Per-resource state (identifier plus declared values)
//!
//! Nothing here performs I/O or knows about the remote schema. Typed
//! conversion lives in `transcend-convert`.

mod ids;
mod resource;
mod value;

pub use ids::ResourceId;
pub use resource::ResourceData;
pub use value::{ConfigValue, ValueSet};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource identifier must not be empty")]
    EmptyId,
}

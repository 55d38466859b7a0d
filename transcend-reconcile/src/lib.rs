//! Reconciliation of declared Transcend resources against the remote API.
//!
//! An operator declares data silos, data points and enrichers as
//! configuration. A [`Reconciler`] drives each declaration through
//! create, read, update, delete and import using only request/response calls
//! to the GraphQL API.
//!
//! # Architecture
//!
//! - **Kind**: [`ResourceKind`] describes one resource type: its GraphQL
//!   documents, how to build mutation input from configuration, and which
//!   remote fields are synced back.
//! - **Variables**: [`VariableSet`] makes the create/update split explicit.
//!   Both go through one create-or-update mutation; only the presence of an
//!   id differs.
//! - **Reconciler**: [`Reconciler`] is generic over the kind and holds nothing
//!   but the transport handle.
//!
//! ## Lifecycle
//!
//! 1. **Create**: upsert without id, record the returned id, read back
//! 2. **Read**: query by id, merge the synced subset into local values
//! 3. **Update**: upsert with the existing id, read back
//! 4. **Delete**: delete by id, clear the local id
//! 5. **Import**: treat an external id as local, read everything
//!
//! Every update sends the full desired object, nested collections included
//! (an empty list clears the remote collection).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use transcend_client::{ClientConfig, HttpTransport};
//! use transcend_reconcile::{DataPoint, Reconciler};
//! use transcend_types::{ConfigValue, ResourceData, ValueSet};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpTransport::new(ClientConfig::from_env())?);
//! let reconciler = Reconciler::<DataPoint>::new(transport);
//!
//! let mut data = ResourceData::new(
//!     ValueSet::new()
//!         .with("data_silo_id", "silo-1")
//!         .with("name", "ssn")
//!         .with("title", "SSN")
//!         .with("enabled_actions", vec!["ACCESS"])
//!         .with("sub_data_points", ConfigValue::List(Vec::new())),
//! );
//! let id = reconciler.create(&mut data).await?;
//! println!("created {id}");
//! # Ok(())
//! # }
//! ```

mod error;
mod kind;
mod reconciler;
pub mod resources;
pub mod schema;
mod variables;

pub use error::{Operation, ReconcileError, ReconcileResult};
pub use kind::{Operations, ResourceKind};
pub use reconciler::Reconciler;
pub use resources::{DataPoint, DataSilo, Enricher};
pub use variables::VariableSet;

//! Generic create/read/update/delete/import driver.

use serde_json::{Value, json};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};
use transcend_client::{ClientError, GraphqlRequest, Transport, decode};
use transcend_convert::from_remote;
use transcend_types::{ResourceData, ResourceId, ValueSet};

use crate::error::{Operation, ReconcileError, ReconcileResult};
use crate::kind::ResourceKind;
use crate::variables::VariableSet;

/// Drives one resource kind against the remote API.
///
/// Holds only the transport handle. Calls are independent: nothing learned
/// in one call is reused by the next, and remote state is always re-read
/// rather than trusted from a mutation response.
pub struct Reconciler<K: ResourceKind> {
    transport: Arc<dyn Transport>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> Clone for Reconciler<K> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _kind: PhantomData,
        }
    }
}

impl<K: ResourceKind> Reconciler<K> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _kind: PhantomData,
        }
    }

    /// Returns the kind label this reconciler manages.
    pub fn kind(&self) -> &'static str {
        K::KIND
    }

    /// Creates the remote entity and reads it back.
    ///
    /// The new id is recorded in `data` as soon as the mutation succeeds, so
    /// a failed follow-up or read-back still leaves the caller holding the
    /// id of what was created.
    pub async fn create(&self, data: &mut ResourceData) -> ReconcileResult<ResourceId> {
        if let Some(existing) = data.id() {
            warn!(
                "Creating {} that already tracks id {}, a new entity will be created",
                K::KIND,
                existing
            );
        }

        let variables = VariableSet::NewResource(self.build_input(data.values())?);
        let id = self.upsert(Operation::Create, &variables).await?;

        info!("Created {} {}", K::KIND, id);
        data.set_id(id.clone());

        self.follow_up(Operation::Create, &id, data.values()).await?;
        self.read(data).await?;
        Ok(id)
    }

    /// Refreshes the synced fields of `data` from the remote entity.
    ///
    /// Fields outside the kind's projection (write-only secrets, for
    /// instance) keep their local values.
    pub async fn read(&self, data: &mut ResourceData) -> ReconcileResult<()> {
        let id = self.require_id(data, Operation::Read)?;
        let remote = self.fetch(&id).await?;
        data.values_mut().merge(from_remote(&remote, &K::projection()));
        Ok(())
    }

    /// Replaces the remote entity with the full declared state, then reads
    /// it back. The id never changes.
    pub async fn update(&self, data: &mut ResourceData) -> ReconcileResult<()> {
        let id = self.require_id(data, Operation::Update)?;

        let variables = VariableSet::ExistingResource(id.clone(), self.build_input(data.values())?);
        let returned = self.upsert(Operation::Update, &variables).await?;

        if returned != id {
            return Err(ReconcileError::IdentityChanged {
                kind: K::KIND,
                expected: id,
                actual: returned,
            });
        }

        self.follow_up(Operation::Update, &id, data.values()).await?;

        info!("Updated {} {}", K::KIND, id);
        self.read(data).await
    }

    /// Deletes the remote entity and dissociates the local record.
    ///
    /// On failure the id is left in place so the caller can retry.
    pub async fn delete(&self, data: &mut ResourceData) -> ReconcileResult<()> {
        let id = self.require_id(data, Operation::Delete)?;
        let ops = K::OPERATIONS;

        let request = GraphqlRequest::new(ops.delete, ops.delete_name, ids_variables(&id));
        self.transport
            .mutate(request)
            .await
            .map_err(mutation_error::<K>(Operation::Delete, Some(id.clone())))?;

        data.clear_id();
        info!("Deleted {} {}", K::KIND, id);
        Ok(())
    }

    /// Builds full local state for an existing remote entity.
    pub async fn import(&self, id: &str) -> ReconcileResult<ResourceData> {
        let id = ResourceId::parse(id)?;
        debug!("Importing {} {}", K::KIND, id);

        let mut data = ResourceData::with_id(id);
        self.read(&mut data).await?;
        Ok(data)
    }

    // ── Helpers ──────────────────────────────────────────────────

    fn require_id(&self, data: &ResourceData, operation: Operation) -> ReconcileResult<ResourceId> {
        data.id().cloned().ok_or(ReconcileError::MissingId {
            kind: K::KIND,
            operation,
        })
    }

    fn build_input(&self, values: &ValueSet) -> ReconcileResult<K::Input> {
        K::build_input(values).map_err(|source| ReconcileError::TypeMismatch {
            kind: K::KIND,
            source,
        })
    }

    /// Runs the create-or-update mutation, returning the id the backend
    /// reports.
    async fn upsert(
        &self,
        operation: Operation,
        variables: &VariableSet<K::Input>,
    ) -> ReconcileResult<ResourceId> {
        let ops = K::OPERATIONS;

        let request = GraphqlRequest::new(ops.upsert, ops.upsert_name, variables.to_variables()?);
        let data = self
            .transport
            .mutate(request)
            .await
            .map_err(mutation_error::<K>(operation, variables.id().cloned()))?;

        let raw_id = data
            .pointer(ops.upsert_id)
            .and_then(Value::as_str)
            .ok_or_else(|| ReconcileError::UnexpectedResponse {
                kind: K::KIND,
                message: format!("no id at {}", ops.upsert_id),
            })?;
        let id = ResourceId::parse(raw_id)?;

        Ok(id)
    }

    /// Runs the kind's post-upsert mutation, if it has one.
    async fn follow_up(
        &self,
        operation: Operation,
        id: &ResourceId,
        values: &ValueSet,
    ) -> ReconcileResult<()> {
        let request = K::follow_up(values, id).map_err(|source| ReconcileError::TypeMismatch {
            kind: K::KIND,
            source,
        })?;
        let Some(request) = request else {
            return Ok(());
        };

        debug!("Running {} for {} {}", request.name(), K::KIND, id);
        self.transport
            .mutate(request)
            .await
            .map_err(mutation_error::<K>(operation, Some(id.clone())))?;
        Ok(())
    }

    /// Queries by id and returns the single matching entity.
    async fn fetch(&self, id: &ResourceId) -> ReconcileResult<K::Remote> {
        let ops = K::OPERATIONS;
        let request = GraphqlRequest::new(ops.read, ops.read_name, ids_variables(id));

        let data = self
            .transport
            .query(request)
            .await
            .map_err(|source| ReconcileError::RemoteQuery {
                kind: K::KIND,
                id: id.clone(),
                source,
            })?;

        let nodes = data
            .pointer(ops.read_nodes)
            .cloned()
            .ok_or_else(|| ReconcileError::UnexpectedResponse {
                kind: K::KIND,
                message: format!("no nodes at {}", ops.read_nodes),
            })?;
        let nodes: Vec<K::Remote> = decode(nodes).map_err(|source| ReconcileError::RemoteQuery {
            kind: K::KIND,
            id: id.clone(),
            source,
        })?;

        if nodes.len() > 1 {
            warn!(
                "{} lookup by id {} matched {} entities, using the first",
                K::KIND,
                id,
                nodes.len()
            );
        }

        nodes.into_iter().next().ok_or_else(|| ReconcileError::NotFound {
            kind: K::KIND,
            id: id.clone(),
        })
    }
}

fn mutation_error<K: ResourceKind>(
    operation: Operation,
    id: Option<ResourceId>,
) -> impl FnOnce(ClientError) -> ReconcileError {
    move |source| ReconcileError::RemoteMutation {
        kind: K::KIND,
        operation,
        id,
        source,
    }
}

fn ids_variables(id: &ResourceId) -> Value {
    json!({ "ids": [id.as_str()] })
}

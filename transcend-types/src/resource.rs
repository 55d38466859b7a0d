use serde::{Deserialize, Serialize};

use crate::{ResourceId, ValueSet};

/// Local state of one declared resource: its tracking key and its values.
///
/// `id` is `None` until a create succeeds and again after a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ResourceId>,
    #[serde(default)]
    values: ValueSet,
}

impl ResourceData {
    /// Creates state for a resource that does not exist remotely yet.
    #[must_use]
    pub fn new(values: ValueSet) -> Self {
        Self { id: None, values }
    }

    /// Creates empty state tracking an existing remote entity (import).
    #[must_use]
    pub fn with_id(id: ResourceId) -> Self {
        Self {
            id: Some(id),
            values: ValueSet::new(),
        }
    }

    pub fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: ResourceId) {
        self.id = Some(id);
    }

    /// Dissociates the local record from the remote entity.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn values(&self) -> &ValueSet {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ValueSet {
        &mut self.values
    }
}

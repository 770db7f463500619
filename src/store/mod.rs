//! Data access for handover aggregates

pub mod json;

use std::collections::HashMap;

use crate::error::StoreError;
use crate::model::HandoverAggregate;

pub use json::JsonFileStore;

/// Read-only access to stored handovers
pub trait HandoverStore {
    /// The handover with everything that belongs to it, or `None` if no
    /// handover has this id
    fn load_aggregate(&self, id: &str) -> Result<Option<HandoverAggregate>, StoreError>;
}

/// Aggregates held in memory, keyed by handover id
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    aggregates: HashMap<String, HandoverAggregate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, aggregate: HandoverAggregate) {
        self.aggregates
            .insert(aggregate.handover.id.clone(), aggregate);
    }

    pub fn with(mut self, aggregate: HandoverAggregate) -> Self {
        self.insert(aggregate);
        self
    }
}

impl HandoverStore for MemoryStore {
    fn load_aggregate(&self, id: &str) -> Result<Option<HandoverAggregate>, StoreError> {
        Ok(self.aggregates.get(id).cloned())
    }
}

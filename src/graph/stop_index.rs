//! Dense integer ids for stop names.

use std::collections::HashMap;

use crate::types::StopId;

/// Interns stop names into dense ids, assigned in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct StopIndex {
    names: Vec<StopId>,
    ids: HashMap<StopId, usize>,
}

impl StopIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `stop`, assigning the next free one if unseen.
    pub fn intern(&mut self, stop: &StopId) -> usize {
        if let Some(&id) = self.ids.get(stop) {
            return id;
        }
        let id = self.names.len();
        self.names.push(stop.clone());
        self.ids.insert(stop.clone(), id);
        id
    }

    /// Look up the id of a stop by name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Name of the stop with the given id.
    pub fn name(&self, id: usize) -> Option<&StopId> {
        self.names.get(id)
    }

    /// Number of distinct stops.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no stop has been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All stops in id order.
    pub fn stops(&self) -> &[StopId] {
        &self.names
    }
}

//! Union-find over dense stop ids.

use crate::types::{RouteError, RouteResult};

/// Parent slot of an id that has not been registered with `make_set`.
const UNREGISTERED: usize = usize::MAX;

/// Disjoint-set forest with path compression and union by size.
///
/// Following parent pointers from any registered id always ends at a root,
/// an id whose parent is itself.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a structure with ids `0..n` each registered as a singleton.
    pub fn with_singletons(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    /// Register `id` as its own root. Idempotent.
    pub fn make_set(&mut self, id: usize) {
        if id >= self.parent.len() {
            self.parent.resize(id + 1, UNREGISTERED);
            self.size.resize(id + 1, 0);
        }
        if self.parent[id] == UNREGISTERED {
            self.parent[id] = id;
            self.size[id] = 1;
            self.sets += 1;
        }
    }

    /// Whether `id` has been registered.
    pub fn contains(&self, id: usize) -> bool {
        self.parent.get(id).is_some_and(|&p| p != UNREGISTERED)
    }

    /// Representative of the set containing `id`.
    ///
    /// Every id on the walk is re-pointed directly at the root.
    pub fn find(&mut self, id: usize) -> RouteResult<usize> {
        if !self.contains(id) {
            return Err(RouteError::UnknownId(id));
        }

        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = id;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` when both already share a root, i.e. an edge between
    /// them would close a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> RouteResult<bool> {
        let mut root_a = self.find(a)?;
        let mut root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.sets -= 1;
        Ok(true)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same(&mut self, a: usize, b: usize) -> RouteResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of disjoint sets among registered ids.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Size of the set containing `id`.
    pub fn set_size(&mut self, id: usize) -> RouteResult<usize> {
        let root = self.find(id)?;
        Ok(self.size[root])
    }
}

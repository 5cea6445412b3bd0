//! In-memory follow store for testing and embedded use.

use std::collections::HashMap;
use std::sync::RwLock;

use chirp_types::{Timestamp, UserId};

use crate::error::{GraphError, GraphResult};
use crate::traits::FollowStore;
use crate::types::FollowEdge;

/// An in-memory implementation of [`FollowStore`].
///
/// Edges live in a `HashMap` keyed by the ordered `(follower, followee)`
/// pair, behind a `RwLock`. The map key enforces the uniqueness invariant.
#[derive(Debug, Default)]
pub struct InMemoryFollowStore {
    edges: RwLock<HashMap<(UserId, UserId), Timestamp>>,
}

impl InMemoryFollowStore {
    /// Create a new empty follow store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of edges in the graph.
    pub fn len(&self) -> usize {
        self.edges.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_edges(
        &self,
    ) -> GraphResult<std::sync::RwLockReadGuard<'_, HashMap<(UserId, UserId), Timestamp>>> {
        self.edges
            .read()
            .map_err(|e| GraphError::Backend(format!("lock poisoned: {e}")))
    }

    fn write_edges(
        &self,
    ) -> GraphResult<std::sync::RwLockWriteGuard<'_, HashMap<(UserId, UserId), Timestamp>>> {
        self.edges
            .write()
            .map_err(|e| GraphError::Backend(format!("lock poisoned: {e}")))
    }
}

/// Newest first, ties broken by the counterpart id descending so the order
/// is total and stable across calls.
fn sort_newest_first(edges: &mut [FollowEdge], counterpart: impl Fn(&FollowEdge) -> UserId) {
    edges.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| counterpart(b).cmp(&counterpart(a)))
    });
}

impl FollowStore for InMemoryFollowStore {
    fn insert(&self, edge: &FollowEdge) -> GraphResult<bool> {
        let mut edges = self.write_edges()?;
        let key = (edge.follower, edge.followee);
        if edges.contains_key(&key) {
            return Ok(false);
        }
        edges.insert(key, edge.created_at);
        Ok(true)
    }

    fn remove(&self, follower: &UserId, followee: &UserId) -> GraphResult<bool> {
        let mut edges = self.write_edges()?;
        Ok(edges.remove(&(*follower, *followee)).is_some())
    }

    fn contains(&self, follower: &UserId, followee: &UserId) -> GraphResult<bool> {
        let edges = self.read_edges()?;
        Ok(edges.contains_key(&(*follower, *followee)))
    }

    fn count_following(&self, id: &UserId) -> GraphResult<usize> {
        let edges = self.read_edges()?;
        Ok(edges.keys().filter(|(f, _)| f == id).count())
    }

    fn count_followers(&self, id: &UserId) -> GraphResult<usize> {
        let edges = self.read_edges()?;
        Ok(edges.keys().filter(|(_, f)| f == id).count())
    }

    fn following(&self, id: &UserId) -> GraphResult<Vec<FollowEdge>> {
        let edges = self.read_edges()?;
        let mut result: Vec<FollowEdge> = edges
            .iter()
            .filter(|((follower, _), _)| follower == id)
            .map(|((follower, followee), created_at)| FollowEdge {
                follower: *follower,
                followee: *followee,
                created_at: *created_at,
            })
            .collect();
        drop(edges);
        sort_newest_first(&mut result, |e| e.followee);
        Ok(result)
    }

    fn followers(&self, id: &UserId) -> GraphResult<Vec<FollowEdge>> {
        let edges = self.read_edges()?;
        let mut result: Vec<FollowEdge> = edges
            .iter()
            .filter(|((_, followee), _)| followee == id)
            .map(|((follower, followee), created_at)| FollowEdge {
                follower: *follower,
                followee: *followee,
                created_at: *created_at,
            })
            .collect();
        drop(edges);
        sort_newest_first(&mut result, |e| e.follower);
        Ok(result)
    }

    fn remove_all_for(&self, id: &UserId) -> GraphResult<usize> {
        let mut edges = self.write_edges()?;
        let before = edges.len();
        edges.retain(|(follower, followee), _| follower != id && followee != id);
        Ok(before - edges.len())
    }
}

use std::sync::Arc;

use chirp_types::UserId;

use crate::error::{GraphError, GraphResult};
use crate::traits::FollowStore;
use crate::types::{FollowEdge, FollowOutcome, UnfollowOutcome};

/// Follow-graph operations over a storage backend.
///
/// `FollowGraph` is where user intent is interpreted: it rejects
/// self-references and maps duplicate requests to idempotent outcomes. The
/// underlying [`FollowStore`] stays a pure edge set.
#[derive(Clone)]
pub struct FollowGraph {
    store: Arc<dyn FollowStore>,
}

impl FollowGraph {
    /// Create a graph over the given backend.
    pub fn new(store: Arc<dyn FollowStore>) -> Self {
        Self { store }
    }

    /// `actor` starts following `target`.
    ///
    /// Fails with [`GraphError::SelfReference`] when `actor == target`.
    /// Following an already-followed identity is a no-op reported as
    /// [`FollowOutcome::AlreadyFollowing`].
    pub fn follow(&self, actor: &UserId, target: &UserId) -> GraphResult<FollowOutcome> {
        if actor == target {
            return Err(GraphError::SelfReference);
        }
        let inserted = self.store.insert(&FollowEdge::new(*actor, *target))?;
        if inserted {
            tracing::debug!(follower = %actor, followee = %target, "follow edge created");
            Ok(FollowOutcome::Followed)
        } else {
            Ok(FollowOutcome::AlreadyFollowing)
        }
    }

    /// `actor` stops following `target`.
    ///
    /// Fails with [`GraphError::SelfReference`] when `actor == target`.
    /// Unfollowing an identity that was never followed is a no-op reported
    /// as [`UnfollowOutcome::NotFollowing`].
    pub fn unfollow(&self, actor: &UserId, target: &UserId) -> GraphResult<UnfollowOutcome> {
        if actor == target {
            return Err(GraphError::SelfReference);
        }
        let removed = self.store.remove(actor, target)?;
        if removed {
            tracing::debug!(follower = %actor, followee = %target, "follow edge removed");
            Ok(UnfollowOutcome::Unfollowed)
        } else {
            Ok(UnfollowOutcome::NotFollowing)
        }
    }

    /// Whether `actor` follows `target`.
    pub fn is_following(&self, actor: &UserId, target: &UserId) -> GraphResult<bool> {
        self.store.contains(actor, target)
    }

    /// Number of identities `id` follows.
    pub fn following_count(&self, id: &UserId) -> GraphResult<usize> {
        self.store.count_following(id)
    }

    /// Number of identities following `id`.
    pub fn follower_count(&self, id: &UserId) -> GraphResult<usize> {
        self.store.count_followers(id)
    }

    /// Who `id` follows, newest first.
    pub fn list_following(&self, id: &UserId) -> GraphResult<Vec<FollowEdge>> {
        self.store.following(id)
    }

    /// Who follows `id`, newest first.
    pub fn list_followers(&self, id: &UserId) -> GraphResult<Vec<FollowEdge>> {
        self.store.followers(id)
    }

    /// Drop every edge touching `id`. Called when the identity is deleted.
    pub fn purge_identity(&self, id: &UserId) -> GraphResult<usize> {
        let removed = self.store.remove_all_for(id)?;
        if removed > 0 {
            tracing::debug!(id = %id, removed, "purged follow edges for deleted identity");
        }
        Ok(removed)
    }
}

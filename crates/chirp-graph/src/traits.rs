//! The [`FollowStore`] trait defining the follow-edge storage interface.

use chirp_types::UserId;

use crate::error::GraphResult;
use crate::types::FollowEdge;

/// Storage backend for directed follow edges.
///
/// Implementations must be thread-safe (`Send + Sync`) and must keep at most
/// one edge per ordered `(follower, followee)` pair. Inserts are
/// insert-or-ignore, never insert-or-fail, so concurrent duplicate requests
/// resolve to the same end state. Each method is a single atomic unit of
/// work.
pub trait FollowStore: Send + Sync {
    /// Insert an edge. Returns `true` if the edge was new, `false` if the
    /// ordered pair already existed (the stored `created_at` is kept).
    fn insert(&self, edge: &FollowEdge) -> GraphResult<bool>;

    /// Remove the edge for the ordered pair. Returns `true` if it existed.
    fn remove(&self, follower: &UserId, followee: &UserId) -> GraphResult<bool>;

    /// Whether the ordered pair exists.
    fn contains(&self, follower: &UserId, followee: &UserId) -> GraphResult<bool>;

    /// Number of identities `id` follows.
    fn count_following(&self, id: &UserId) -> GraphResult<usize>;

    /// Number of identities following `id`.
    fn count_followers(&self, id: &UserId) -> GraphResult<usize>;

    /// Edges where `id` is the follower, newest first. Each call re-queries
    /// the live store.
    fn following(&self, id: &UserId) -> GraphResult<Vec<FollowEdge>>;

    /// Edges where `id` is the followee, newest first. Each call re-queries
    /// the live store.
    fn followers(&self, id: &UserId) -> GraphResult<Vec<FollowEdge>>;

    /// Remove every edge touching `id` in either direction. Returns the
    /// number of edges removed. Used when an identity is deleted.
    fn remove_all_for(&self, id: &UserId) -> GraphResult<usize>;
}

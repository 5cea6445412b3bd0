//! The [`ContentStore`] trait defining the post and like storage interface.

use chirp_types::{PostId, UserId};

use crate::error::ContentResult;
use crate::types::{LikeEdge, Post};

/// Storage backend for posts and likes.
///
/// Implementations must be thread-safe (`Send + Sync`) and must keep at most
/// one like per `(post, identity)` pair. Like inserts are insert-or-ignore.
/// Like operations fail if the referenced post is absent, so the
/// post-existence check and the like mutation are one atomic unit of work.
pub trait ContentStore: Send + Sync {
    /// Insert a new post.
    fn insert_post(&self, post: &Post) -> ContentResult<()>;

    /// Look up a post by id. Returns `Ok(None)` if absent.
    fn get_post(&self, id: &PostId) -> ContentResult<Option<Post>>;

    /// Delete a post and all of its likes. Returns `true` if it existed.
    ///
    /// Ownership is checked above the store layer; this is the raw delete.
    fn delete_post(&self, id: &PostId) -> ContentResult<bool>;

    /// Posts by `author`, newest first.
    fn posts_by_author(&self, author: &UserId) -> ContentResult<Vec<Post>>;

    /// Every post in the store, newest first.
    fn all_posts(&self) -> ContentResult<Vec<Post>>;

    /// Record a like. Returns `true` if it was new, `false` if the pair
    /// already existed. Fails with `PostNotFound` if the post is absent.
    fn insert_like(&self, like: &LikeEdge) -> ContentResult<bool>;

    /// Remove a like. Returns `true` if it existed. Fails with
    /// `PostNotFound` if the post is absent.
    fn remove_like(&self, post: &PostId, identity: &UserId) -> ContentResult<bool>;

    /// Number of likes on a post. Fails with `PostNotFound` if absent.
    fn like_count(&self, post: &PostId) -> ContentResult<usize>;

    /// Whether `identity` has liked `post`. Fails with `PostNotFound` if
    /// the post is absent.
    fn has_liked(&self, post: &PostId, identity: &UserId) -> ContentResult<bool>;

    /// Remove everything attributable to `author`: their posts (with those
    /// posts' likes) and their likes on other posts. Returns the number of
    /// posts removed. Used when an identity is deleted.
    fn purge_author(&self, author: &UserId) -> ContentResult<usize>;
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use chirp_types::{PostId, UserId};

use crate::error::{ContentError, ContentResult};
use crate::traits::ContentStore;
use crate::types::{LikeEdge, LikeOutcome, Post, UnlikeOutcome};

/// A post together with its live like count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub post: Post,
    pub like_count: usize,
}

/// Content operations over a storage backend.
///
/// This is where the ownership policy is applied: only the author of a post
/// may delete it, and that check happens here rather than in the store.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    /// Create a service over the given backend.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Validate the text and persist a new post by `author`.
    pub fn create_post(&self, author: &UserId, text: impl Into<String>) -> ContentResult<Post> {
        let post = Post::compose(*author, text)?;
        self.store.insert_post(&post)?;
        tracing::debug!(author = %author, post = %post.id, "post created");
        Ok(post)
    }

    /// Delete a post, enforcing ownership.
    ///
    /// Fails with [`ContentError::PostNotFound`] when the post is absent and
    /// [`ContentError::NotPostAuthor`] when `actor` is not the author. The
    /// authorization check comes after the existence check, so a forbidden
    /// delete is reported as forbidden, not as not-found.
    pub fn delete_post(&self, actor: &UserId, post_id: &PostId) -> ContentResult<()> {
        let post = self
            .store
            .get_post(post_id)?
            .ok_or_else(|| ContentError::PostNotFound(post_id.to_string()))?;
        if post.author != *actor {
            tracing::warn!(actor = %actor, post = %post_id, "rejected delete by non-author");
            return Err(ContentError::NotPostAuthor);
        }
        self.store.delete_post(post_id)?;
        tracing::debug!(author = %actor, post = %post_id, "post deleted");
        Ok(())
    }

    /// `actor` likes a post. Re-liking is a no-op reported as
    /// [`LikeOutcome::AlreadyLiked`].
    pub fn like(&self, actor: &UserId, post_id: &PostId) -> ContentResult<LikeOutcome> {
        let inserted = self.store.insert_like(&LikeEdge::new(*post_id, *actor))?;
        if inserted {
            Ok(LikeOutcome::Liked)
        } else {
            Ok(LikeOutcome::AlreadyLiked)
        }
    }

    /// `actor` removes their like from a post. Unliking a never-liked post
    /// is a no-op reported as [`UnlikeOutcome::NotLiked`]; the post itself
    /// must exist.
    pub fn unlike(&self, actor: &UserId, post_id: &PostId) -> ContentResult<UnlikeOutcome> {
        let removed = self.store.remove_like(post_id, actor)?;
        if removed {
            Ok(UnlikeOutcome::Unliked)
        } else {
            Ok(UnlikeOutcome::NotLiked)
        }
    }

    /// Live like count for a post.
    pub fn like_count(&self, post_id: &PostId) -> ContentResult<usize> {
        self.store.like_count(post_id)
    }

    /// Whether `viewer` has liked the post.
    pub fn has_liked(&self, viewer: &UserId, post_id: &PostId) -> ContentResult<bool> {
        self.store.has_liked(post_id, viewer)
    }

    /// Posts by `author`, newest first.
    pub fn posts_by_author(&self, author: &UserId) -> ContentResult<Vec<Post>> {
        self.store.posts_by_author(author)
    }

    /// Every post in the store, newest first.
    pub fn all_posts(&self) -> ContentResult<Vec<Post>> {
        self.store.all_posts()
    }

    /// Single-post view with its like count.
    pub fn post_detail(&self, post_id: &PostId) -> ContentResult<PostDetail> {
        let post = self
            .store
            .get_post(post_id)?
            .ok_or_else(|| ContentError::PostNotFound(post_id.to_string()))?;
        let like_count = self.store.like_count(post_id)?;
        Ok(PostDetail { post, like_count })
    }

    /// Drop every post and like attributable to `author`. Called when the
    /// identity is deleted.
    pub fn purge_identity(&self, author: &UserId) -> ContentResult<usize> {
        let removed = self.store.purge_author(author)?;
        if removed > 0 {
            tracing::debug!(author = %author, removed, "purged posts for deleted identity");
        }
        Ok(removed)
    }
}

//! In-memory content store for testing and embedded use.

use std::collections::HashMap;
use std::sync::RwLock;

use chirp_types::{PostId, Timestamp, UserId};

use crate::error::{ContentError, ContentResult};
use crate::traits::ContentStore;
use crate::types::{LikeEdge, Post};

/// An in-memory implementation of [`ContentStore`].
///
/// Posts and likes share a single `RwLock` so that post deletion and its
/// like cascade are one atomic step, and a like can never be recorded
/// against a post that was deleted concurrently.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    posts: HashMap<PostId, Post>,
    // post -> (identity -> liked_at)
    likes: HashMap<PostId, HashMap<UserId, Timestamp>>,
}

impl InMemoryContentStore {
    /// Create a new empty content store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts in the store.
    pub fn post_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").posts.len()
    }

    /// Total number of likes across all posts.
    pub fn like_total(&self) -> usize {
        self.inner
            .read()
            .expect("lock poisoned")
            .likes
            .values()
            .map(|per_post| per_post.len())
            .sum()
    }

    fn read_tables(&self) -> ContentResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|e| ContentError::Backend(format!("lock poisoned: {e}")))
    }

    fn write_tables(&self) -> ContentResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|e| ContentError::Backend(format!("lock poisoned: {e}")))
    }
}

/// Newest first, ties broken by id descending (v7 ids are time-ordered).
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
}

impl ContentStore for InMemoryContentStore {
    fn insert_post(&self, post: &Post) -> ContentResult<()> {
        let mut tables = self.write_tables()?;
        tables.posts.insert(post.id, post.clone());
        Ok(())
    }

    fn get_post(&self, id: &PostId) -> ContentResult<Option<Post>> {
        let tables = self.read_tables()?;
        Ok(tables.posts.get(id).cloned())
    }

    fn delete_post(&self, id: &PostId) -> ContentResult<bool> {
        let mut tables = self.write_tables()?;
        let existed = tables.posts.remove(id).is_some();
        if existed {
            tables.likes.remove(id);
        }
        Ok(existed)
    }

    fn posts_by_author(&self, author: &UserId) -> ContentResult<Vec<Post>> {
        let tables = self.read_tables()?;
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|p| p.author == *author)
            .cloned()
            .collect();
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    fn all_posts(&self) -> ContentResult<Vec<Post>> {
        let tables = self.read_tables()?;
        let mut posts: Vec<Post> = tables.posts.values().cloned().collect();
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    fn insert_like(&self, like: &LikeEdge) -> ContentResult<bool> {
        let mut tables = self.write_tables()?;
        if !tables.posts.contains_key(&like.post) {
            return Err(ContentError::PostNotFound(like.post.to_string()));
        }
        let per_post = tables.likes.entry(like.post).or_default();
        if per_post.contains_key(&like.identity) {
            return Ok(false);
        }
        per_post.insert(like.identity, like.created_at);
        Ok(true)
    }

    fn remove_like(&self, post: &PostId, identity: &UserId) -> ContentResult<bool> {
        let mut tables = self.write_tables()?;
        if !tables.posts.contains_key(post) {
            return Err(ContentError::PostNotFound(post.to_string()));
        }
        Ok(tables
            .likes
            .get_mut(post)
            .is_some_and(|per_post| per_post.remove(identity).is_some()))
    }

    fn like_count(&self, post: &PostId) -> ContentResult<usize> {
        let tables = self.read_tables()?;
        if !tables.posts.contains_key(post) {
            return Err(ContentError::PostNotFound(post.to_string()));
        }
        Ok(tables.likes.get(post).map_or(0, |per_post| per_post.len()))
    }

    fn has_liked(&self, post: &PostId, identity: &UserId) -> ContentResult<bool> {
        let tables = self.read_tables()?;
        if !tables.posts.contains_key(post) {
            return Err(ContentError::PostNotFound(post.to_string()));
        }
        Ok(tables
            .likes
            .get(post)
            .is_some_and(|per_post| per_post.contains_key(identity)))
    }

    fn purge_author(&self, author: &UserId) -> ContentResult<usize> {
        let mut tables = self.write_tables()?;
        let own_posts: Vec<PostId> = tables
            .posts
            .values()
            .filter(|p| p.author == *author)
            .map(|p| p.id)
            .collect();
        for id in &own_posts {
            tables.posts.remove(id);
            tables.likes.remove(id);
        }
        for per_post in tables.likes.values_mut() {
            per_post.remove(author);
        }
        Ok(own_posts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(author: UserId, text: &str) -> Post {
        Post::compose(author, text).unwrap()
    }

    #[test]
    fn insert_and_get_post() {
        let store = InMemoryContentStore::new();
        let p = post(UserId::new(), "hello");
        store.insert_post(&p).unwrap();

        let read = store.get_post(&p.id).unwrap().unwrap();
        assert_eq!(read, p);
    }

    #[test]
    fn get_missing_post_returns_none() {
        let store = InMemoryContentStore::new();
        assert!(store.get_post(&PostId::new()).unwrap().is_none());
    }

    #[test]
    fn delete_post_cascades_likes() {
        let store = InMemoryContentStore::new();
        let p = post(UserId::new(), "doomed");
        store.insert_post(&p).unwrap();
        store.insert_like(&LikeEdge::new(p.id, UserId::new())).unwrap();
        assert_eq!(store.like_total(), 1);

        assert!(store.delete_post(&p.id).unwrap());
        assert_eq!(store.like_total(), 0);
        assert!(!store.delete_post(&p.id).unwrap());
    }

    #[test]
    fn like_is_idempotent() {
        let store = InMemoryContentStore::new();
        let p = post(UserId::new(), "likeable");
        store.insert_post(&p).unwrap();

        let fan = UserId::new();
        assert!(store.insert_like(&LikeEdge::new(p.id, fan)).unwrap());
        assert!(!store.insert_like(&LikeEdge::new(p.id, fan)).unwrap());
        assert_eq!(store.like_count(&p.id).unwrap(), 1);
    }

    #[test]
    fn like_on_missing_post_fails() {
        let store = InMemoryContentStore::new();
        let missing = PostId::new();
        let err = store
            .insert_like(&LikeEdge::new(missing, UserId::new()))
            .unwrap_err();
        assert!(matches!(err, ContentError::PostNotFound(_)));
        assert!(matches!(
            store.like_count(&missing).unwrap_err(),
            ContentError::PostNotFound(_)
        ));
    }

    #[test]
    fn remove_like_without_like_is_noop() {
        let store = InMemoryContentStore::new();
        let p = post(UserId::new(), "unliked");
        store.insert_post(&p).unwrap();

        assert!(!store.remove_like(&p.id, &UserId::new()).unwrap());
        assert_eq!(store.like_count(&p.id).unwrap(), 0);
    }

    #[test]
    fn author_listing_is_newest_first() {
        let store = InMemoryContentStore::new();
        let author = UserId::new();
        for text in ["first", "second", "third"] {
            store.insert_post(&post(author, text)).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }
        store.insert_post(&post(UserId::new(), "other")).unwrap();

        let posts = store.posts_by_author(&author).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].text, "third");
        assert_eq!(posts[2].text, "first");
    }

    #[test]
    fn purge_author_removes_posts_and_likes_both_ways() {
        let store = InMemoryContentStore::new();
        let author = UserId::new();
        let other = UserId::new();

        let own = post(author, "mine");
        let theirs = post(other, "theirs");
        store.insert_post(&own).unwrap();
        store.insert_post(&theirs).unwrap();
        // Someone likes the author's post; the author likes someone else's.
        store.insert_like(&LikeEdge::new(own.id, other)).unwrap();
        store.insert_like(&LikeEdge::new(theirs.id, author)).unwrap();

        let removed = store.purge_author(&author).unwrap();
        assert_eq!(removed, 1);
        assert!(store.get_post(&own.id).unwrap().is_none());
        assert_eq!(store.like_count(&theirs.id).unwrap(), 0);
        assert_eq!(store.like_total(), 0);
    }

    #[test]
    fn concurrent_duplicate_likes_count_once() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryContentStore::new());
        let p = post(UserId::new(), "raced");
        store.insert_post(&p).unwrap();
        let fan = UserId::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let like = LikeEdge::new(p.id, fan);
                thread::spawn(move || store.insert_like(&like).unwrap())
            })
            .collect();

        let new_likes = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|inserted| *inserted)
            .count();
        assert_eq!(new_likes, 1);
        assert_eq!(store.like_count(&p.id).unwrap(), 1);
    }
}

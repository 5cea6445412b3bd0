use std::sync::Arc;

use serde::{Deserialize, Serialize};

use chirp_content::{
    ContentService, InMemoryContentStore, LikeOutcome, Post, PostDetail, UnlikeOutcome,
};
use chirp_feed::{FeedAssembler, FeedItem, FollowPeer, ProfileView};
use chirp_graph::{FollowGraph, FollowOutcome, InMemoryFollowStore, UnfollowOutcome};
use chirp_identity::{Identity, IdentityStore, InMemoryIdentityStore};
use chirp_types::{Handle, PostId, UserId};

use crate::error::{SdkError, SdkResult};

/// A like toggle result with the live like count, as returned to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub outcome: LikeOutcome,
    pub like_count: usize,
}

/// An unlike toggle result with the live like count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlikeToggle {
    pub outcome: UnlikeOutcome,
    pub like_count: usize,
}

/// The Chirp application: all stores plus the policy and assembly layers.
///
/// Every action takes the acting identity explicitly. Each underlying store
/// mutation is a single atomic unit of work, so concurrent duplicate
/// requests resolve to idempotent outcomes rather than errors.
#[derive(Clone)]
pub struct Chirp {
    identities: Arc<InMemoryIdentityStore>,
    graph: FollowGraph,
    content: ContentService,
    feed: FeedAssembler,
}

impl Chirp {
    /// Create a Chirp application over fresh in-memory stores.
    pub fn new() -> Self {
        let identities = Arc::new(InMemoryIdentityStore::new());
        let graph = FollowGraph::new(Arc::new(InMemoryFollowStore::new()));
        let content = ContentService::new(Arc::new(InMemoryContentStore::new()));
        let feed = FeedAssembler::new(identities.clone(), graph.clone(), content.clone());
        Self {
            identities,
            graph,
            content,
            feed,
        }
    }

    // ---- Identity operations ----

    /// Register a new identity. The credential hash is produced by an
    /// external credential layer; it is stored opaque.
    pub fn signup(
        &self,
        handle: &str,
        email: &str,
        credential_hash: &str,
    ) -> SdkResult<Identity> {
        let handle = Handle::parse(handle)?;
        let identity = Identity::signup(handle, email, credential_hash);
        self.identities.create(&identity)?;
        tracing::info!(handle = %identity.handle, "new identity registered");
        Ok(identity)
    }

    /// Resolve a handle to its identity.
    pub fn resolve_handle(&self, handle: &Handle) -> SdkResult<Identity> {
        self.identities
            .get_by_handle(handle)?
            .ok_or_else(|| SdkError::UserNotFound(handle.as_str().to_string()))
    }

    /// Delete an identity and cascade: follow edges in both directions, the
    /// identity's posts with their likes, and its likes on other posts.
    pub fn delete_identity(&self, id: &UserId) -> SdkResult<()> {
        if !self.identities.exists(id)? {
            return Err(SdkError::UserNotFound(id.to_string()));
        }
        let posts = self.content.purge_identity(id)?;
        let edges = self.graph.purge_identity(id)?;
        self.identities.delete(id)?;
        tracing::info!(id = %id, posts, edges, "identity deleted with cascade");
        Ok(())
    }

    // ---- Follow graph operations ----

    /// `actor` follows the identity behind `target_handle`.
    pub fn follow(&self, actor: &UserId, target_handle: &Handle) -> SdkResult<FollowOutcome> {
        let target = self.resolve_handle(target_handle)?;
        Ok(self.graph.follow(actor, &target.id)?)
    }

    /// `actor` unfollows the identity behind `target_handle`.
    pub fn unfollow(&self, actor: &UserId, target_handle: &Handle) -> SdkResult<UnfollowOutcome> {
        let target = self.resolve_handle(target_handle)?;
        Ok(self.graph.unfollow(actor, &target.id)?)
    }

    /// Whether `actor` follows the identity behind `target_handle`.
    pub fn is_following(&self, actor: &UserId, target_handle: &Handle) -> SdkResult<bool> {
        let target = self.resolve_handle(target_handle)?;
        Ok(self.graph.is_following(actor, &target.id)?)
    }

    // ---- Content operations ----

    /// Create a post as `actor`.
    pub fn create_post(&self, actor: &UserId, text: &str) -> SdkResult<Post> {
        Ok(self.content.create_post(actor, text)?)
    }

    /// Delete a post; only the author may.
    pub fn delete_post(&self, actor: &UserId, post_id: &PostId) -> SdkResult<()> {
        Ok(self.content.delete_post(actor, post_id)?)
    }

    /// Like a post and report the live count.
    pub fn like(&self, actor: &UserId, post_id: &PostId) -> SdkResult<LikeToggle> {
        let outcome = self.content.like(actor, post_id)?;
        let like_count = self.content.like_count(post_id)?;
        Ok(LikeToggle {
            outcome,
            like_count,
        })
    }

    /// Remove a like and report the live count.
    pub fn unlike(&self, actor: &UserId, post_id: &PostId) -> SdkResult<UnlikeToggle> {
        let outcome = self.content.unlike(actor, post_id)?;
        let like_count = self.content.like_count(post_id)?;
        Ok(UnlikeToggle {
            outcome,
            like_count,
        })
    }

    /// Single-post view with its like count.
    pub fn post_detail(&self, post_id: &PostId) -> SdkResult<PostDetail> {
        Ok(self.content.post_detail(post_id)?)
    }

    // ---- Read-only assembly ----

    /// The profile page for `subject_handle` as seen by `viewer`.
    pub fn profile(&self, viewer: &UserId, subject_handle: &Handle) -> SdkResult<ProfileView> {
        Ok(self.feed.profile(viewer, subject_handle)?)
    }

    /// The global home feed as seen by `viewer`.
    pub fn home_feed(&self, viewer: &UserId) -> SdkResult<Vec<FeedItem>> {
        Ok(self.feed.home_feed(viewer)?)
    }

    /// Who `subject_handle` follows.
    pub fn following_list(&self, subject_handle: &Handle) -> SdkResult<Vec<FollowPeer>> {
        Ok(self.feed.following_list(subject_handle)?)
    }

    /// Who follows `subject_handle`.
    pub fn followers_list(&self, subject_handle: &Handle) -> SdkResult<Vec<FollowPeer>> {
        Ok(self.feed.followers_list(subject_handle)?)
    }
}

impl Default for Chirp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_content::ContentError;
    use chirp_feed::FeedError;
    use chirp_graph::GraphError;
    use chirp_identity::IdentityError;

    fn handle(s: &str) -> Handle {
        Handle::parse(s).unwrap()
    }

    fn app_with_alice_and_bob() -> (Chirp, Identity, Identity) {
        let app = Chirp::new();
        let alice = app.signup("alice", "alice@example.com", "h1").unwrap();
        let bob = app.signup("bob", "bob@example.com", "h2").unwrap();
        (app, alice, bob)
    }

    #[test]
    fn like_toggle_is_json_serializable() {
        let toggle = LikeToggle {
            outcome: LikeOutcome::Liked,
            like_count: 3,
        };
        let json = serde_json::to_value(toggle).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "liked", "like_count": 3 }));
    }

    #[test]
    fn signup_rejects_duplicate_handles() {
        let app = Chirp::new();
        app.signup("alice", "a@example.com", "h").unwrap();
        let err = app.signup("alice", "other@example.com", "h").unwrap_err();
        assert_eq!(
            err,
            SdkError::Identity(IdentityError::HandleTaken("alice".to_string()))
        );
    }

    #[test]
    fn signup_rejects_invalid_handles() {
        let app = Chirp::new();
        assert!(matches!(
            app.signup("no spaces", "a@example.com", "h").unwrap_err(),
            SdkError::Type(_)
        ));
    }

    #[test]
    fn follow_updates_counts_and_is_idempotent() {
        let (app, alice, bob) = app_with_alice_and_bob();

        assert_eq!(
            app.follow(&alice.id, &bob.handle).unwrap(),
            FollowOutcome::Followed
        );
        assert!(app.is_following(&alice.id, &bob.handle).unwrap());

        // Second follow changes nothing.
        assert_eq!(
            app.follow(&alice.id, &bob.handle).unwrap(),
            FollowOutcome::AlreadyFollowing
        );

        let bob_profile = app.profile(&alice.id, &bob.handle).unwrap();
        assert_eq!(bob_profile.follower_count, 1);
        assert_eq!(bob_profile.following_count, 0);
    }

    #[test]
    fn follow_self_is_rejected() {
        let (app, alice, _) = app_with_alice_and_bob();
        let err = app.follow(&alice.id, &alice.handle).unwrap_err();
        assert_eq!(err, SdkError::Graph(GraphError::SelfReference));
    }

    #[test]
    fn follow_unknown_handle_is_not_found() {
        let (app, alice, _) = app_with_alice_and_bob();
        let err = app.follow(&alice.id, &handle("ghost")).unwrap_err();
        assert_eq!(err, SdkError::UserNotFound("ghost".to_string()));
    }

    #[test]
    fn the_follow_edge_is_asymmetric() {
        let (app, alice, bob) = app_with_alice_and_bob();
        app.follow(&alice.id, &bob.handle).unwrap();

        let bob_page = app.profile(&alice.id, &bob.handle).unwrap();
        assert_eq!(bob_page.follower_count, 1);

        let alice_page = app.profile(&bob.id, &alice.handle).unwrap();
        assert_eq!(alice_page.following_count, 1);
        assert_eq!(alice_page.follower_count, 0);
        assert!(!alice_page.viewer_is_following);
    }

    #[test]
    fn post_roundtrip_through_profile() {
        let (app, alice, _) = app_with_alice_and_bob();
        app.create_post(&alice.id, "hello").unwrap();

        let profile = app.profile(&alice.id, &alice.handle).unwrap();
        let hits = profile
            .posts
            .iter()
            .filter(|item| item.post.text == "hello")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn post_length_boundaries() {
        let (app, alice, _) = app_with_alice_and_bob();
        assert!(app.create_post(&alice.id, &"x".repeat(140)).is_ok());
        assert!(matches!(
            app.create_post(&alice.id, &"x".repeat(141)).unwrap_err(),
            SdkError::Content(ContentError::TextTooLong { .. })
        ));
        assert_eq!(
            app.create_post(&alice.id, "").unwrap_err(),
            SdkError::Content(ContentError::EmptyText)
        );
    }

    #[test]
    fn delete_post_is_ownership_gated() {
        let (app, alice, bob) = app_with_alice_and_bob();
        let post = app.create_post(&alice.id, "mine").unwrap();

        let err = app.delete_post(&bob.id, &post.id).unwrap_err();
        assert_eq!(err, SdkError::Content(ContentError::NotPostAuthor));
        assert!(app.post_detail(&post.id).is_ok());

        app.delete_post(&alice.id, &post.id).unwrap();
        assert!(matches!(
            app.post_detail(&post.id).unwrap_err(),
            SdkError::Content(ContentError::PostNotFound(_))
        ));
    }

    #[test]
    fn like_toggle_reports_live_counts() {
        let (app, alice, bob) = app_with_alice_and_bob();
        let post = app.create_post(&alice.id, "likeable").unwrap();

        let toggle = app.like(&bob.id, &post.id).unwrap();
        assert_eq!(toggle.outcome, LikeOutcome::Liked);
        assert_eq!(toggle.like_count, 1);

        // Double-like stays at one.
        let toggle = app.like(&bob.id, &post.id).unwrap();
        assert_eq!(toggle.outcome, LikeOutcome::AlreadyLiked);
        assert_eq!(toggle.like_count, 1);

        let toggle = app.unlike(&bob.id, &post.id).unwrap();
        assert_eq!(toggle.outcome, UnlikeOutcome::Unliked);
        assert_eq!(toggle.like_count, 0);

        // Unlike with no like is a no-op.
        let toggle = app.unlike(&bob.id, &post.id).unwrap();
        assert_eq!(toggle.outcome, UnlikeOutcome::NotLiked);
        assert_eq!(toggle.like_count, 0);
    }

    #[test]
    fn concurrent_duplicate_likes_count_once() {
        use std::thread;

        let (app, alice, bob) = app_with_alice_and_bob();
        let post = app.create_post(&alice.id, "raced").unwrap();

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let app = app.clone();
                let fan = bob.id;
                let post_id = post.id;
                thread::spawn(move || app.like(&fan, &post_id).unwrap())
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        assert_eq!(app.post_detail(&post.id).unwrap().like_count, 1);
    }

    #[test]
    fn home_feed_is_global() {
        let (app, alice, bob) = app_with_alice_and_bob();
        // No follow edge exists, yet bob's post is visible to alice.
        app.create_post(&bob.id, "from bob").unwrap();

        let feed = app.home_feed(&alice.id).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].post.text, "from bob");
        assert!(!feed[0].liked_by_viewer);
    }

    #[test]
    fn delete_identity_cascades_everywhere() {
        let (app, alice, bob) = app_with_alice_and_bob();
        let carol = app.signup("carol", "carol@example.com", "h3").unwrap();

        app.follow(&alice.id, &bob.handle).unwrap();
        app.follow(&carol.id, &alice.handle).unwrap();
        let own_post = app.create_post(&alice.id, "going away").unwrap();
        let bobs_post = app.create_post(&bob.id, "staying").unwrap();
        app.like(&alice.id, &bobs_post.id).unwrap();
        app.like(&bob.id, &own_post.id).unwrap();

        app.delete_identity(&alice.id).unwrap();

        // Identity, edges, posts, and likes are all gone.
        assert!(matches!(
            app.profile(&bob.id, &handle("alice")).unwrap_err(),
            SdkError::Feed(FeedError::UserNotFound(_))
        ));
        assert_eq!(app.followers_list(&bob.handle).unwrap().len(), 0);
        assert!(matches!(
            app.post_detail(&own_post.id).unwrap_err(),
            SdkError::Content(ContentError::PostNotFound(_))
        ));
        assert_eq!(app.post_detail(&bobs_post.id).unwrap().like_count, 0);

        // The handle is free again.
        app.signup("alice", "new@example.com", "h4").unwrap();
    }

    #[test]
    fn deleting_unknown_identity_is_not_found() {
        let app = Chirp::new();
        assert!(matches!(
            app.delete_identity(&UserId::new()).unwrap_err(),
            SdkError::UserNotFound(_)
        ));
    }
}

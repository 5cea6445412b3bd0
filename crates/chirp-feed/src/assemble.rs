use std::sync::Arc;

use chirp_content::{ContentService, Post};
use chirp_graph::{FollowEdge, FollowGraph};
use chirp_identity::{Identity, IdentityStore};
use chirp_types::{Handle, UserId};

use crate::error::{FeedError, FeedResult};
use crate::view::{FeedItem, FollowPeer, ProfileView};

/// Assembles read-only views over the identity, graph, and content stores.
#[derive(Clone)]
pub struct FeedAssembler {
    identities: Arc<dyn IdentityStore>,
    graph: FollowGraph,
    content: ContentService,
}

impl FeedAssembler {
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        graph: FollowGraph,
        content: ContentService,
    ) -> Self {
        Self {
            identities,
            graph,
            content,
        }
    }

    fn resolve(&self, handle: &Handle) -> FeedResult<Identity> {
        self.identities
            .get_by_handle(handle)?
            .ok_or_else(|| FeedError::UserNotFound(handle.as_str().to_string()))
    }

    fn annotate(&self, viewer: &UserId, post: Post) -> FeedResult<FeedItem> {
        let like_count = self.content.like_count(&post.id)?;
        let liked_by_viewer = self.content.has_liked(viewer, &post.id)?;
        Ok(FeedItem {
            post,
            like_count,
            liked_by_viewer,
        })
    }

    /// The profile page for `subject_handle` as seen by `viewer`.
    ///
    /// Fails with [`FeedError::UserNotFound`] when no identity has that
    /// handle. Posts are newest first.
    pub fn profile(&self, viewer: &UserId, subject_handle: &Handle) -> FeedResult<ProfileView> {
        let subject = self.resolve(subject_handle)?;
        let posts = self
            .content
            .posts_by_author(&subject.id)?
            .into_iter()
            .map(|post| self.annotate(viewer, post))
            .collect::<FeedResult<Vec<_>>>()?;

        Ok(ProfileView {
            handle: subject.handle,
            posts,
            following_count: self.graph.following_count(&subject.id)?,
            follower_count: self.graph.follower_count(&subject.id)?,
            viewer_is_following: self.graph.is_following(viewer, &subject.id)?,
        })
    }

    /// The global home feed as seen by `viewer`: every post, newest first,
    /// annotated with like counts and the viewer's own likes. Deliberately
    /// not filtered to followed authors.
    pub fn home_feed(&self, viewer: &UserId) -> FeedResult<Vec<FeedItem>> {
        self.content
            .all_posts()?
            .into_iter()
            .map(|post| self.annotate(viewer, post))
            .collect()
    }

    /// Who `subject_handle` follows, newest edge first.
    pub fn following_list(&self, subject_handle: &Handle) -> FeedResult<Vec<FollowPeer>> {
        let subject = self.resolve(subject_handle)?;
        let edges = self.graph.list_following(&subject.id)?;
        self.peers(edges, |edge| edge.followee)
    }

    /// Who follows `subject_handle`, newest edge first.
    pub fn followers_list(&self, subject_handle: &Handle) -> FeedResult<Vec<FollowPeer>> {
        let subject = self.resolve(subject_handle)?;
        let edges = self.graph.list_followers(&subject.id)?;
        self.peers(edges, |edge| edge.follower)
    }

    fn peers(
        &self,
        edges: Vec<FollowEdge>,
        counterpart: impl Fn(&FollowEdge) -> UserId,
    ) -> FeedResult<Vec<FollowPeer>> {
        let mut peers = Vec::with_capacity(edges.len());
        for edge in &edges {
            // An edge may briefly outlive its identity mid-cascade; skip
            // rather than fail the whole page.
            if let Some(identity) = self.identities.get(&counterpart(edge))? {
                peers.push(FollowPeer {
                    handle: identity.handle,
                    since: edge.created_at,
                });
            }
        }
        Ok(peers)
    }
}

use serde::{Deserialize, Serialize};

use chirp_content::Post;
use chirp_types::{Handle, Timestamp};

/// A post annotated for a specific viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub post: Post,
    pub like_count: usize,
    pub liked_by_viewer: bool,
}

/// A profile page as seen by a viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub handle: Handle,
    pub posts: Vec<FeedItem>,
    pub following_count: usize,
    pub follower_count: usize,
    pub viewer_is_following: bool,
}

/// One entry in a following/followers list: the counterpart identity and
/// when the edge was created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowPeer {
    pub handle: Handle,
    pub since: Timestamp,
}

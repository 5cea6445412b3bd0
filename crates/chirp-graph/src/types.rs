use serde::{Deserialize, Serialize};

use chirp_types::{now, Timestamp, UserId};

/// A directed follow relationship: `follower` follows `followee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower: UserId,
    pub followee: UserId,
    pub created_at: Timestamp,
}

impl FollowEdge {
    /// Create an edge timestamped now.
    pub fn new(follower: UserId, followee: UserId) -> Self {
        Self {
            follower,
            followee,
            created_at: now(),
        }
    }
}

/// Result of a follow action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowOutcome {
    /// A new edge was inserted.
    Followed,
    /// The edge already existed; state is unchanged.
    AlreadyFollowing,
}

/// Result of an unfollow action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnfollowOutcome {
    /// The edge existed and was removed.
    Unfollowed,
    /// No such edge; state is unchanged.
    NotFollowing,
}

use serde::{Deserialize, Serialize};

use chirp_types::{now, PostId, Timestamp, UserId};

use crate::error::{ContentError, ContentResult};

/// Maximum post length in Unicode code points.
pub const MAX_POST_LEN: usize = 140;

/// A short text post. Immutable once created, except for deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub text: String,
    pub created_at: Timestamp,
}

impl Post {
    /// Validate `text` and create a post with a fresh id and timestamp.
    ///
    /// The length limit counts code points, not bytes, so 140 CJK
    /// characters are as valid as 140 ASCII ones. Whitespace is not
    /// trimmed; only the empty string is rejected as empty.
    pub fn compose(author: UserId, text: impl Into<String>) -> ContentResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(ContentError::EmptyText);
        }
        let len = text.chars().count();
        if len > MAX_POST_LEN {
            return Err(ContentError::TextTooLong {
                len,
                max: MAX_POST_LEN,
            });
        }
        Ok(Self {
            id: PostId::new(),
            author,
            text,
            created_at: now(),
        })
    }
}

/// A like: `identity` liked `post`. Unique per pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeEdge {
    pub post: PostId,
    pub identity: UserId,
    pub created_at: Timestamp,
}

impl LikeEdge {
    /// Create a like timestamped now.
    pub fn new(post: PostId, identity: UserId) -> Self {
        Self {
            post,
            identity,
            created_at: now(),
        }
    }
}

/// Result of a like action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeOutcome {
    /// A new like was recorded.
    Liked,
    /// The actor had already liked this post; state is unchanged.
    AlreadyLiked,
}

/// Result of an unlike action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlikeOutcome {
    /// An existing like was removed.
    Unliked,
    /// The actor had never liked this post; state is unchanged.
    NotLiked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compose_accepts_plain_text() {
        let post = Post::compose(UserId::new(), "hello").unwrap();
        assert_eq!(post.text, "hello");
    }

    #[test]
    fn compose_rejects_empty_text() {
        assert_eq!(
            Post::compose(UserId::new(), "").unwrap_err(),
            ContentError::EmptyText
        );
    }

    #[test]
    fn compose_enforces_the_140_boundary() {
        let author = UserId::new();
        assert!(Post::compose(author, "x".repeat(140)).is_ok());
        assert_eq!(
            Post::compose(author, "x".repeat(141)).unwrap_err(),
            ContentError::TextTooLong { len: 141, max: 140 }
        );
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        // 140 three-byte characters: 420 bytes, still a valid post.
        let text = "あ".repeat(140);
        assert!(text.len() > MAX_POST_LEN);
        assert!(Post::compose(UserId::new(), text).is_ok());
    }

    #[test]
    fn whitespace_only_text_is_accepted() {
        assert!(Post::compose(UserId::new(), "   ").is_ok());
    }

    #[test]
    fn outcome_serde_shape() {
        let json = serde_json::to_string(&LikeOutcome::AlreadyLiked).unwrap();
        assert_eq!(json, "\"already_liked\"");
        let json = serde_json::to_string(&UnlikeOutcome::NotLiked).unwrap();
        assert_eq!(json, "\"not_liked\"");
    }

    proptest! {
        #[test]
        fn any_text_within_bounds_is_accepted(len in 1usize..=140) {
            let text = "y".repeat(len);
            prop_assert!(Post::compose(UserId::new(), text).is_ok());
        }

        #[test]
        fn any_text_over_bounds_is_rejected(len in 141usize..300) {
            let text = "y".repeat(len);
            prop_assert!(Post::compose(UserId::new(), text).is_err());
        }
    }
}

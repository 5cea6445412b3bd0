//! Content store for Chirp.
//!
//! Posts are short texts (1 to 140 Unicode code points) owned exclusively by
//! their author: only the author may delete one, and deletion cascades to
//! the post's likes. Likes are unique per `(post, identity)` pair and
//! idempotent in both directions — re-liking and un-liking a never-liked
//! post are outcomes, not errors.
//!
//! Storage backends implement [`ContentStore`]; [`ContentService`] applies
//! the validation and ownership policy on top.

pub mod error;
pub mod memory;
pub mod service;
pub mod traits;
pub mod types;

pub use error::{ContentError, ContentResult};
pub use memory::InMemoryContentStore;
pub use service::{ContentService, PostDetail};
pub use traits::ContentStore;
pub use types::{LikeEdge, LikeOutcome, Post, UnlikeOutcome, MAX_POST_LEN};

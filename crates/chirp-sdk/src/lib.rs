//! High-level Chirp API.
//!
//! [`Chirp`] wires the in-memory identity, follow-graph, and content stores
//! together with the feed assembler and exposes every user-facing action as
//! one method: signup, follow/unfollow, post/delete, like/unlike, profile
//! and feed reads, and cascading account deletion.
//!
//! The acting identity is always an explicit parameter — there is no
//! ambient "current user". Callers (e.g. the HTTP layer) resolve
//! credentials to a [`UserId`](chirp_types::UserId) first and pass it in.

pub mod app;
pub mod error;

pub use app::{Chirp, LikeToggle, UnlikeToggle};
pub use error::{SdkError, SdkResult};

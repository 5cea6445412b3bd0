//! Read-time feed and profile assembly for Chirp.
//!
//! Everything in this crate is read-only composition: it queries the
//! identity, graph, and content stores and assembles profile pages, follow
//! lists, and the home feed. No mutation happens here. Each call re-queries
//! the live stores, so repeated assembly reflects concurrent changes.

pub mod assemble;
pub mod error;
pub mod view;

pub use assemble::FeedAssembler;
pub use error::{FeedError, FeedResult};
pub use view::{FeedItem, FollowPeer, ProfileView};

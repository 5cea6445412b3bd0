//! Follow graph for Chirp.
//!
//! The graph is a directed edge set between identities: `(A, B)` means
//! "A follows B" and does not imply `(B, A)`. The store keeps at most one
//! edge per ordered pair; the business rule that an identity cannot follow
//! itself lives in [`FollowGraph`], where user intent is interpreted, so
//! that the store remains a pure directed-graph data structure.
//!
//! Follow and unfollow are idempotent: repeating one is a distinct outcome
//! ([`FollowOutcome::AlreadyFollowing`], [`UnfollowOutcome::NotFollowing`]),
//! never an error. This makes client retries and double-submits safe.

pub mod error;
pub mod graph;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::{GraphError, GraphResult};
pub use graph::FollowGraph;
pub use memory::InMemoryFollowStore;
pub use traits::FollowStore;
pub use types::{FollowEdge, FollowOutcome, UnfollowOutcome};

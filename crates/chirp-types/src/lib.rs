//! Foundation types for Chirp.
//!
//! This crate provides the identifier, handle, and timestamp types used
//! throughout the Chirp system. Every other Chirp crate depends on
//! `chirp-types`.
//!
//! # Key Types
//!
//! - [`UserId`] — Time-ordered identifier for a registered identity (UUID v7)
//! - [`PostId`] — Time-ordered identifier for a post (UUID v7)
//! - [`Handle`] — Validated, unique, case-sensitive user handle
//! - [`Timestamp`] — UTC wall-clock timestamp for record ordering

pub mod error;
pub mod handle;
pub mod id;
pub mod time;

pub use error::TypeError;
pub use handle::Handle;
pub use id::{PostId, UserId};
pub use time::{now, Timestamp};

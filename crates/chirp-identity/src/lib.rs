//! Identity store for Chirp.
//!
//! An [`Identity`] is a registered user account: a unique, case-sensitive
//! handle, an opaque credential hash, and an email address. Credential
//! hashing and verification happen outside this crate; the store only holds
//! the resulting hash.
//!
//! Storage backends implement [`IdentityStore`]. The in-memory backend
//! [`InMemoryIdentityStore`] is the reference implementation.

pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::{IdentityError, IdentityResult};
pub use memory::InMemoryIdentityStore;
pub use traits::IdentityStore;
pub use types::Identity;

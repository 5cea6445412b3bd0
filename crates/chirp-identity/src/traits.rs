//! The [`IdentityStore`] trait defining the identity storage interface.

use chirp_types::{Handle, UserId};

use crate::error::IdentityResult;
use crate::types::Identity;

/// Storage backend for user identities.
///
/// Implementations must be thread-safe (`Send + Sync`) and must enforce
/// handle uniqueness atomically: a concurrent duplicate signup is rejected,
/// never stored twice. Each method is a single atomic unit of work.
pub trait IdentityStore: Send + Sync {
    /// Insert a new identity.
    ///
    /// Fails with [`IdentityError::HandleTaken`] if an identity with the
    /// same handle already exists.
    ///
    /// [`IdentityError::HandleTaken`]: crate::IdentityError::HandleTaken
    fn create(&self, identity: &Identity) -> IdentityResult<()>;

    /// Look up an identity by id. Returns `Ok(None)` if absent.
    fn get(&self, id: &UserId) -> IdentityResult<Option<Identity>>;

    /// Look up an identity by handle (case-sensitive). Returns `Ok(None)`
    /// if absent.
    fn get_by_handle(&self, handle: &Handle) -> IdentityResult<Option<Identity>>;

    /// Delete an identity by id. Returns `true` if it existed.
    ///
    /// Dependent records (follow edges, posts, likes) live in other stores;
    /// cascading is orchestrated above the store layer.
    fn delete(&self, id: &UserId) -> IdentityResult<bool>;

    /// Whether an identity with this id exists.
    fn exists(&self, id: &UserId) -> IdentityResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}

//! In-memory identity store for testing and embedded use.

use std::collections::HashMap;
use std::sync::RwLock;

use chirp_types::{Handle, UserId};

use crate::error::{IdentityError, IdentityResult};
use crate::traits::IdentityStore;
use crate::types::Identity;

/// An in-memory implementation of [`IdentityStore`].
///
/// Identities live in a `HashMap` keyed by id, with a secondary handle
/// index, both behind a single `RwLock` so that create/delete keep the two
/// maps consistent. Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    inner: RwLock<Maps>,
}

#[derive(Debug, Default)]
struct Maps {
    by_id: HashMap<UserId, Identity>,
    by_handle: HashMap<Handle, UserId>,
}

impl InMemoryIdentityStore {
    /// Create a new empty identity store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").by_id.len()
    }

    /// Returns `true` if no identities are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn create(&self, identity: &Identity) -> IdentityResult<()> {
        let mut maps = self
            .inner
            .write()
            .map_err(|e| IdentityError::Backend(format!("lock poisoned: {e}")))?;
        if maps.by_handle.contains_key(&identity.handle) {
            return Err(IdentityError::HandleTaken(
                identity.handle.as_str().to_string(),
            ));
        }
        maps.by_handle.insert(identity.handle.clone(), identity.id);
        maps.by_id.insert(identity.id, identity.clone());
        tracing::debug!(handle = %identity.handle, id = %identity.id, "identity created");
        Ok(())
    }

    fn get(&self, id: &UserId) -> IdentityResult<Option<Identity>> {
        let maps = self
            .inner
            .read()
            .map_err(|e| IdentityError::Backend(format!("lock poisoned: {e}")))?;
        Ok(maps.by_id.get(id).cloned())
    }

    fn get_by_handle(&self, handle: &Handle) -> IdentityResult<Option<Identity>> {
        let maps = self
            .inner
            .read()
            .map_err(|e| IdentityError::Backend(format!("lock poisoned: {e}")))?;
        Ok(maps
            .by_handle
            .get(handle)
            .and_then(|id| maps.by_id.get(id))
            .cloned())
    }

    fn delete(&self, id: &UserId) -> IdentityResult<bool> {
        let mut maps = self
            .inner
            .write()
            .map_err(|e| IdentityError::Backend(format!("lock poisoned: {e}")))?;
        match maps.by_id.remove(id) {
            Some(identity) => {
                maps.by_handle.remove(&identity.handle);
                tracing::debug!(handle = %identity.handle, id = %id, "identity deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

use serde::{Deserialize, Serialize};

use chirp_types::{now, Handle, Timestamp, UserId};

/// A registered user account.
///
/// The handle is immutable after signup. `credential_hash` is opaque to the
/// core: it is produced and verified by an external credential layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub handle: Handle,
    #[serde(skip_serializing, default)]
    pub credential_hash: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl Identity {
    /// Create a new identity record with a fresh id and timestamp.
    pub fn signup(
        handle: Handle,
        email: impl Into<String>,
        credential_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            handle,
            credential_hash: credential_hash.into(),
            email: email.into(),
            created_at: now(),
        }
    }
}

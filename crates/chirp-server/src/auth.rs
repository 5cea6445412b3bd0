use async_trait::async_trait;

use chirp_sdk::Chirp;
use chirp_types::{Handle, UserId};

use crate::error::ServerResult;

/// Credentials extracted from a request.
#[derive(Clone, Debug)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

/// Resolves request credentials to an acting identity.
///
/// Credential issuance and verification (passwords, sessions, token
/// signing) live outside this crate. A provider only answers "who is this
/// request acting as", returning `None` when the credentials resolve to
/// nobody.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Option<UserId>>;
}

/// Development provider: the bearer token is the user's handle.
///
/// Stands in for a real token verifier in tests and local runs. Anything
/// that is not a registered handle resolves to nobody.
pub struct HandleTokenAuth {
    app: Chirp,
}

impl HandleTokenAuth {
    pub fn new(app: Chirp) -> Self {
        Self { app }
    }
}

#[async_trait]
impl AuthProvider for HandleTokenAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Option<UserId>> {
        match credentials {
            Credentials::Bearer(token) => {
                let Ok(handle) = Handle::parse(token.as_str()) else {
                    return Ok(None);
                };
                match self.app.resolve_handle(&handle) {
                    Ok(identity) => Ok(Some(identity.id)),
                    Err(chirp_sdk::SdkError::UserNotFound(_)) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
            Credentials::Anonymous => Ok(None),
        }
    }
}

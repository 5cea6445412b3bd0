//! HTTP server for Chirp.
//!
//! A thin JSON surface over [`chirp_sdk::Chirp`]: each route is an explicit
//! handler function that resolves the acting identity through the
//! [`AuthProvider`](auth::AuthProvider) seam, invokes one application
//! action, and maps the error taxonomy to HTTP statuses. Credential
//! verification itself is outside this crate; the provider only resolves an
//! already-issued credential to a user id.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use auth::{AuthProvider, Credentials, HandleTokenAuth};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::ChirpServer;

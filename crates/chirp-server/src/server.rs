use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;

use chirp_sdk::Chirp;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// Chirp HTTP server.
pub struct ChirpServer {
    config: ServerConfig,
    state: AppState,
}

impl ChirpServer {
    /// Server over a fresh application with the development auth provider.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState::new(Chirp::new()),
            config,
        }
    }

    /// Server over pre-built state (custom auth provider, seeded app).
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self
            .router()
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes));
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("chirp server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

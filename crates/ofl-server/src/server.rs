use std::sync::Arc;

use tokio::net::TcpListener;

use ofl_ledger::RecordLedger;
use ofl_store::InMemoryLedgerStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Order-Form Ledger HTTP server.
pub struct OflServer {
    config: ServerConfig,
    state: AppState,
}

impl OflServer {
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            ledger: Arc::new(RecordLedger::new(InMemoryLedgerStore::new())),
            service_id: config.service_id.clone(),
        };
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
        let app = build_router(self.state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            service_id = %self.config.service_id,
            "OFL server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

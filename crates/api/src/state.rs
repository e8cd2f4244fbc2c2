use std::sync::Arc;

use leadflow_records::RecordStoreClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and immutable: handlers share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the lead table in the record store.
    pub records: RecordStoreClient,
}

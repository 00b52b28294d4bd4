use std::sync::Arc;

use cinedex_db::store::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Movie storage behind the store capability. Implementations are
    /// swappable: Postgres in production, in-memory for tests and
    /// database-less development.
    pub store: Arc<dyn MovieStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use microgrid_core::catalog::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: microgrid_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-only product catalog.
    pub catalog: Arc<Catalog>,
}

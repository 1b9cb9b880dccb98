use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and config are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Record store for tours, customers and expenses.
    pub pool: tourdesk_db::StorePool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

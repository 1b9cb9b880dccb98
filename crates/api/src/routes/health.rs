use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the record store can persist its snapshot.
    pub store_healthy: bool,
    /// Whether records are snapshotted to disk or held in memory only.
    pub persistent: bool,
    /// Number of records currently held.
    pub records: RecordCounts,
}

#[derive(Serialize)]
pub struct RecordCounts {
    pub tours: usize,
    pub customers: usize,
    pub expenses: usize,
}

/// GET /health -- returns service and record store health.
///
/// Never writes; a store whose snapshot directory is not yet created still
/// reports healthy as long as it could be created.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match tourdesk_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Record store health check failed");
            false
        }
    };

    let records = state
        .pool
        .read(|snapshot| RecordCounts {
            tours: snapshot.tours.len(),
            customers: snapshot.customers.len(),
            expenses: snapshot.expenses.len(),
        })
        .await;

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        persistent: state.config.data_file.is_some(),
        records,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

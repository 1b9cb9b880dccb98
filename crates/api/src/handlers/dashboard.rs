//! Handler for the business dashboard.

use axum::extract::State;
use axum::Json;
use tourdesk_core::dashboard::{compute_dashboard_stats, DashboardSummary};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Recomputed from the current records on every call.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let records = state.pool.snapshot().await;
    let summary = compute_dashboard_stats(&records.tours, &records.customers, &records.expenses);
    Ok(Json(DataResponse { data: summary }))
}

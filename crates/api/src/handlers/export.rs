//! Handlers for file exports.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use tourdesk_core::export::customers_csv;

use crate::error::AppResult;
use crate::query::TourFilterParams;
use crate::state::AppState;

/// GET /api/v1/export/customers.csv?tour_id=
pub async fn customers(
    State(state): State<AppState>,
    Query(params): Query<TourFilterParams>,
) -> AppResult<impl IntoResponse> {
    let records = state.pool.snapshot().await;
    let customers: Vec<_> = match params.tour_id() {
        Some(tour_id) => records
            .customers
            .into_iter()
            .filter(|c| c.tour_id == tour_id)
            .collect(),
        None => records.customers,
    };

    let csv = customers_csv(&customers, &records.tours)?;
    tracing::debug!(rows = customers.len(), "Exported customers CSV");

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"customers.csv\""),
        ],
        csv,
    ))
}

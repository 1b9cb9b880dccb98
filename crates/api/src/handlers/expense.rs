//! Handlers for the `/expenses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::records::Expense;
use tourdesk_db::models::expense::CreateExpense;
use tourdesk_db::repositories::ExpenseRepo;

use crate::error::{AppError, AppResult};
use crate::query::TourFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/expenses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<DataResponse<Expense>>)> {
    let expense = ExpenseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: expense })))
}

/// GET /api/v1/expenses?tour_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TourFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Expense>>>> {
    let expenses = ExpenseRepo::list(&state.pool, params.tour_id()).await;
    Ok(Json(DataResponse { data: expenses }))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if ExpenseRepo::delete(&state.pool, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Expense", &id))
    }
}

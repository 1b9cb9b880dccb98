//! Handlers for the `/tours` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::records::Tour;
use tourdesk_db::models::tour::{CreateTour, UpdateTour};
use tourdesk_db::repositories::TourRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tours
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTour>,
) -> AppResult<(StatusCode, Json<DataResponse<Tour>>)> {
    let tour = TourRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tour })))
}

/// GET /api/v1/tours
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Tour>>>> {
    let tours = TourRepo::list(&state.pool).await;
    Ok(Json(DataResponse { data: tours }))
}

/// GET /api/v1/tours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Tour>>> {
    let tour = TourRepo::find_by_id(&state.pool, &id)
        .await
        .ok_or_else(|| AppError::not_found("Tour", &id))?;
    Ok(Json(DataResponse { data: tour }))
}

/// PUT /api/v1/tours/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTour>,
) -> AppResult<Json<DataResponse<Tour>>> {
    let tour = TourRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Tour", &id))?;
    Ok(Json(DataResponse { data: tour }))
}

/// DELETE /api/v1/tours/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if TourRepo::delete(&state.pool, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Tour", &id))
    }
}

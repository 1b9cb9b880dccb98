//! Handlers for the `/customers` resource.
//!
//! Registration runs [`check_registration`], the same check served by
//! `POST /validate/customer`, before anything is written.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{Map, Value};
use tourdesk_core::records::Customer;
use tourdesk_core::types::Date;
use tourdesk_core::validation::{validate_submission, FieldError, FormErrors, ValidRegistration};
use tourdesk_db::models::customer::UpdateCustomer;
use tourdesk_db::repositories::{CustomerRepo, TourRepo};
use tourdesk_db::Store;

use crate::error::{AppError, AppResult};
use crate::query::TourFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Evaluate a submitted registration, including whether its tour exists.
///
/// Returns the complete error set on failure; a field of the wrong JSON type
/// is one more entry in that set.
pub async fn check_registration(
    pool: &Store,
    values: &Map<String, Value>,
    today: Date,
) -> Result<ValidRegistration, FormErrors> {
    let tour_id = values
        .get("tour_id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let unknown_tour = match tour_id {
        Some(id) => TourRepo::find_by_id(pool, id).await.is_none(),
        None => false,
    };
    let reference_error = || {
        FieldError::reference(format!(
            "Tour {} does not exist",
            tour_id.unwrap_or_default()
        ))
    };

    match validate_submission(values, today) {
        Ok(valid) if !unknown_tour => Ok(valid),
        Ok(_) => {
            let mut errors = FormErrors::new();
            errors.insert("tour_id", reference_error());
            Err(errors)
        }
        Err(mut errors) => {
            if unknown_tour {
                errors.insert("tour_id", reference_error());
            }
            Err(errors)
        }
    }
}

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Customer>>)> {
    let Json(values) = payload?;
    let today = Utc::now().date_naive();
    let registration = match check_registration(&state.pool, &values, today).await {
        Ok(registration) => registration,
        Err(errors) => {
            tracing::info!(fields = ?errors.field_names(), "Registration rejected");
            return Err(errors.into());
        }
    };

    let customer = CustomerRepo::create(&state.pool, registration).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: customer })))
}

/// GET /api/v1/customers?tour_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TourFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = CustomerRepo::list(&state.pool, params.tour_id()).await;
    Ok(Json(DataResponse { data: customers }))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::find_by_id(&state.pool, &id)
        .await
        .ok_or_else(|| AppError::not_found("Customer", &id))?;
    Ok(Json(DataResponse { data: customer }))
}

/// PUT /api/v1/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Customer", &id))?;
    Ok(Json(DataResponse { data: customer }))
}

/// DELETE /api/v1/customers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    if CustomerRepo::delete(&state.pool, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Customer", &id))
    }
}

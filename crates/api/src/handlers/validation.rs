//! Handlers for the validation endpoints.
//!
//! These let a client check a value or a whole registration form before
//! submitting it. They never write anything.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tourdesk_core::validation::{
    validate, validate_required_fields, FieldCheck, FieldKind, FormErrors,
    REQUIRED_CUSTOMER_FIELDS,
};

use crate::error::{AppError, AppResult};
use crate::handlers::customer::check_registration;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /validate/{kind}`. Older clients send the value under the
/// field's own name.
#[derive(Debug, Deserialize)]
pub struct ValueInput {
    #[serde(
        default,
        alias = "aadhaar_number",
        alias = "pan_number",
        alias = "mobile",
        alias = "email"
    )]
    pub value: Option<String>,
}

/// Body of `POST /validate/required`.
#[derive(Debug, Deserialize)]
pub struct RequiredInput {
    #[serde(default)]
    pub values: Map<String, Value>,
    /// Defaults to the customer registration form's required fields.
    pub required: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct RequiredCheck {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationCheck {
    pub valid: bool,
    pub errors: FormErrors,
}

/// POST /api/v1/validate/{kind}
pub async fn validate_field(
    Path(kind): Path<String>,
    Json(input): Json<ValueInput>,
) -> AppResult<Json<DataResponse<FieldCheck>>> {
    let kind = FieldKind::from_slug(&kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown field kind '{kind}'")))?;
    let check = validate(kind, input.value.as_deref().unwrap_or_default());
    Ok(Json(DataResponse { data: check }))
}

/// POST /api/v1/validate/required
pub async fn validate_required(
    Json(input): Json<RequiredInput>,
) -> AppResult<Json<DataResponse<RequiredCheck>>> {
    let errors = match &input.required {
        Some(names) => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            validate_required_fields(&input.values, &names)
        }
        None => validate_required_fields(&input.values, REQUIRED_CUSTOMER_FIELDS),
    };
    Ok(Json(DataResponse {
        data: RequiredCheck {
            valid: errors.is_empty(),
            errors,
        },
    }))
}

/// POST /api/v1/validate/customer
///
/// Returns the same verdict `POST /customers` would reach for this form.
pub async fn validate_customer(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<DataResponse<RegistrationCheck>>> {
    let Json(values) = payload?;
    let today = Utc::now().date_naive();
    let errors = check_registration(&state.pool, &values, today)
        .await
        .err()
        .unwrap_or_default();
    Ok(Json(DataResponse {
        data: RegistrationCheck {
            valid: errors.is_empty(),
            errors,
        },
    }))
}

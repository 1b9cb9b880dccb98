//! Route definitions for the validation endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// Routes mounted at `/validate`.
///
/// ```text
/// POST   /customer  -> validate_customer
/// POST   /required  -> validate_required
/// POST   /{kind}    -> validate_field
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer", post(validation::validate_customer))
        .route("/required", post(validation::validate_required))
        .route("/{kind}", post(validation::validate_field))
}

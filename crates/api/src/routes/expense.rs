//! Route definitions for the `/expenses` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::expense;
use crate::state::AppState;

/// Routes mounted at `/expenses`.
///
/// ```text
/// GET    /          -> list (?tour_id=)
/// POST   /          -> create
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(expense::list).post(expense::create))
        .route("/{id}", delete(expense::delete))
}

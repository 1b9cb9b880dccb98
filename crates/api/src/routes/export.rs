//! Route definitions for exports.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`.
///
/// ```text
/// GET    /customers.csv  -> customers (?tour_id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/customers.csv", get(export::customers))
}

pub mod customer;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod health;
pub mod tour;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tours                          list, create
/// /tours/{id}                     get, update, delete
///
/// /customers                      list (?tour_id=), register
/// /customers/{id}                 get, update, delete
///
/// /expenses                       list (?tour_id=), create
/// /expenses/{id}                  delete
///
/// /dashboard/stats                summary (GET)
///
/// /validate/customer              whole registration form (POST)
/// /validate/required              required-field check (POST)
/// /validate/{kind}                single value (POST)
///
/// /export/customers.csv           customer register as CSV (GET, ?tour_id=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tours", tour::router())
        .nest("/customers", customer::router())
        .nest("/expenses", expense::router())
        .nest("/dashboard", dashboard::router())
        .nest("/validate", validation::router())
        .nest("/export", export::router())
}

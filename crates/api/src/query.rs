//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?tour_id=` filter used by the customer, expense and export
/// endpoints. An empty value means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct TourFilterParams {
    pub tour_id: Option<String>,
}

impl TourFilterParams {
    pub fn tour_id(&self) -> Option<&str> {
        self.tour_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

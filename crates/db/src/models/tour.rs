//! Tour DTOs.

use serde::Deserialize;
use tourdesk_core::records::TransportMode;
use tourdesk_core::types::{Date, Money};
use validator::Validate;

pub const DEFAULT_MAX_CAPACITY: u32 = 50;

fn default_max_capacity() -> u32 {
    DEFAULT_MAX_CAPACITY
}

/// DTO for creating a new tour.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTour {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: Money,
    pub transport_mode: TransportMode,
    #[serde(default)]
    pub description: String,
    /// Defaults to 50 if omitted.
    #[serde(default = "default_max_capacity")]
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_capacity: u32,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

/// DTO for updating an existing tour. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTour {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: Option<Money>,
    pub transport_mode: Option<TransportMode>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_capacity: Option<u32>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
}

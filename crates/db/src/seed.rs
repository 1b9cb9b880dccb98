//! Sample data for a fresh store.

use chrono::NaiveDate;
use tourdesk_core::records::TransportMode;

use crate::error::StoreError;
use crate::models::tour::CreateTour;
use crate::repositories::TourRepo;
use crate::store::Store;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The two demo tours shown on a new installation.
pub fn sample_tours() -> Vec<CreateTour> {
    vec![
        CreateTour {
            name: "Magical Bhutan Adventure".to_string(),
            destination: "Thimphu, Paro, Punakha - Bhutan".to_string(),
            start_date: date(2025, 3, 15),
            end_date: date(2025, 3, 22),
            price: 85000.0,
            transport_mode: TransportMode::FlightAndLocal,
            description: "Explore the Land of the Thunder Dragon with visits to ancient \
                dzongs, monasteries and breathtaking Himalayan landscapes."
                .to_string(),
            max_capacity: 25,
            image_url: None,
        },
        CreateTour {
            name: "Sri Lanka Cultural Paradise".to_string(),
            destination: "Colombo, Kandy, Galle - Sri Lanka".to_string(),
            start_date: date(2025, 4, 10),
            end_date: date(2025, 4, 18),
            price: 65000.0,
            transport_mode: TransportMode::FlightAndBus,
            description: "Discover the rich heritage of Sri Lanka with temples, tea \
                plantations and colonial forts."
                .to_string(),
            max_capacity: 30,
            image_url: None,
        },
    ]
}

/// Insert the sample tours if the store has no tours yet. Returns the number
/// of tours inserted.
pub async fn seed_sample_tours(pool: &Store) -> Result<usize, StoreError> {
    if !TourRepo::list(pool).await.is_empty() {
        return Ok(0);
    }

    let tours = sample_tours();
    for tour in &tours {
        TourRepo::create(pool, tour).await?;
    }
    tracing::info!(count = tours.len(), "Seeded sample tours");
    Ok(tours.len())
}

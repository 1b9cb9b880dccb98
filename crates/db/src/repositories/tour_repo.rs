//! Repository for tours.

use chrono::Utc;
use tourdesk_core::records::Tour;
use tourdesk_core::types::Date;
use tourdesk_core::validation::FieldError;
use validator::Validate;

use crate::error::StoreError;
use crate::models::tour::{CreateTour, UpdateTour};
use crate::store::Store;

use super::new_id;

/// Provides CRUD operations for tours.
pub struct TourRepo;

fn check_dates(start: Date, end: Date) -> Result<(), StoreError> {
    if end < start {
        return Err(StoreError::field(
            "end_date",
            FieldError::range("End date cannot be before the start date"),
        ));
    }
    Ok(())
}

impl TourRepo {
    /// Insert a new tour with no bookings.
    pub async fn create(pool: &Store, input: &CreateTour) -> Result<Tour, StoreError> {
        input.validate()?;
        check_dates(input.start_date, input.end_date)?;

        let now = Utc::now();
        let tour = Tour {
            tour_id: new_id(),
            name: input.name.trim().to_string(),
            destination: input.destination.trim().to_string(),
            start_date: input.start_date,
            end_date: input.end_date,
            price: input.price,
            transport_mode: input.transport_mode,
            description: input.description.clone(),
            max_capacity: input.max_capacity,
            booked_count: 0,
            image_url: input.image_url.clone(),
            created_at: now,
            updated_at: now,
        };

        pool.mutate(|records| {
            records.tours.push(tour.clone());
            Ok(())
        })
        .await?;

        tracing::debug!(tour_id = %tour.tour_id, name = %tour.name, "Tour created");
        Ok(tour)
    }

    pub async fn find_by_id(pool: &Store, tour_id: &str) -> Option<Tour> {
        pool.read(|records| records.tour(tour_id).cloned()).await
    }

    /// All tours in insertion order.
    pub async fn list(pool: &Store) -> Vec<Tour> {
        pool.read(|records| records.tours.clone()).await
    }

    /// Apply the supplied fields. Returns `None` if the tour does not exist.
    ///
    /// Capacity cannot drop below the current bookings.
    pub async fn update(
        pool: &Store,
        tour_id: &str,
        input: &UpdateTour,
    ) -> Result<Option<Tour>, StoreError> {
        input.validate()?;

        let updated = pool
            .mutate(|records| {
                let Some(tour) = records.tour_mut(tour_id) else {
                    return Ok(None);
                };

                let start = input.start_date.unwrap_or(tour.start_date);
                let end = input.end_date.unwrap_or(tour.end_date);
                check_dates(start, end)?;

                if let Some(capacity) = input.max_capacity {
                    if capacity < tour.booked_count {
                        return Err(StoreError::field(
                            "max_capacity",
                            FieldError::range(format!(
                                "Capacity cannot be lower than the {} seats already booked",
                                tour.booked_count
                            )),
                        ));
                    }
                    tour.max_capacity = capacity;
                }

                if let Some(name) = &input.name {
                    tour.name = name.trim().to_string();
                }
                if let Some(destination) = &input.destination {
                    tour.destination = destination.trim().to_string();
                }
                if let Some(price) = input.price {
                    tour.price = price;
                }
                if let Some(mode) = input.transport_mode {
                    tour.transport_mode = mode;
                }
                if let Some(description) = &input.description {
                    tour.description = description.clone();
                }
                if input.image_url.is_some() {
                    tour.image_url = input.image_url.clone();
                }
                tour.start_date = start;
                tour.end_date = end;
                tour.updated_at = Utc::now();
                Ok(Some(tour.clone()))
            })
            .await?;

        if updated.is_some() {
            tracing::debug!(tour_id, "Tour updated");
        }
        Ok(updated)
    }

    /// Delete a tour. Returns `true` if a tour was removed.
    ///
    /// A tour that still has customers cannot be deleted.
    pub async fn delete(pool: &Store, tour_id: &str) -> Result<bool, StoreError> {
        let removed = pool
            .mutate(|records| {
                let Some(index) = records.tours.iter().position(|t| t.tour_id == tour_id) else {
                    return Ok(false);
                };
                let booked = records.customers_on(tour_id);
                if booked > 0 {
                    return Err(StoreError::Conflict(format!(
                        "Tour {tour_id} has {booked} registered customer(s)"
                    )));
                }
                records.tours.remove(index);
                Ok(true)
            })
            .await?;

        if removed {
            tracing::debug!(tour_id, "Tour deleted");
        }
        Ok(removed)
    }
}

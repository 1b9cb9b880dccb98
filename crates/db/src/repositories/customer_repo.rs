//! Repository for customers.
//!
//! Every write here keeps `Tour::booked_count` equal to the number of
//! customers referencing the tour.

use chrono::Utc;
use tourdesk_core::records::Customer;
use tourdesk_core::validation::{FieldError, ValidRegistration};

use crate::error::StoreError;
use crate::models::customer::UpdateCustomer;
use crate::store::Store;

use super::new_id;

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

impl CustomerRepo {
    /// Register a customer on their tour.
    ///
    /// The tour lookup, capacity check and booked-count increment happen
    /// under one write lock, so concurrent registrations cannot overbook.
    pub async fn create(pool: &Store, input: ValidRegistration) -> Result<Customer, StoreError> {
        let now = Utc::now();
        let customer = Customer {
            customer_id: new_id(),
            tour_id: input.tour_id,
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            email: input.email,
            mobile: input.mobile,
            address: input.address,
            city: input.city,
            state: input.state,
            pincode: input.pincode,
            aadhaar_number: input.aadhaar_number,
            pan_number: input.pan_number,
            emergency_contact_name: input.emergency_contact_name,
            emergency_contact_number: input.emergency_contact_number,
            special_requirements: input.special_requirements,
            payment_status: input.payment_status,
            amount_paid: input.amount_paid,
            payment_method: input.payment_method,
            created_at: now,
            updated_at: now,
        };

        pool.mutate(|records| {
            let Some(tour) = records.tour_mut(&customer.tour_id) else {
                return Err(StoreError::field(
                    "tour_id",
                    FieldError::reference(format!("Tour {} does not exist", customer.tour_id)),
                ));
            };
            if tour.is_full() {
                return Err(StoreError::Conflict(format!(
                    "Tour {} is fully booked ({} seats)",
                    tour.name, tour.max_capacity
                )));
            }
            tour.booked_count += 1;
            tour.updated_at = now;
            records.customers.push(customer.clone());
            Ok(())
        })
        .await?;

        tracing::debug!(
            customer_id = %customer.customer_id,
            tour_id = %customer.tour_id,
            "Customer registered"
        );
        Ok(customer)
    }

    pub async fn find_by_id(pool: &Store, customer_id: &str) -> Option<Customer> {
        pool.read(|records| {
            records
                .customers
                .iter()
                .find(|c| c.customer_id == customer_id)
                .cloned()
        })
        .await
    }

    /// Customers in registration order, optionally limited to one tour.
    pub async fn list(pool: &Store, tour_id: Option<&str>) -> Vec<Customer> {
        pool.read(|records| {
            records
                .customers
                .iter()
                .filter(|c| tour_id.map_or(true, |id| c.tour_id == id))
                .cloned()
                .collect()
        })
        .await
    }

    /// Update contact and payment details. Returns `None` if the customer
    /// does not exist.
    pub async fn update(
        pool: &Store,
        customer_id: &str,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, StoreError> {
        let errors = input.field_errors();
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }

        let updated = pool
            .mutate(|records| {
                let Some(customer) = records
                    .customers
                    .iter_mut()
                    .find(|c| c.customer_id == customer_id)
                else {
                    return Ok(None);
                };

                let text_fields = [
                    (&mut customer.first_name, &input.first_name),
                    (&mut customer.last_name, &input.last_name),
                    (&mut customer.email, &input.email),
                    (&mut customer.mobile, &input.mobile),
                    (&mut customer.address, &input.address),
                    (&mut customer.city, &input.city),
                    (&mut customer.state, &input.state),
                    (&mut customer.pincode, &input.pincode),
                    (&mut customer.emergency_contact_name, &input.emergency_contact_name),
                    (
                        &mut customer.emergency_contact_number,
                        &input.emergency_contact_number,
                    ),
                ];
                for (target, value) in text_fields {
                    if let Some(value) = value {
                        *target = trimmed(value);
                    }
                }

                if input.special_requirements.is_some() {
                    customer.special_requirements = input.special_requirements.clone();
                }
                if input.payment_method.is_some() {
                    customer.payment_method = input.payment_method.clone();
                }
                if let Some(status) = input.payment_status {
                    customer.payment_status = status;
                }
                if let Some(amount) = input.amount_paid {
                    customer.amount_paid = amount;
                }
                customer.updated_at = Utc::now();
                Ok(Some(customer.clone()))
            })
            .await?;

        if let Some(customer) = &updated {
            tracing::debug!(
                customer_id,
                payment_status = customer.payment_status.as_str(),
                "Customer updated"
            );
        }
        Ok(updated)
    }

    /// Delete a customer and release their seat. Returns `true` if the
    /// customer existed.
    pub async fn delete(pool: &Store, customer_id: &str) -> Result<bool, StoreError> {
        let removed = pool
            .mutate(|records| {
                let Some(index) = records
                    .customers
                    .iter()
                    .position(|c| c.customer_id == customer_id)
                else {
                    return Ok(None);
                };
                let customer = records.customers.remove(index);
                if let Some(tour) = records.tour_mut(&customer.tour_id) {
                    tour.booked_count = tour.booked_count.saturating_sub(1);
                    tour.updated_at = Utc::now();
                }
                Ok(Some(customer.tour_id))
            })
            .await?;

        match removed {
            Some(tour_id) => {
                tracing::debug!(customer_id, tour_id = %tour_id, "Customer deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

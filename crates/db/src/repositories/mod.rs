//! Repositories for the record store.
//!
//! Each repository is a zero-sized struct with async methods taking the
//! store, mirroring one record collection.

pub mod customer_repo;
pub mod expense_repo;
pub mod tour_repo;

pub use customer_repo::CustomerRepo;
pub use expense_repo::ExpenseRepo;
pub use tour_repo::TourRepo;

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

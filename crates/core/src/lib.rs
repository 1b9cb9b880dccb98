//! Pure domain logic for the TourDesk back office.
//!
//! Holds the record types, the identity/contact validation engine, the
//! dashboard aggregation and the customer export. Nothing in this crate
//! performs I/O; the store and the HTTP layer pass data in.

pub mod dashboard;
pub mod error;
pub mod export;
pub mod records;
pub mod types;
pub mod validation;

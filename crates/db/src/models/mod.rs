//! Create/update DTOs for the stored records.
//!
//! The records themselves live in `tourdesk_core::records`; these are the
//! shapes accepted on write. `booked_count`, identifiers and timestamps are
//! always assigned by the store.

pub mod customer;
pub mod expense;
pub mod tour;

//! Record store for tours, customers and expenses.
//!
//! Records live in memory behind a single lock and are snapshotted to a JSON
//! file after every successful write. Repositories expose the CRUD
//! operations and enforce the booked-count invariant.

use std::path::Path;
use std::sync::Arc;

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use store::{Snapshot, Store};

pub type StorePool = Arc<Store>;

/// Open the store, loading `path` if it exists. `None` keeps everything in
/// memory.
pub async fn open_store(path: Option<&Path>) -> Result<StorePool, StoreError> {
    let store = match path {
        Some(path) => Store::open(path).await?,
        None => Store::in_memory(),
    };
    Ok(Arc::new(store))
}

/// Check that the snapshot location is usable.
pub async fn health_check(pool: &StorePool) -> Result<(), StoreError> {
    pool.health_check().await
}

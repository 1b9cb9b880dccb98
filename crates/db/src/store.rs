//! In-memory record store with JSON snapshot persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tourdesk_core::records::{Customer, Expense, Tour};

use crate::error::StoreError;

/// Every record the back office holds, each collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tours: Vec<Tour>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    pub fn tour(&self, tour_id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.tour_id == tour_id)
    }

    pub fn tour_mut(&mut self, tour_id: &str) -> Option<&mut Tour> {
        self.tours.iter_mut().find(|t| t.tour_id == tour_id)
    }

    /// Customers currently booked on `tour_id`.
    pub fn customers_on(&self, tour_id: &str) -> usize {
        self.customers.iter().filter(|c| c.tour_id == tour_id).count()
    }

    /// Reset every tour's `booked_count` to its actual number of customers.
    ///
    /// Returns how many tours were corrected.
    pub fn recount_bookings(&mut self) -> usize {
        let mut corrected = 0;
        for index in 0..self.tours.len() {
            let booked = self.customers_on(&self.tours[index].tour_id);
            let booked = u32::try_from(booked).unwrap_or(u32::MAX);
            let tour = &mut self.tours[index];
            if tour.booked_count != booked {
                tracing::warn!(
                    tour_id = %tour.tour_id,
                    stored = tour.booked_count,
                    actual = booked,
                    "Stored booked count disagrees with customer records"
                );
                tour.booked_count = booked;
                corrected += 1;
            }
        }
        corrected
    }
}

/// The shared store. Writes are serialized by one lock.
#[derive(Debug)]
pub struct Store {
    state: RwLock<Snapshot>,
    path: Option<PathBuf>,
}

impl Store {
    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            state: RwLock::new(Snapshot::default()),
            path: None,
        }
    }

    /// Open a file-backed store, loading the snapshot at `path` if present.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let mut snapshot: Snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No snapshot found, starting empty");
                Snapshot::default()
            }
            Err(err) => return Err(err.into()),
        };
        let corrected = snapshot.recount_bookings();
        tracing::info!(
            path = %path.display(),
            tours = snapshot.tours.len(),
            customers = snapshot.customers.len(),
            expenses = snapshot.expenses.len(),
            corrected_tours = corrected,
            "Loaded snapshot"
        );
        Ok(Self {
            state: RwLock::new(snapshot),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// A copy of the current records.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    /// Run `f` against the current records without copying them.
    pub async fn read<T>(&self, f: impl FnOnce(&Snapshot) -> T) -> T {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// Apply `f` to a working copy of the records, persist it, then publish
    /// it. If `f` or the persist step fails, the visible records are left
    /// unchanged.
    pub async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Snapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.state.write().await;
        let mut working = guard.clone();
        let out = f(&mut working)?;
        self.persist(&working).await?;
        *guard = working;
        Ok(out)
    }

    async fn persist(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        tracing::debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }

    /// Verify the snapshot could be written: the nearest existing ancestor
    /// of its location must be a writable directory. Reads metadata only;
    /// directories are created by the first write.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut dir = path.parent();
        while let Some(candidate) = dir {
            let target = if candidate.as_os_str().is_empty() {
                Path::new(".")
            } else {
                candidate
            };
            match tokio::fs::metadata(target).await {
                Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => return Ok(()),
                Ok(_) => {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::PermissionDenied,
                        format!("{} is not a writable directory", target.display()),
                    )
                    .into());
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    dir = candidate.parent();
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no existing ancestor for {}", path.display()),
        )
        .into())
    }
}

//! Process-wide holder of the active dataset
//!
//! The dataset is built completely off to the side and then swapped in under
//! a short write lock. Readers clone the `Arc` under a read lock, so a query
//! always works against one whole dataset even while an upload replaces it.

use std::sync::{Arc, PoisonError, RwLock};

use super::decoder::{decode_csv, DecodedTable};
use super::errors::{StoreError, StoreResult};
use super::record::{Dataset, RawRow};

/// Holds the single active dataset
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw rows and replace the active dataset.
    ///
    /// On error the previous dataset (if any) stays active.
    pub fn load(&self, columns: Vec<String>, rows: &[RawRow]) -> StoreResult<Arc<Dataset>> {
        let dataset = Dataset::from_rows(columns, rows)?;
        Ok(self.replace(dataset))
    }

    /// Decode CSV bytes and replace the active dataset
    pub fn load_csv(&self, bytes: &[u8]) -> StoreResult<Arc<Dataset>> {
        let DecodedTable { columns, rows } = decode_csv(bytes)?;
        self.load(columns, &rows)
    }

    /// Swap in an already-validated dataset
    pub fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        // The slot only ever holds a complete Arc, so a poisoned lock is still consistent.
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&dataset));
        dataset
    }

    /// Returns the active dataset
    pub fn get(&self) -> StoreResult<Arc<Dataset>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(StoreError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.get().is_ok()
    }
}

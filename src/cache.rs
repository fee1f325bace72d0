//! Session-scoped memoization of loaded datasets.

use std::collections::HashMap;

use polars::prelude::*;

use crate::dataset::DatasetId;
use crate::error::DashboardError;
use crate::loader::{load_dataset, Fetch, HttpFetcher};

/// One cache per app session, passed explicitly to whoever needs
/// dataset access. Entries have no expiry and no size bound; there are
/// only five dataset identifiers.
pub struct DatasetCache {
    fetcher: Box<dyn Fetch>,
    frames: HashMap<DatasetId, DataFrame>,
}

impl DatasetCache {
    pub fn new(fetcher: Box<dyn Fetch>) -> Self {
        Self {
            fetcher,
            frames: HashMap::new(),
        }
    }

    /// Return the cached frame, loading it first if absent.
    pub fn get_or_load(&mut self, id: DatasetId) -> Result<&DataFrame, DashboardError> {
        if !self.frames.contains_key(&id) {
            let spec = id.spec();
            log::info!("loading {}", spec.title);
            let df = load_dataset(spec, self.fetcher.as_ref())?;
            self.frames.insert(id, df);
        }
        Ok(&self.frames[&id])
    }

    /// Clear every entry unconditionally. The next `get_or_load` for any
    /// dataset re-invokes its loader.
    pub fn invalidate_all(&mut self) {
        log::info!("invalidating {} cached datasets", self.frames.len());
        self.frames.clear();
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(Box::new(HttpFetcher::new()))
    }
}

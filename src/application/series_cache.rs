use crate::domain::types::PricePoint;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Session-lifetime cache of parsed price series, one entry per
/// instrument code.
///
/// Pure key-value store: no eviction, no TTL, no failure modes. A miss
/// is `None`, never an error. Writes are last-writer-wins overwrites;
/// concurrent writers for the same instrument produce equal values, so
/// a race is harmless.
pub struct SeriesCache {
    series: RwLock<HashMap<String, Vec<PricePoint>>>,
}

// Manual Debug implementation for SeriesCache
impl std::fmt::Debug for SeriesCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesCache")
            .field("series", &"<RwLock>")
            .finish()
    }
}

impl SeriesCache {
    pub fn new() -> Self {
        Self {
            series: RwLock::new(HashMap::new()),
        }
    }

    /// Parsed series for an instrument, if one has been stored.
    pub fn get(&self, instrument: &str) -> Option<Vec<PricePoint>> {
        match self.series.read() {
            Ok(guard) => guard.get(instrument).cloned(),
            Err(poisoned) => poisoned.into_inner().get(instrument).cloned(),
        }
    }

    /// Store a parsed series for an instrument, replacing any previous
    /// entry.
    pub fn put(&self, instrument: String, points: Vec<PricePoint>) {
        debug!("SeriesCache: storing {} points for {}", points.len(), instrument);
        match self.series.write() {
            Ok(mut guard) => {
                guard.insert(instrument, points);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(instrument, points);
            }
        }
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new()
    }
}

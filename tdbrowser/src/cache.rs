//! In-process station cache keyed by local station id
//!
//! Best-effort memoization between a listing call and the point lookups
//! the menu layer issues afterwards. Listing operations clear and
//! repopulate the cache; id lookups read through to the API on a miss.
//! An entry inserted by a lookup may disappear as soon as another
//! listing clears the cache; callers must not rely on retention.

use crate::models::Station;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mutex-guarded map from local station id to [`Station`]
#[derive(Debug, Default)]
pub struct StationCache {
    inner: Mutex<HashMap<String, Station>>,
}

impl StationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a station by local id
    pub fn get(&self, id: &str) -> Option<Station> {
        self.inner.lock().unwrap().get(id).cloned()
    }

    /// Insert a station under its local id, replacing any previous entry
    pub fn put(&self, station: Station) {
        self.inner
            .lock()
            .unwrap()
            .insert(station.id.clone(), station);
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }

    /// Number of cached stations
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// True when no station is cached
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Station, StationRecord};
    use serde_json::json;

    fn station(uuid: &str, name: &str) -> Station {
        let record: StationRecord = serde_json::from_value(json!({
            "stationuuid": uuid,
            "name": name,
        }))
        .unwrap();
        Station::from_record(record, "RB").unwrap()
    }

    #[test]
    fn test_put_get_clear() {
        let cache = StationCache::new();
        assert!(cache.is_empty());

        let station = station("9617a958-0601-11e8-ae97-52543be04c81", "Test FM");
        let id = station.id.clone();
        cache.put(station);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&id).unwrap().name, "Test FM");
        assert!(cache.get("RB-unknown").is_none());

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&id).is_none());
    }

    #[test]
    fn test_put_replaces_same_id() {
        let cache = StationCache::new();
        cache.put(station("9617a958-0601-11e8-ae97-52543be04c81", "Old"));
        cache.put(station("9617a958-0601-11e8-ae97-52543be04c81", "New"));

        assert_eq!(cache.len(), 1);
        let id = station("9617a958-0601-11e8-ae97-52543be04c81", "x").id;
        assert_eq!(cache.get(&id).unwrap().name, "New");
    }
}

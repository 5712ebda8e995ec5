//! Station visibility filtering
//!
//! Every raw record returned by a listing endpoint passes through a
//! [`StationFilter`] before it becomes a [`Station`](crate::Station).
//! The default accepts everything; the built-in [`VisibilityFilter`]
//! implements the broken-station and favicon knobs of the client
//! builder. Consumers can install their own filter for allow/deny
//! lists or anything else.

use crate::models::StationRecord;

/// Predicate applied to every raw station record during listings
pub trait StationFilter: Send + Sync {
    /// Return `true` to keep the record
    fn accept(&self, record: &StationRecord) -> bool;
}

/// Filter that accepts every record
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl StationFilter for AcceptAll {
    fn accept(&self, _record: &StationRecord) -> bool {
        true
    }
}

/// Built-in filter driven by the client visibility knobs
#[derive(Debug, Clone, Copy)]
pub struct VisibilityFilter {
    /// Keep stations that failed the provider's last stream check
    pub show_broken: bool,
    /// Drop stations without a favicon
    pub require_favicon: bool,
}

impl StationFilter for VisibilityFilter {
    fn accept(&self, record: &StationRecord) -> bool {
        if !self.show_broken && record.lastcheckok == 0 {
            return false;
        }
        if self.require_favicon && record.favicon.is_empty() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> StationRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.accept(&StationRecord::default()));
    }

    #[test]
    fn test_visibility_broken() {
        let filter = VisibilityFilter {
            show_broken: false,
            require_favicon: false,
        };
        assert!(filter.accept(&record(json!({ "lastcheckok": 1 }))));
        assert!(!filter.accept(&record(json!({ "lastcheckok": 0 }))));
        // Missing lastcheckok defaults to 0 and counts as broken
        assert!(!filter.accept(&StationRecord::default()));

        let permissive = VisibilityFilter {
            show_broken: true,
            require_favicon: false,
        };
        assert!(permissive.accept(&record(json!({ "lastcheckok": 0 }))));
    }

    #[test]
    fn test_visibility_favicon() {
        let filter = VisibilityFilter {
            show_broken: true,
            require_favicon: true,
        };
        assert!(filter.accept(&record(json!({ "favicon": "http://x/icon.png" }))));
        assert!(!filter.accept(&record(json!({ "favicon": "" }))));
    }
}

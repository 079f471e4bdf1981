//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Initialization error types
//! - `LookupFailure`, the per-query outcome that separates "no data" from
//!   resolver failures
//! - Lookup statistics keyed by query kind
//!
//! No lookup failure is ever fatal. A failed query simply contributes nothing
//! to the report and is counted in [`LookupStats`].

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{InitializationError, LookupFailure, LookupResult, QueryKind};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_stats_initialization() {
        let stats = LookupStats::new();
        for kind in QueryKind::iter() {
            assert_eq!(stats.answered(kind), 0);
            assert_eq!(stats.no_data(kind), 0);
            assert_eq!(stats.transport_failures(kind), 0);
        }
        assert_eq!(stats.total_queries(), 0);
    }

    #[test]
    fn test_lookup_stats_records_each_outcome() {
        let stats = LookupStats::new();
        stats.record(QueryKind::Ns, &Ok::<_, LookupFailure>(vec!["ns1"]));
        stats.record::<()>(QueryKind::Ns, &Err(LookupFailure::NoData));
        stats.record::<()>(
            QueryKind::Ns,
            &Err(LookupFailure::Transport("timed out".into())),
        );

        assert_eq!(stats.answered(QueryKind::Ns), 1);
        assert_eq!(stats.no_data(QueryKind::Ns), 1);
        assert_eq!(stats.transport_failures(QueryKind::Ns), 1);
        assert_eq!(stats.total_queries(), 3);
        assert_eq!(stats.total_transport_failures(), 1);
    }

    #[test]
    fn test_lookup_stats_kinds_are_independent() {
        let stats = LookupStats::new();
        stats.record::<()>(QueryKind::Mx, &Err(LookupFailure::NoData));
        stats.record::<()>(QueryKind::Mx, &Err(LookupFailure::NoData));

        assert_eq!(stats.no_data(QueryKind::Mx), 2);
        assert_eq!(stats.no_data(QueryKind::Txt), 0);
    }

    #[test]
    fn test_lookup_stats_summary() {
        let stats = LookupStats::new();
        stats.record(QueryKind::Cname, &Ok::<_, LookupFailure>("alias"));
        let summary = stats.summary();
        assert!(summary.starts_with("CNAME 1/0/0"), "{summary}");
        assert!(summary.contains("PTR 0/0/0"), "{summary}");
    }
}

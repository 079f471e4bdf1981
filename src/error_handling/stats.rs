//! Lookup statistics tracking.
//!
//! Counts, per query kind, how many DNS queries answered, came back empty, or
//! failed at the transport level. Lookup failures are silent in the report, so
//! these counters are the only place they surface.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{LookupFailure, QueryKind};

#[derive(Debug, Default)]
struct Counters {
    answered: AtomicUsize,
    no_data: AtomicUsize,
    transport: AtomicUsize,
}

/// Per-run query statistics.
///
/// Counters are atomic so the tracker can be shared by reference if lookups
/// are ever issued from more than one task. All query kinds are initialized
/// to zero on creation.
#[derive(Debug)]
pub struct LookupStats {
    counters: HashMap<QueryKind, Counters>,
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupStats {
    pub fn new() -> Self {
        let counters = QueryKind::iter()
            .map(|kind| (kind, Counters::default()))
            .collect();
        LookupStats { counters }
    }

    /// Records the outcome of one query.
    pub fn record<T>(&self, kind: QueryKind, outcome: &Result<T, LookupFailure>) {
        let Some(counters) = self.counters.get(&kind) else {
            log::error!("Query kind {kind:?} missing from LookupStats");
            return;
        };
        let counter = match outcome {
            Ok(_) => &counters.answered,
            Err(LookupFailure::NoData) => &counters.no_data,
            Err(LookupFailure::Transport(_)) => &counters.transport,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn answered(&self, kind: QueryKind) -> usize {
        self.load(kind, |c| &c.answered)
    }

    pub fn no_data(&self, kind: QueryKind) -> usize {
        self.load(kind, |c| &c.no_data)
    }

    pub fn transport_failures(&self, kind: QueryKind) -> usize {
        self.load(kind, |c| &c.transport)
    }

    /// Total number of queries issued, across all kinds and outcomes.
    pub fn total_queries(&self) -> usize {
        QueryKind::iter()
            .map(|k| self.answered(k) + self.no_data(k) + self.transport_failures(k))
            .sum()
    }

    pub fn total_transport_failures(&self) -> usize {
        QueryKind::iter().map(|k| self.transport_failures(k)).sum()
    }

    /// One-line summary, e.g. `NS 2/0/1` meaning answered/no-data/failed.
    pub fn summary(&self) -> String {
        QueryKind::iter()
            .map(|k| {
                format!(
                    "{} {}/{}/{}",
                    k,
                    self.answered(k),
                    self.no_data(k),
                    self.transport_failures(k)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn load(&self, kind: QueryKind, pick: impl Fn(&Counters) -> &AtomicUsize) -> usize {
        self.counters
            .get(&kind)
            .map(|c| pick(c).load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

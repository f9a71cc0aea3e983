//! Search Observers
//!
//! Observers receive callbacks as the allocator walks from the single-table
//! fast path into the combination search. Every method has an empty default
//! so implementations only override what they care about.

use std::fmt;

use tracing::{debug, trace};

use crate::tables::TableType;

/// Why a branch of the combination search was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PruneReason {
    /// Filling every remaining slot with the largest table still seats too few.
    Undercapacity,

    /// The minimum seating of the tables placed so far already exceeds the party.
    OverMinimum,

    /// The count vector did not add up to the target number of tables.
    CountMismatch,
}

impl fmt::Display for PruneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PruneReason::Undercapacity => "undercapacity",
            PruneReason::OverMinimum => "over-minimum",
            PruneReason::CountMismatch => "count-mismatch",
        };

        f.write_str(label)
    }
}

/// Callbacks emitted while solving an allocation request.
pub trait SearchObserver {
    /// A single table seats the party.
    fn on_single_unit_hit(&mut self, _table: &TableType, _waste: u64) {}

    /// The combination search is starting over the given table-count range.
    fn on_search_started(&mut self, _k_min: u32, _k_max: u32, _candidates: &[&TableType]) {}

    /// Every combination of exactly `k` tables is about to be enumerated.
    fn on_depth_started(&mut self, _k: u32) {}

    /// A search node was visited.
    fn on_node_explored(&mut self) {}

    /// A branch was cut.
    fn on_pruned(&mut self, _reason: PruneReason) {}

    /// A strictly better combination of `k` tables was found.
    fn on_incumbent(&mut self, _k: u32, _waste: u64, _penalty: u64) {}

    /// The enumeration for `k` tables finished.
    fn on_depth_finished(&mut self, _k: u32, _found: bool) {}

    /// No combination seats the party.
    fn on_exhausted(&mut self) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that forwards search milestones to `tracing`.
///
/// Node visits and prunes are emitted at `trace` level, everything else at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_single_unit_hit(&mut self, table: &TableType, waste: u64) {
        debug!(table_type = table.name(), waste, "single table seats party");
    }

    fn on_search_started(&mut self, k_min: u32, k_max: u32, candidates: &[&TableType]) {
        debug!(
            k_min,
            k_max,
            candidates = candidates.len(),
            "starting combination search"
        );
    }

    fn on_depth_started(&mut self, k: u32) {
        debug!(k, "enumerating combinations");
    }

    fn on_node_explored(&mut self) {
        trace!("node explored");
    }

    fn on_pruned(&mut self, reason: PruneReason) {
        trace!(%reason, "branch pruned");
    }

    fn on_incumbent(&mut self, k: u32, waste: u64, penalty: u64) {
        trace!(k, waste, penalty, "new incumbent");
    }

    fn on_depth_finished(&mut self, k: u32, found: bool) {
        debug!(k, found, "finished enumerating combinations");
    }

    fn on_exhausted(&mut self) {
        debug!("no combination seats party");
    }
}

/// Forward every callback to two observers in turn.
#[derive(Debug)]
pub struct CompositeObserver<'a, A: ?Sized, B: ?Sized> {
    first: &'a mut A,
    second: &'a mut B,
}

impl<'a, A: SearchObserver + ?Sized, B: SearchObserver + ?Sized> CompositeObserver<'a, A, B> {
    /// Combine two observers.
    pub fn new(first: &'a mut A, second: &'a mut B) -> Self {
        Self { first, second }
    }
}

impl<A: SearchObserver + ?Sized, B: SearchObserver + ?Sized> SearchObserver
    for CompositeObserver<'_, A, B>
{
    fn on_single_unit_hit(&mut self, table: &TableType, waste: u64) {
        self.first.on_single_unit_hit(table, waste);
        self.second.on_single_unit_hit(table, waste);
    }

    fn on_search_started(&mut self, k_min: u32, k_max: u32, candidates: &[&TableType]) {
        self.first.on_search_started(k_min, k_max, candidates);
        self.second.on_search_started(k_min, k_max, candidates);
    }

    fn on_depth_started(&mut self, k: u32) {
        self.first.on_depth_started(k);
        self.second.on_depth_started(k);
    }

    fn on_node_explored(&mut self) {
        self.first.on_node_explored();
        self.second.on_node_explored();
    }

    fn on_pruned(&mut self, reason: PruneReason) {
        self.first.on_pruned(reason);
        self.second.on_pruned(reason);
    }

    fn on_incumbent(&mut self, k: u32, waste: u64, penalty: u64) {
        self.first.on_incumbent(k, waste, penalty);
        self.second.on_incumbent(k, waste, penalty);
    }

    fn on_depth_finished(&mut self, k: u32, found: bool) {
        self.first.on_depth_finished(k, found);
        self.second.on_depth_finished(k, found);
    }

    fn on_exhausted(&mut self) {
        self.first.on_exhausted();
        self.second.on_exhausted();
    }
}

//! Search Statistics

use std::fmt;

use crate::{
    solvers::observer::{PruneReason, SearchObserver},
    tables::TableType,
};

/// Counters collected while solving an allocation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The single-table fast path seated the party.
    pub single_unit_hit: bool,

    /// Number of table types considered by the combination search.
    pub candidates: usize,

    /// Distinct table counts enumerated.
    pub depths_searched: u32,

    /// Total nodes visited.
    pub nodes_explored: u64,

    /// Branches cut because the remaining tables could not reach the party size.
    pub prunings_undercapacity: u64,

    /// Branches cut because the placed tables already required too many people.
    pub prunings_over_minimum: u64,

    /// Leaves whose counts did not sum to the target number of tables.
    pub prunings_count_mismatch: u64,

    /// Strictly better combinations installed.
    pub incumbents: u64,

    /// The search ran out of table counts without seating the party.
    pub exhausted: bool,
}

impl SearchStatistics {
    /// Total number of pruned branches
    pub fn prunings(&self) -> u64 {
        self.prunings_undercapacity
            .saturating_add(self.prunings_over_minimum)
            .saturating_add(self.prunings_count_mismatch)
    }
}

impl SearchObserver for SearchStatistics {
    fn on_single_unit_hit(&mut self, _table: &TableType, _waste: u64) {
        self.single_unit_hit = true;
    }

    fn on_search_started(&mut self, _k_min: u32, _k_max: u32, candidates: &[&TableType]) {
        self.candidates = candidates.len();
    }

    fn on_depth_started(&mut self, _k: u32) {
        self.depths_searched = self.depths_searched.saturating_add(1);
    }

    fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    fn on_pruned(&mut self, reason: PruneReason) {
        let counter = match reason {
            PruneReason::Undercapacity => &mut self.prunings_undercapacity,
            PruneReason::OverMinimum => &mut self.prunings_over_minimum,
            PruneReason::CountMismatch => &mut self.prunings_count_mismatch,
        };

        *counter = counter.saturating_add(1);
    }

    fn on_incumbent(&mut self, _k: u32, _waste: u64, _penalty: u64) {
        self.incumbents = self.incumbents.saturating_add(1);
    }

    fn on_exhausted(&mut self) {
        self.exhausted = true;
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.single_unit_hit {
            return write!(f, "Single table fast path");
        }

        write!(
            f,
            "Candidates: {}, depths: {}, nodes: {}, prunings: {} ({} undercapacity, {} over-minimum, {} count-mismatch), incumbents: {}",
            self.candidates,
            self.depths_searched,
            self.nodes_explored,
            self.prunings(),
            self.prunings_undercapacity,
            self.prunings_over_minimum,
            self.prunings_count_mismatch,
            self.incumbents,
        )?;

        if self.exhausted {
            write!(f, ", exhausted")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_reasons_are_counted_separately() {
        let mut stats = SearchStatistics::default();

        stats.on_pruned(PruneReason::Undercapacity);
        stats.on_pruned(PruneReason::Undercapacity);
        stats.on_pruned(PruneReason::OverMinimum);
        stats.on_pruned(PruneReason::CountMismatch);

        assert_eq!(stats.prunings_undercapacity, 2);
        assert_eq!(stats.prunings_over_minimum, 1);
        assert_eq!(stats.prunings_count_mismatch, 1);
        assert_eq!(stats.prunings(), 4);
    }

    #[test]
    fn display_reports_fast_path() {
        let stats = SearchStatistics {
            single_unit_hit: true,
            ..SearchStatistics::default()
        };

        assert_eq!(stats.to_string(), "Single table fast path");
    }

    #[test]
    fn display_reports_exhaustion() {
        let mut stats = SearchStatistics::default();

        stats.on_depth_started(3);
        stats.on_exhausted();

        assert!(stats.to_string().ends_with(", exhausted"));
        assert!(stats.to_string().contains("depths: 1"));
    }
}

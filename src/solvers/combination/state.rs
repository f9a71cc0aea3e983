//! Combination Search State

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{allocation::Allocation, tables::TableType};

/// Per-candidate table counts, in candidate order.
pub(crate) type Counts = SmallVec<[u32; 8]>;

/// A table type admitted to the combination search, with its fragmentation penalty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub(crate) table: &'a TableType,
    pub(crate) penalty: u64,
}

/// Combination under construction during the depth-first walk.
///
/// Counts are pushed on the way down and popped on the way back up, keeping
/// the running totals in step.
#[derive(Debug, Default)]
pub(crate) struct Partial {
    counts: Counts,
    min_total: u64,
    max_total: u64,
    penalty: u64,
}

impl Partial {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: SmallVec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub(crate) fn push(&mut self, candidate: &Candidate<'_>, count: u32) {
        let count_u64 = u64::from(count);

        self.counts.push(count);
        self.min_total += u64::from(candidate.table.min_capacity()) * count_u64;
        self.max_total += u64::from(candidate.table.max_capacity()) * count_u64;
        self.penalty += candidate.penalty * count_u64;
    }

    pub(crate) fn pop(&mut self, candidate: &Candidate<'_>) {
        let Some(count) = self.counts.pop() else {
            return;
        };

        let count_u64 = u64::from(count);

        self.min_total -= u64::from(candidate.table.min_capacity()) * count_u64;
        self.max_total -= u64::from(candidate.table.max_capacity()) * count_u64;
        self.penalty -= candidate.penalty * count_u64;
    }

    pub(crate) fn min_total(&self) -> u64 {
        self.min_total
    }

    pub(crate) fn max_total(&self) -> u64 {
        self.max_total
    }
}

/// Best combination found for one table count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Incumbent {
    pub(crate) waste: u64,
    pub(crate) penalty: u64,
    pub(crate) counts: Counts,
    pub(crate) min_total: u64,
    pub(crate) max_total: u64,
}

impl Incumbent {
    /// Ordering key within a fixed table count: least waste, then least penalty.
    pub(crate) fn key(&self) -> (u64, u64) {
        (self.waste, self.penalty)
    }

    pub(crate) fn into_allocation(
        self,
        party_size: u32,
        candidates: &[Candidate<'_>],
    ) -> Allocation {
        let counts: FxHashMap<String, u32> = candidates
            .iter()
            .zip(self.counts)
            .filter(|(_, count)| *count > 0)
            .map(|(candidate, count)| (candidate.table.name().to_string(), count))
            .collect();

        Allocation::from_totals(counts, party_size, self.min_total, self.max_total)
    }
}

/// Search state threaded through the enumeration of a single table count.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    best: Option<Incumbent>,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Install the partial as the incumbent if it is strictly better.
    ///
    /// The caller must only offer complete combinations that seat the party.
    pub(crate) fn offer(&mut self, partial: &Partial, party_size: u64) -> Option<&Incumbent> {
        let waste = partial.max_total.saturating_sub(party_size);
        let key = (waste, partial.penalty);

        if self.best.as_ref().is_some_and(|best| best.key() <= key) {
            return None;
        }

        self.best = Some(Incumbent {
            waste,
            penalty: partial.penalty,
            counts: partial.counts.clone(),
            min_total: partial.min_total,
            max_total: partial.max_total,
        });

        self.best.as_ref()
    }

    pub(crate) fn into_best(self) -> Option<Incumbent> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn push_and_pop_keep_totals_in_step() -> TestResult {
        let t4 = TableType::seats("T4", 3, 4, 6)?;
        let t6 = TableType::seats("T6", 5, 6, 2)?;
        let c4 = Candidate { table: &t4, penalty: 3 };
        let c6 = Candidate { table: &t6, penalty: 1 };

        let mut partial = Partial::with_capacity(2);
        partial.push(&c6, 2);
        partial.push(&c4, 1);

        assert_eq!(partial.min_total(), 13);
        assert_eq!(partial.max_total(), 16);
        assert_eq!(partial.penalty, 5);

        partial.pop(&c4);

        assert_eq!(partial.min_total(), 10);
        assert_eq!(partial.max_total(), 12);
        assert_eq!(partial.penalty, 2);
        assert_eq!(partial.counts.as_slice(), &[2]);

        Ok(())
    }

    #[test]
    fn offer_keeps_first_of_equal_keys() -> TestResult {
        let t4 = TableType::seats("T4", 3, 4, 6)?;
        let c4 = Candidate { table: &t4, penalty: 0 };

        let mut state = SearchState::new();
        let mut partial = Partial::with_capacity(1);
        partial.push(&c4, 2);

        assert!(state.offer(&partial, 7).is_some());
        assert!(state.offer(&partial, 7).is_none());

        let best = state.into_best();

        assert_eq!(best.map(|b| b.key()), Some((1, 0)));

        Ok(())
    }

    #[test]
    fn offer_replaces_on_lower_penalty() -> TestResult {
        let big = TableType::seats("Big", 1, 4, 2)?;
        let small = TableType::seats("Small", 1, 4, 2)?;

        let mut state = SearchState::new();

        let mut first = Partial::with_capacity(1);
        first.push(&Candidate { table: &big, penalty: 3 }, 2);
        state.offer(&first, 8);

        let mut second = Partial::with_capacity(1);
        second.push(&Candidate { table: &small, penalty: 1 }, 2);

        assert!(state.offer(&second, 8).is_some());
        assert_eq!(state.into_best().map(|b| b.penalty), Some(2));

        Ok(())
    }
}

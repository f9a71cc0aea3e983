//! Allocations

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::tables::TableType;

/// Tables chosen to seat a single party.
///
/// Allocations are produced from an inventory snapshot and are never written
/// back to it; committing the chosen tables is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    counts: FxHashMap<String, u32>,
    party_size: u32,
    tables_used: u32,
    min_total: u64,
    max_total: u64,
}

impl Allocation {
    /// Allocation of a single table of the given type.
    ///
    /// The caller must have checked that the table fits the party.
    pub(crate) fn single(table: &TableType, party_size: u32) -> Self {
        let mut counts = FxHashMap::default();
        counts.insert(table.name().to_string(), 1);

        Self {
            counts,
            party_size,
            tables_used: 1,
            min_total: u64::from(table.min_capacity()),
            max_total: u64::from(table.max_capacity()),
        }
    }

    /// Build an allocation from `(table type, count)` pairs.
    ///
    /// Pairs with a zero count are skipped and repeated types are merged.
    /// Returns `None` when no table is used or the combined seating range
    /// does not contain the party size.
    pub fn from_counts<'t>(
        party_size: u32,
        counts: impl IntoIterator<Item = (&'t TableType, u32)>,
    ) -> Option<Self> {
        let mut by_name: FxHashMap<String, u32> = FxHashMap::default();
        let mut tables_used = 0u32;
        let mut min_total = 0u64;
        let mut max_total = 0u64;

        for (table, count) in counts {
            if count == 0 {
                continue;
            }

            *by_name.entry(table.name().to_string()).or_default() += count;
            tables_used = tables_used.saturating_add(count);
            min_total += u64::from(table.min_capacity()) * u64::from(count);
            max_total += u64::from(table.max_capacity()) * u64::from(count);
        }

        let allocation = Self {
            counts: by_name,
            party_size,
            tables_used,
            min_total,
            max_total,
        };

        (tables_used > 0 && allocation.seats_party()).then_some(allocation)
    }

    /// Build an allocation from per-name counts and precomputed seating totals.
    ///
    /// The totals must seat the party.
    pub(crate) fn from_totals(
        counts: FxHashMap<String, u32>,
        party_size: u32,
        min_total: u64,
        max_total: u64,
    ) -> Self {
        let tables_used = counts
            .values()
            .fold(0u32, |sum, count| sum.saturating_add(*count));

        Self {
            counts,
            party_size,
            tables_used,
            min_total,
            max_total,
        }
    }

    /// Number of tables of the named type used, zero if none.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Table counts keyed by table type name
    pub fn counts(&self) -> &FxHashMap<String, u32> {
        &self.counts
    }

    /// Table counts ordered by table type name.
    pub fn sorted_counts(&self) -> SmallVec<[(&str, u32); 4]> {
        let mut counts: SmallVec<[(&str, u32); 4]> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();

        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
        counts
    }

    /// Party size this allocation was computed for
    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Total number of tables used
    pub fn tables_used(&self) -> u32 {
        self.tables_used
    }

    /// Sum of the minimum capacities of every table used
    pub fn min_total(&self) -> u64 {
        self.min_total
    }

    /// Sum of the maximum capacities of every table used
    pub fn max_total(&self) -> u64 {
        self.max_total
    }

    /// Unused seats: `max_total - party_size`.
    pub fn waste(&self) -> u64 {
        self.max_total - u64::from(self.party_size)
    }

    /// Whether the party fits within the combined seating bounds.
    pub fn seats_party(&self) -> bool {
        (self.min_total..=self.max_total).contains(&u64::from(self.party_size))
    }
}

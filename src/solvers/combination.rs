//! Combination Solver
//!
//! Branch-and-bound search over multi-table combinations, used when no single
//! table seats the party.
//!
//! Table counts `k` are tried in ascending order from
//! `ceil(party_size / largest_max_capacity)` up to the total number of free
//! candidate tables. For each `k` every count vector over the candidates that
//! sums to exactly `k` is enumerated depth-first, largest tables first, and the
//! combination with the least waste (then least fragmentation penalty) is kept.
//! The first `k` with any feasible combination wins, so fewer tables always
//! beat less waste.

use smallvec::SmallVec;

use crate::{
    allocation::Allocation,
    solvers::{
        AllocationRequest, Solver,
        combination::state::{Candidate, Incumbent, Partial, SearchState},
        observer::{PruneReason, SearchObserver},
    },
    tables::TableType,
};

pub(crate) mod state;

/// Immutable inputs shared by every node of one depth's enumeration.
#[derive(Debug)]
struct SearchContext<'c, 't> {
    candidates: &'c [Candidate<'t>],
    party_size: u64,
    largest_capacity: u64,
}

/// Solver that joins several tables to seat a party.
#[derive(Debug)]
pub struct CombinationSolver;

impl CombinationSolver {
    /// Table types the search may combine, largest maximum capacity first.
    ///
    /// Ties keep the caller's order.
    pub fn candidates<'a>(request: &AllocationRequest<'a>) -> SmallVec<[&'a TableType; 8]> {
        let junction_only = request.config().allow_mix_only_if_junction;

        let mut candidates: SmallVec<[&'a TableType; 8]> = request
            .available()
            .filter(|table| !junction_only || table.accepts_junction())
            .collect();

        candidates.sort_by(|a, b| b.max_capacity().cmp(&a.max_capacity()));
        candidates
    }

    /// Find the best combination of exactly `table_count` tables, if any seats the party.
    ///
    /// Unlike [`Solver::solve`] this does not try smaller counts first.
    pub fn solve_for_count(
        request: &AllocationRequest<'_>,
        table_count: u32,
        observer: &mut dyn SearchObserver,
    ) -> Option<Allocation> {
        let tables = Self::candidates(request);
        let candidates = with_penalties(&tables, request.config().preserve_small_tables);
        let ctx = SearchContext::new(&candidates, request.party_size())?;

        search_depth(&ctx, table_count, observer)
            .map(|best| best.into_allocation(request.party_size(), &candidates))
    }
}

impl Solver for CombinationSolver {
    fn solve(
        request: &AllocationRequest<'_>,
        observer: &mut dyn SearchObserver,
    ) -> Option<Allocation> {
        let party_size = request.party_size();
        let tables = Self::candidates(request);
        let candidates = with_penalties(&tables, request.config().preserve_small_tables);

        let Some(ctx) = SearchContext::new(&candidates, party_size) else {
            observer.on_exhausted();
            return None;
        };

        let total_capacity: u64 = tables.iter().map(|table| table.total_capacity()).sum();

        if total_capacity < ctx.party_size {
            observer.on_exhausted();
            return None;
        }

        let k_min =
            u32::try_from(ctx.party_size.div_ceil(ctx.largest_capacity)).unwrap_or(u32::MAX);
        let k_max = tables
            .iter()
            .fold(0u32, |sum, table| sum.saturating_add(table.available_quantity()));

        observer.on_search_started(k_min, k_max, &tables);

        for k in k_min..=k_max {
            observer.on_depth_started(k);

            let best = search_depth(&ctx, k, observer);

            observer.on_depth_finished(k, best.is_some());

            if let Some(best) = best {
                return Some(best.into_allocation(party_size, &candidates));
            }
        }

        observer.on_exhausted();

        None
    }
}

impl<'c, 't> SearchContext<'c, 't> {
    /// Returns `None` when there are no candidates to combine.
    fn new(candidates: &'c [Candidate<'t>], party_size: u32) -> Option<Self> {
        let largest_capacity = candidates
            .iter()
            .map(|candidate| u64::from(candidate.table.max_capacity()))
            .max()?;

        Some(Self {
            candidates,
            party_size: u64::from(party_size),
            largest_capacity,
        })
    }
}

/// Attach the fragmentation penalty to each candidate.
///
/// Each table costs `largest_max_capacity - max_capacity + 1` when small tables
/// are preserved, nothing otherwise.
fn with_penalties<'t>(
    tables: &[&'t TableType],
    preserve_small_tables: bool,
) -> SmallVec<[Candidate<'t>; 8]> {
    let largest = tables
        .iter()
        .map(|table| table.max_capacity())
        .max()
        .unwrap_or(0);

    tables
        .iter()
        .map(|&table| Candidate {
            table,
            penalty: if preserve_small_tables {
                u64::from(largest - table.max_capacity()) + 1
            } else {
                0
            },
        })
        .collect()
}

/// Enumerate every combination of exactly `k` tables and return the best one.
fn search_depth(
    ctx: &SearchContext<'_, '_>,
    k: u32,
    observer: &mut dyn SearchObserver,
) -> Option<Incumbent> {
    let mut state = SearchState::new();
    let mut partial = Partial::with_capacity(ctx.candidates.len());

    descend(ctx, 0, k, k, &mut partial, &mut state, observer);

    state.into_best()
}

fn descend(
    ctx: &SearchContext<'_, '_>,
    depth: usize,
    k: u32,
    remaining: u32,
    partial: &mut Partial,
    state: &mut SearchState,
    observer: &mut dyn SearchObserver,
) {
    observer.on_node_explored();

    // Even the largest table in every remaining slot cannot reach the party size.
    if partial.max_total() + u64::from(remaining) * ctx.largest_capacity < ctx.party_size {
        observer.on_pruned(PruneReason::Undercapacity);
        return;
    }

    // Minimums only grow further down.
    if partial.min_total() > ctx.party_size {
        observer.on_pruned(PruneReason::OverMinimum);
        return;
    }

    let Some(candidate) = ctx.candidates.get(depth) else {
        if remaining != 0 {
            observer.on_pruned(PruneReason::CountMismatch);
            return;
        }

        if let Some(best) = state.offer(partial, ctx.party_size) {
            observer.on_incumbent(k, best.waste, best.penalty);
        }

        return;
    };

    let take_max = candidate.table.available_quantity().min(remaining);

    for count in (0..=take_max).rev() {
        partial.push(candidate, count);
        descend(ctx, depth + 1, k, remaining - count, partial, state, observer);
        partial.pop(candidate);
    }
}

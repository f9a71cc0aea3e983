//! Single Table Solver
//!
//! Fast path: seat the whole party at one table when any free table type
//! covers the party size. Junction settings play no part here.

use crate::{
    allocation::Allocation,
    solvers::{AllocationRequest, Solver, observer::SearchObserver},
    tables::TableType,
};

/// Picks the tightest single table for a party.
#[derive(Debug)]
pub struct SingleTableSolver;

impl SingleTableSolver {
    /// Return the table type that seats the party with the least unused seats,
    /// preferring the smaller table on ties and then the earliest in input order.
    pub fn best_fit<'a>(
        party_size: u32,
        tables: impl IntoIterator<Item = &'a TableType>,
    ) -> Option<&'a TableType> {
        tables
            .into_iter()
            .filter(|table| table.is_available() && table.fits(party_size))
            .min_by_key(|table| (table.max_capacity() - party_size, table.max_capacity()))
    }
}

impl Solver for SingleTableSolver {
    fn solve(
        request: &AllocationRequest<'_>,
        observer: &mut dyn SearchObserver,
    ) -> Option<Allocation> {
        let party_size = request.party_size();
        let table = Self::best_fit(party_size, request.table_types())?;
        let allocation = Allocation::single(table, party_size);

        observer.on_single_unit_hit(table, allocation.waste());

        Some(allocation)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{config::AllocatorConfig, solvers::observer::NoopObserver};

    use super::*;

    fn tables() -> Result<Vec<TableType>, crate::tables::TableTypeError> {
        Ok(vec![
            TableType::seats("T2", 1, 2, 8)?,
            TableType::seats("T4", 3, 4, 6)?,
            TableType::seats("T6", 5, 6, 2)?,
        ])
    }

    #[test]
    fn picks_least_waste() -> TestResult {
        let tables = tables()?;

        let best = SingleTableSolver::best_fit(4, &tables);

        assert_eq!(best.map(TableType::name), Some("T4"));

        Ok(())
    }

    #[test]
    fn overlapping_ranges_pick_tightest() -> TestResult {
        let tables = [
            TableType::seats("Banquet", 2, 10, 1)?,
            TableType::seats("Booth", 2, 5, 1)?,
            TableType::seats("Square", 3, 4, 1)?,
        ];

        let best = SingleTableSolver::best_fit(3, &tables);

        assert_eq!(best.map(TableType::name), Some("Square"));

        Ok(())
    }

    #[test]
    fn full_ties_keep_input_order() -> TestResult {
        let tables = [
            TableType::seats("Window", 1, 4, 1)?,
            TableType::seats("Patio", 1, 4, 1)?,
        ];

        let best = SingleTableSolver::best_fit(4, &tables);

        assert_eq!(best.map(TableType::name), Some("Window"));

        Ok(())
    }

    #[test]
    fn ignores_unavailable_and_non_covering_types() -> TestResult {
        let tables = [
            TableType::seats("T4", 3, 4, 0)?,
            TableType::seats("T6", 5, 6, 2)?,
        ];

        assert!(SingleTableSolver::best_fit(4, &tables).is_none());
        assert_eq!(
            SingleTableSolver::best_fit(5, &tables).map(TableType::name),
            Some("T6")
        );

        Ok(())
    }

    #[test]
    fn non_junction_tables_are_eligible() -> TestResult {
        let tables = [TableType::new("Chef", 6, 10, 1, false)?];
        let config = AllocatorConfig::default();
        let request = AllocationRequest::new(8, &tables, &config)?;

        let allocation = SingleTableSolver::solve(&request, &mut NoopObserver);

        assert_eq!(allocation.map(|a| a.count("Chef")), Some(1));

        Ok(())
    }

    #[test]
    fn below_minimum_capacity_does_not_fit() -> TestResult {
        let tables = [TableType::seats("T6", 5, 6, 2)?];
        let config = AllocatorConfig::default();
        let request = AllocationRequest::new(2, &tables, &config)?;

        assert!(SingleTableSolver::solve(&request, &mut NoopObserver).is_none());

        Ok(())
    }
}

//! Tablefit prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    allocation::Allocation,
    allocator::{AllocationError, Allocator, allocate},
    config::AllocatorConfig,
    fixtures::{Fixture, FixtureError, Inventory},
    report::{AllocationReport, ReportError},
    solvers::{
        AllocationRequest, Solver,
        combination::CombinationSolver,
        observer::{NoopObserver, PruneReason, SearchObserver, TracingObserver},
        single::SingleTableSolver,
        stats::SearchStatistics,
    },
    tables::{TableType, TableTypeError},
};

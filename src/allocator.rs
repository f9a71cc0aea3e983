//! Allocator
//!
//! Entry point for seating a party: validate the request, try a single table,
//! then fall back to joining tables.

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    allocation::Allocation,
    config::AllocatorConfig,
    solvers::{
        AllocationRequest, Solver,
        combination::CombinationSolver,
        observer::{CompositeObserver, NoopObserver, SearchObserver, TracingObserver},
        single::SingleTableSolver,
    },
    tables::TableType,
};

/// Errors for requests the allocator refuses to search.
///
/// Running out of tables is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Party size must be positive.
    #[error("Party size must be positive, got {0}")]
    InvalidPartySize(u32),

    /// Two table types in the snapshot share a name.
    #[error("Duplicate table type: {0}")]
    DuplicateTableType(String),
}

/// Allocator holding a configuration across requests
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator {
    config: AllocatorConfig,
}

impl Allocator {
    /// Create an allocator with the given configuration.
    pub const fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Configuration used for every request
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Find the best tables for the party.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocationError`] if the request is invalid.
    pub fn allocate(
        &self,
        party_size: u32,
        table_types: &[TableType],
    ) -> Result<Option<Allocation>, AllocationError> {
        self.allocate_with_observer(party_size, table_types, &mut NoopObserver)
    }

    /// Find the best tables for the party, reporting search progress to `observer`.
    ///
    /// Progress is also logged through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocationError`] if the request is invalid; the observer
    /// receives no callbacks in that case.
    #[tracing::instrument(
        name = "allocator.allocate",
        skip(self, table_types, observer),
        fields(table_types = table_types.len())
    )]
    pub fn allocate_with_observer(
        &self,
        party_size: u32,
        table_types: &[TableType],
        observer: &mut dyn SearchObserver,
    ) -> Result<Option<Allocation>, AllocationError> {
        let request = AllocationRequest::new(party_size, table_types, &self.config)?;

        let mut tracing_observer = TracingObserver;
        let mut observer = CompositeObserver::new(observer, &mut tracing_observer);

        if let Some(allocation) = SingleTableSolver::solve(&request, &mut observer) {
            info!(tables_used = 1, waste = allocation.waste(), "seated at a single table");

            return Ok(Some(allocation));
        }

        debug!("no single table fits, joining tables");

        let allocation = CombinationSolver::solve(&request, &mut observer);

        match &allocation {
            Some(allocation) => info!(
                tables_used = allocation.tables_used(),
                waste = allocation.waste(),
                "seated at joined tables"
            ),
            None => info!("no capacity"),
        }

        Ok(allocation)
    }
}

/// Find the best tables for a party using the given configuration.
///
/// # Errors
///
/// Returns an [`AllocationError`] if the request is invalid.
pub fn allocate(
    party_size: u32,
    table_types: &[TableType],
    config: &AllocatorConfig,
) -> Result<Option<Allocation>, AllocationError> {
    Allocator::new(*config).allocate(party_size, table_types)
}

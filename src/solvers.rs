//! Solvers for table allocation

use rustc_hash::FxHashSet;

use crate::{
    allocation::Allocation, allocator::AllocationError, config::AllocatorConfig,
    solvers::observer::SearchObserver, tables::TableType,
};

pub mod combination;
pub mod observer;
pub mod single;
pub mod stats;

/// A validated request to seat one party from an inventory snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AllocationRequest<'a> {
    party_size: u32,
    table_types: &'a [TableType],
    config: &'a AllocatorConfig,
}

impl<'a> AllocationRequest<'a> {
    /// Validate and create a new request.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::InvalidPartySize`] for an empty party and
    /// [`AllocationError::DuplicateTableType`] if two table types share a name.
    pub fn new(
        party_size: u32,
        table_types: &'a [TableType],
        config: &'a AllocatorConfig,
    ) -> Result<Self, AllocationError> {
        if party_size == 0 {
            return Err(AllocationError::InvalidPartySize(party_size));
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for table in table_types {
            if !seen.insert(table.name()) {
                return Err(AllocationError::DuplicateTableType(
                    table.name().to_string(),
                ));
            }
        }

        Ok(Self {
            party_size,
            table_types,
            config,
        })
    }

    /// Number of people to seat
    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Inventory snapshot, in caller order
    pub fn table_types(&self) -> &'a [TableType] {
        self.table_types
    }

    /// Allocator configuration
    pub fn config(&self) -> &'a AllocatorConfig {
        self.config
    }

    /// Table types with at least one free table, in caller order.
    pub fn available(&self) -> impl Iterator<Item = &'a TableType> + 'a {
        self.table_types.iter().filter(|table| table.is_available())
    }
}

/// Trait for strategies that pick tables for a request
pub trait Solver {
    /// Find the best allocation for the request, or `None` if the strategy
    /// cannot seat the party.
    fn solve(
        request: &AllocationRequest<'_>,
        observer: &mut dyn SearchObserver,
    ) -> Option<Allocation>;
}

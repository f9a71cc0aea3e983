//! Tablefit
//!
//! Tablefit seats a party at the fewest tables possible from a typed inventory
//! snapshot, then minimises empty seats, then avoids breaking up large tables.

pub mod allocation;
pub mod allocator;
pub mod config;
pub mod fixtures;
pub mod prelude;
pub mod report;
pub mod solvers;
pub mod tables;
pub mod utils;

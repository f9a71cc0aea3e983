//! Allocator Configuration

use serde::Deserialize;

/// Tuning flags for the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllocatorConfig {
    /// Only join tables whose type accepts junctions.
    ///
    /// When `false`, every available table type may be combined.
    pub allow_mix_only_if_junction: bool,

    /// Penalise combinations that use many small tables instead of fewer large ones.
    pub preserve_small_tables: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AllocatorConfig {
    /// Default configuration: junction-only mixing with the fragmentation penalty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_mix_only_if_junction: true,
            preserve_small_tables: true,
        }
    }

    /// Configuration with every flag disabled
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allow_mix_only_if_junction: false,
            preserve_small_tables: false,
        }
    }

    /// Set whether only junction-capable tables may be combined
    #[must_use]
    pub const fn with_junction_only(mut self, junction_only: bool) -> Self {
        self.allow_mix_only_if_junction = junction_only;
        self
    }

    /// Set whether the fragmentation penalty is applied
    #[must_use]
    pub const fn with_preserve_small_tables(mut self, preserve: bool) -> Self {
        self.preserve_small_tables = preserve;
        self
    }
}

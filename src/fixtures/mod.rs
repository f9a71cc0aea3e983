//! Fixtures
//!
//! Inventory snapshots stored as YAML under `<base>/inventory/<name>.yml`:
//!
//! ```yaml
//! config:
//!   preserve_small_tables: false
//! tables:
//!   - name: T2
//!     min_capacity: 1
//!     max_capacity: 2
//!     available_quantity: 8
//! ```

use std::{fs, io, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::AllocatorConfig,
    tables::{TableType, TableTypeError},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The named snapshot does not exist.
    #[error("Inventory fixture not found: {0}")]
    NotFound(String),

    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A table type in the fixture is invalid
    #[error("Invalid table type: {0}")]
    TableType(#[from] TableTypeError),

    /// The fixture lists no table types.
    #[error("Inventory fixture {0} has no tables")]
    NoTables(String),
}

/// Table type as written in YAML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableTypeFixture {
    /// Table type name
    pub name: String,

    /// Smallest party a single table may seat
    pub min_capacity: u32,

    /// Largest party a single table may seat
    pub max_capacity: u32,

    /// Free tables; signed so negative counts are reported rather than rejected by the parser
    pub available_quantity: i64,

    /// Whether the table may be joined with others
    #[serde(default = "accepts_junction_default")]
    pub accepts_junction: bool,
}

fn accepts_junction_default() -> bool {
    true
}

impl TryFrom<TableTypeFixture> for TableType {
    type Error = TableTypeError;

    fn try_from(fixture: TableTypeFixture) -> Result<Self, Self::Error> {
        TableType::with_signed_quantity(
            fixture.name,
            fixture.min_capacity,
            fixture.max_capacity,
            fixture.available_quantity,
            fixture.accepts_junction,
        )
    }
}

/// Inventory document as written in YAML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryFixture {
    /// Optional allocator configuration
    #[serde(default)]
    pub config: AllocatorConfig,

    /// Table types in the snapshot
    pub tables: Vec<TableTypeFixture>,
}

/// A loaded and validated inventory snapshot.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Snapshot name
    pub name: String,

    /// Allocator configuration bundled with the snapshot
    pub config: AllocatorConfig,

    /// Validated table types, in file order
    pub tables: Vec<TableType>,
}

impl Inventory {
    /// Parse and validate an inventory document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, lists no tables or any table
    /// type is invalid.
    pub fn from_yaml(name: &str, contents: &str) -> Result<Self, FixtureError> {
        let fixture: InventoryFixture = serde_norway::from_str(contents)?;

        if fixture.tables.is_empty() {
            return Err(FixtureError::NoTables(name.to_string()));
        }

        let tables = fixture
            .tables
            .into_iter()
            .map(TableType::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            config: fixture.config,
            tables,
        })
    }
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of the named inventory file.
    pub fn inventory_path(&self, name: &str) -> PathBuf {
        self.base_path.join("inventory").join(format!("{name}.yml"))
    }

    /// Load the named inventory snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be read or parsed, or
    /// contains an invalid table type.
    pub fn load(&self, name: &str) -> Result<Inventory, FixtureError> {
        let file_path = self.inventory_path(name);

        let contents = fs::read_to_string(&file_path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                FixtureError::NotFound(name.to_string())
            } else {
                FixtureError::Io(err)
            }
        })?;

        Inventory::from_yaml(name, &contents)
    }
}

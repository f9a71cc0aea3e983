//! Table Types

use thiserror::Error;

/// Errors raised while constructing a [`TableType`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableTypeError {
    /// Table types must be named.
    #[error("Table type name must not be empty")]
    EmptyName,

    /// The minimum capacity is greater than the maximum capacity.
    #[error("Table type {name} has minimum capacity {min} greater than maximum capacity {max}")]
    InvalidCapacityRange {
        /// Table type name
        name: String,

        /// Minimum party size
        min: u32,

        /// Maximum party size
        max: u32,
    },

    /// A table that cannot seat anyone.
    #[error("Table type {0} has a maximum capacity of zero")]
    ZeroCapacity(String),

    /// A negative quantity supplied from untyped input.
    #[error("Table type {name} has negative available quantity {quantity}")]
    NegativeQuantity {
        /// Table type name
        name: String,

        /// Quantity as supplied
        quantity: i64,
    },

    /// A quantity too large to be represented.
    #[error("Table type {name} has available quantity {quantity} out of range")]
    QuantityOutOfRange {
        /// Table type name
        name: String,

        /// Quantity as supplied
        quantity: i64,
    },
}

/// A class of interchangeable tables sharing capacity bounds and availability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableType {
    name: String,
    min_capacity: u32,
    max_capacity: u32,
    available_quantity: u32,
    accepts_junction: bool,
}

impl TableType {
    /// Create a new table type.
    ///
    /// # Errors
    ///
    /// Returns a [`TableTypeError`] if the name is empty, the capacity range is
    /// inverted or the maximum capacity is zero.
    pub fn new(
        name: impl Into<String>,
        min_capacity: u32,
        max_capacity: u32,
        available_quantity: u32,
        accepts_junction: bool,
    ) -> Result<Self, TableTypeError> {
        let name = name.into();

        if name.is_empty() {
            return Err(TableTypeError::EmptyName);
        }

        if min_capacity > max_capacity {
            return Err(TableTypeError::InvalidCapacityRange {
                name,
                min: min_capacity,
                max: max_capacity,
            });
        }

        if max_capacity == 0 {
            return Err(TableTypeError::ZeroCapacity(name));
        }

        Ok(Self {
            name,
            min_capacity,
            max_capacity,
            available_quantity,
            accepts_junction,
        })
    }

    /// Create a table type that can be joined with others.
    ///
    /// # Errors
    ///
    /// See [`TableType::new`].
    pub fn seats(
        name: impl Into<String>,
        min_capacity: u32,
        max_capacity: u32,
        available_quantity: u32,
    ) -> Result<Self, TableTypeError> {
        Self::new(name, min_capacity, max_capacity, available_quantity, true)
    }

    /// Create a table type from a signed quantity, as read from untyped sources.
    ///
    /// # Errors
    ///
    /// Returns [`TableTypeError::NegativeQuantity`] for negative quantities, in
    /// addition to the errors of [`TableType::new`].
    pub fn with_signed_quantity(
        name: impl Into<String>,
        min_capacity: u32,
        max_capacity: u32,
        available_quantity: i64,
        accepts_junction: bool,
    ) -> Result<Self, TableTypeError> {
        let name = name.into();

        if available_quantity < 0 {
            return Err(TableTypeError::NegativeQuantity {
                name,
                quantity: available_quantity,
            });
        }

        let Ok(quantity) = u32::try_from(available_quantity) else {
            return Err(TableTypeError::QuantityOutOfRange {
                name,
                quantity: available_quantity,
            });
        };

        Self::new(name, min_capacity, max_capacity, quantity, accepts_junction)
    }

    /// Return a copy with a different junction setting.
    #[must_use]
    pub fn with_junction(mut self, accepts_junction: bool) -> Self {
        self.accepts_junction = accepts_junction;
        self
    }

    /// Return a copy with a different available quantity.
    #[must_use]
    pub fn with_available_quantity(mut self, available_quantity: u32) -> Self {
        self.available_quantity = available_quantity;
        self
    }

    /// Unique name of the table type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Smallest party a single table of this type may seat
    pub fn min_capacity(&self) -> u32 {
        self.min_capacity
    }

    /// Largest party a single table of this type may seat
    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Number of free tables of this type
    pub fn available_quantity(&self) -> u32 {
        self.available_quantity
    }

    /// Whether tables of this type may be joined with other tables
    pub fn accepts_junction(&self) -> bool {
        self.accepts_junction
    }

    /// Whether at least one table of this type is free.
    pub fn is_available(&self) -> bool {
        self.available_quantity > 0
    }

    /// Whether a single table of this type can seat `party_size` people.
    pub fn fits(&self, party_size: u32) -> bool {
        (self.min_capacity..=self.max_capacity).contains(&party_size)
    }

    /// Combined maximum seating of every free table of this type.
    pub fn total_capacity(&self) -> u64 {
        u64::from(self.max_capacity) * u64::from(self.available_quantity)
    }
}

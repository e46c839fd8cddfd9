//! Error types for inventory_tracker

use std::fmt;
use thiserror::Error;

/// Key used for a lookup that came back empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(i64),
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id {}", id),
            Lookup::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Unified error type for inventory_tracker operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product with this name is already stored
    #[error("A product named '{0}' already exists")]
    DuplicateKey(String),
    /// No product matches the lookup key
    #[error("No product with {0}")]
    NotFound(Lookup),
    /// Product name is blank
    #[error("Missing product name: '{0}'")]
    MalformedName(String),
    /// Price text is not a currency amount
    #[error("Malformed price: '{0}'")]
    MalformedPrice(String),
    /// Quantity text is not a non-negative integer
    #[error("Malformed quantity: '{0}'")]
    MalformedQuantity(String),
    /// Date text is not MM/DD/YYYY
    #[error("Malformed date: '{0}'")]
    MalformedDate(String),
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Reading or writing CSV failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// File or terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// True for name, price, quantity and date parse failures.
    ///
    /// These are the errors a user can fix by re-typing the value.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            InventoryError::MalformedName(_)
                | InventoryError::MalformedPrice(_)
                | InventoryError::MalformedQuantity(_)
                | InventoryError::MalformedDate(_)
        )
    }
}

/// Result alias for inventory_tracker operations
pub type Result<T> = std::result::Result<T, InventoryError>;

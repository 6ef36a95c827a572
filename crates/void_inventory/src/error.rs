//! Error types for the inventory system

use thiserror::Error;

/// Inventory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Insert attempted while every slot is taken
    #[error("Backpack is full ({capacity} items)")]
    CollectionFull {
        /// Capacity of the backpack
        capacity: usize,
    },

    /// No item carries the requested name
    #[error("Item '{0}' not found")]
    NotFound(String),

    /// Search attempted on a backpack with no items
    #[error("Backpack is empty")]
    EmptyCollection,

    /// Binary search attempted while the backpack is not sorted by name
    #[error("Backpack must be sorted by name before a binary search")]
    PreconditionFailed,

    /// Malformed field, out-of-range priority or unknown selector code
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InventoryError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

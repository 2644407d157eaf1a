//! Inventory error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level inventory error.
///
/// Every variant is recoverable: callers report it and carry on. I/O concerns
/// (writing the data file) live in the infra crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with this id is already stored.
    #[error("product id already exists: {0}")]
    DuplicateProductId(ProductId),

    /// A sell asked for more units than are in stock.
    #[error("not enough stock for product {product_id} (requested: {requested}, available: {available})")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// No product with this id is stored.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Persisted data could not be turned back into products.
    #[error("invalid product data: {0}")]
    InvalidProductData(String),

    /// A value failed validation (e.g. blank name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would be violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl InventoryError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidProductData(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(product_id: impl Into<ProductId>) -> Self {
        Self::ProductNotFound(product_id.into())
    }
}

use std::path::PathBuf;

use thiserror::Error;

use shelfwise_core::InventoryError;

/// Failure while moving an inventory to or from disk.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write inventory file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl PersistenceError {
    /// The domain error underneath, if this is not an I/O failure.
    pub fn as_inventory_error(&self) -> Option<&InventoryError> {
        match self {
            PersistenceError::Inventory(err) => Some(err),
            PersistenceError::Write { .. } => None,
        }
    }
}

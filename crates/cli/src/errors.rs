use shelfwise_core::InventoryError;
use shelfwise_infra::PersistenceError;

/// Stable short code for a failed command, used as a log field.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(inventory) = err.downcast_ref::<InventoryError>() {
        return inventory_error_code(inventory);
    }
    match err.downcast_ref::<PersistenceError>() {
        Some(PersistenceError::Write { .. }) => "write_failed",
        Some(PersistenceError::Inventory(inner)) => inventory_error_code(inner),
        None => "invalid_input",
    }
}

fn inventory_error_code(err: &InventoryError) -> &'static str {
    match err {
        InventoryError::DuplicateProductId(_) => "duplicate_product_id",
        InventoryError::OutOfStock { .. } => "out_of_stock",
        InventoryError::ProductNotFound(_) => "product_not_found",
        InventoryError::InvalidProductData(_) => "invalid_product_data",
        InventoryError::Validation(_) => "validation_error",
        InventoryError::InvariantViolation(_) => "invariant_violation",
    }
}

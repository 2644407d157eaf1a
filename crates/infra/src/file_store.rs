//! Whole-file JSON persistence.

use std::path::{Path, PathBuf};

use shelfwise_core::InventoryError;
use shelfwise_inventory::Inventory;

use crate::codec;
use crate::error::PersistenceError;

/// Saves and loads an inventory as a single JSON file.
///
/// Each `save` overwrites the file in one write; each `load` reads it in
/// full. There is no locking, so concurrent writers will clobber each other.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let bytes = codec::encode(inventory)?;
        std::fs::write(&self.path, bytes).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            path = %self.path.display(),
            products = inventory.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Read and decode the file.
    ///
    /// An unreadable file is reported as invalid product data, the same as
    /// unparseable contents.
    pub fn load(&self) -> Result<Inventory, PersistenceError> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            InventoryError::invalid_data(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))
        })?;

        let inventory = codec::decode(&bytes).inspect_err(|err| {
            tracing::warn!(path = %self.path.display(), "rejected inventory file: {err}");
        })?;

        tracing::info!(
            path = %self.path.display(),
            products = inventory.len(),
            "inventory loaded"
        );
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use shelfwise_products::Product;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn save_then_load_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let inventory = Inventory::from_products(vec![
            Product::electronics("E001", "Phone", money("999.99"), 10, 2, "Apple").unwrap(),
            Product::grocery(
                "G001",
                "Milk",
                money("3.5"),
                20,
                NaiveDate::from_ymd_opt(2031, 3, 1).unwrap(),
            )
            .unwrap(),
        ])
        .unwrap();

        store.save(&inventory).unwrap();
        assert_eq!(store.load().unwrap(), inventory);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let mut inventory = Inventory::new();
        inventory
            .add(Product::clothing("C001", "Shirt", money("29.99"), 15, "M", "Cotton").unwrap())
            .unwrap();
        store.save(&inventory).unwrap();

        inventory.remove("C001");
        store.save(&inventory).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_invalid_product_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        let err = store.load().unwrap_err();
        assert!(matches!(
            err.as_inventory_error(),
            Some(InventoryError::InvalidProductData(msg)) if msg.starts_with("failed to read")
        ));
    }

    #[test]
    fn corrupt_file_is_invalid_product_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, b"[{\"type\": \"Spaceship\"}]").unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(
            err.as_inventory_error(),
            Some(InventoryError::InvalidProductData(_))
        ));
    }

    #[test]
    fn unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("inventory.json"));

        let err = store.save(&Inventory::new()).unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
    }
}

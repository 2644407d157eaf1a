use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use shelfwise_core::{Entity, InventoryError, InventoryResult, ProductId};
use shelfwise_products::{Product, ProductType};

/// Aggregate: the product catalog with its stock levels.
///
/// Owns every product exclusively, keyed by id. Iteration follows id order,
/// which keeps listings stable but is not something callers should rely on.
///
/// Mutators take `&mut self` and there is no internal locking. Sharing one
/// inventory between callers needs external synchronization (e.g. a single
/// `Mutex<Inventory>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: BTreeMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from products, failing on the first repeated id.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> InventoryResult<Self> {
        let mut inventory = Self::new();
        for product in products {
            inventory.add(product)?;
        }
        Ok(inventory)
    }

    /// Take ownership of `product`.
    ///
    /// A product already stored under the same id is left untouched.
    pub fn add(&mut self, product: Product) -> InventoryResult<()> {
        if self.products.contains_key(product.id()) {
            return Err(InventoryError::DuplicateProductId(product.id().clone()));
        }
        self.products.insert(product.id().clone(), product);
        Ok(())
    }

    /// Remove a product if present; absent ids are not an error.
    pub fn remove(&mut self, product_id: &str) -> Option<Product> {
        self.products.remove(product_id)
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive substring match on product names.
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive exact match on the variant name.
    ///
    /// An unrecognised type name simply matches nothing.
    pub fn search_by_type(&self, type_name: &str) -> Vec<&Product> {
        let Ok(wanted) = type_name.parse::<ProductType>() else {
            return Vec::new();
        };
        self.products
            .values()
            .filter(|p| p.product_type() == wanted)
            .collect()
    }

    pub fn list_all(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    pub fn sell(&mut self, product_id: &str, quantity: u32) -> InventoryResult<()> {
        self.product_mut(product_id)?.sell(quantity)
    }

    pub fn restock(&mut self, product_id: &str, quantity: u32) -> InventoryResult<()> {
        self.product_mut(product_id)?.restock(quantity)
    }

    /// Sum of `price * quantity_in_stock` over every product.
    ///
    /// Fails with `InvariantViolation` if the sum leaves `Decimal`'s range.
    pub fn total_value(&self) -> InventoryResult<Decimal> {
        self.products.values().try_fold(Decimal::ZERO, |total, product| {
            total.checked_add(product.total_value()?).ok_or_else(|| {
                InventoryError::invariant("total inventory value overflows a decimal")
            })
        })
    }

    /// Drop groceries that expired before today's local date.
    pub fn remove_expired(&mut self) -> Vec<Product> {
        self.remove_expired_as_of(Local::now().date_naive())
    }

    /// Drop groceries with an expiry date strictly before `today`.
    ///
    /// Every product is judged against the same `today`. Returns the removed
    /// products in id order.
    pub fn remove_expired_as_of(&mut self, today: NaiveDate) -> Vec<Product> {
        let expired: Vec<ProductId> = self
            .products
            .values()
            .filter(|p| p.is_expired(today))
            .map(|p| p.id().clone())
            .collect();

        expired
            .iter()
            .filter_map(|id| self.products.remove(id))
            .collect()
    }

    fn product_mut(&mut self, product_id: &str) -> InventoryResult<&mut Product> {
        self.products
            .get_mut(product_id)
            .ok_or_else(|| InventoryError::not_found(product_id))
    }
}

//! Persisted record shapes for products.
//!
//! A record is the flat, self-describing form of a [`Product`]: every field plus
//! a `type` discriminator. Each record struct rejects unknown fields, so the
//! field set on load is exactly the variant's.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shelfwise_core::{Entity, InventoryError, InventoryResult};

use crate::product::{MAX_PRICE_DIGITS, Product, ProductKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectronicsRecord {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: u32,
    pub warranty_years: u32,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroceryRecord {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: u32,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClothingRecord {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity_in_stock: u32,
    pub size: String,
    pub material: String,
}

/// One persisted product, tagged with its variant name under `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ProductRecord {
    Electronics(ElectronicsRecord),
    Grocery(GroceryRecord),
    Clothing(ClothingRecord),
}

impl Product {
    /// Flatten into the persisted record shape.
    pub fn to_record(&self) -> InventoryResult<ProductRecord> {
        let product_id = self.id().to_string();
        let name = self.name().to_string();
        let price = price_to_number(self.price())?;
        let quantity_in_stock = self.quantity_in_stock();

        let record = match self.kind() {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => ProductRecord::Electronics(ElectronicsRecord {
                product_id,
                name,
                price,
                quantity_in_stock,
                warranty_years: *warranty_years,
                brand: brand.clone(),
            }),
            ProductKind::Grocery { expiry_date } => ProductRecord::Grocery(GroceryRecord {
                product_id,
                name,
                price,
                quantity_in_stock,
                expiry_date: *expiry_date,
            }),
            ProductKind::Clothing { size, material } => ProductRecord::Clothing(ClothingRecord {
                product_id,
                name,
                price,
                quantity_in_stock,
                size: size.clone(),
                material: material.clone(),
            }),
        };
        Ok(record)
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = InventoryError;

    /// Rebuild a product; any rejected field surfaces as `InvalidProductData`.
    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product = match record {
            ProductRecord::Electronics(r) => Product::electronics(
                r.product_id,
                r.name,
                price_from_number(r.price)?,
                r.quantity_in_stock,
                r.warranty_years,
                r.brand,
            ),
            ProductRecord::Grocery(r) => Product::grocery(
                r.product_id,
                r.name,
                price_from_number(r.price)?,
                r.quantity_in_stock,
                r.expiry_date,
            ),
            ProductRecord::Clothing(r) => Product::clothing(
                r.product_id,
                r.name,
                price_from_number(r.price)?,
                r.quantity_in_stock,
                r.size,
                r.material,
            ),
        };

        product.map_err(|e| InventoryError::invalid_data(e.to_string()))
    }
}

/// Nearest `f64` to the price. A price within `MAX_PRICE_DIGITS` is
/// recovered exactly by [`price_from_number`].
fn price_to_number(price: Decimal) -> InventoryResult<f64> {
    let text = price.to_string();
    text.parse::<f64>()
        .map_err(|e| InventoryError::invalid_data(format!("price {text} is not a number: {e}")))
}

/// Round to `MAX_PRICE_DIGITS` significant digits, the precision an `f64`
/// holds faithfully, so `999.99` stays `999.99` instead of picking up binary
/// noise.
fn price_from_number(price: f64) -> InventoryResult<Decimal> {
    if !price.is_finite() {
        return Err(InventoryError::invalid_data(format!("price is not finite: {price}")));
    }

    let precision = (MAX_PRICE_DIGITS - 1) as usize;
    let scientific = format!("{price:.precision$e}");
    let (digits, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits = digits.trim_end_matches('0').trim_end_matches('.');

    Decimal::from_scientific(&format!("{digits}e{exponent}"))
        .map(|d| d.normalize())
        .map_err(|e| InventoryError::invalid_data(format!("price {price} is out of range: {e}")))
}

use core::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shelfwise_core::{Entity, InventoryError, InventoryResult, ProductId};

/// Discriminator of the closed product variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Electronics,
        ProductType::Grocery,
        ProductType::Clothing,
    ];

    /// Variant name as written into persisted records.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Electronics => "Electronics",
            ProductType::Grocery => "Grocery",
            ProductType::Clothing => "Clothing",
        }
    }

    /// Exact (case-sensitive) match against a persisted discriminator.
    pub fn from_discriminator(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, for user-facing input and type searches.
impl FromStr for ProductType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InventoryError::validation(format!("unknown product type: {wanted}")))
    }
}

/// Variant-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductKind {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Electronics { .. } => ProductType::Electronics,
            ProductKind::Grocery { .. } => ProductType::Grocery,
            ProductKind::Clothing { .. } => ProductType::Clothing,
        }
    }
}

/// Most significant digits a price may carry.
///
/// Prices are written to disk as JSON numbers, and an `f64` reproduces any
/// decimal of up to 15 significant digits. The same cap keeps
/// `price * u32::MAX` inside `Decimal`'s range.
pub const MAX_PRICE_DIGITS: u32 = 15;

/// A stocked product.
///
/// Common fields are shared by every variant; `kind` carries the rest.
/// `quantity_in_stock` is unsigned and `sell` refuses to go below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    quantity_in_stock: u32,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity_in_stock: u32,
        kind: ProductKind,
    ) -> InventoryResult<Self> {
        let id = ProductId::new(id)?;
        let name = name.into();

        if name.trim().is_empty() {
            return Err(InventoryError::validation("name cannot be empty"));
        }
        if price < Decimal::ZERO {
            return Err(InventoryError::validation(format!(
                "price cannot be negative (got {price})"
            )));
        }
        if significant_digits(price) > MAX_PRICE_DIGITS {
            return Err(InventoryError::validation(format!(
                "price {price} has more than {MAX_PRICE_DIGITS} significant digits"
            )));
        }

        Ok(Self {
            id,
            name,
            price,
            quantity_in_stock,
            kind,
        })
    }

    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity_in_stock: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> InventoryResult<Self> {
        Self::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Electronics {
                warranty_years,
                brand: brand.into(),
            },
        )
    }

    pub fn grocery(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity_in_stock: u32,
        expiry_date: NaiveDate,
    ) -> InventoryResult<Self> {
        Self::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Grocery { expiry_date },
        )
    }

    pub fn clothing(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity_in_stock: u32,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> InventoryResult<Self> {
        Self::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Clothing {
                size: size.into(),
                material: material.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    /// Expiry date, for groceries only.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        match &self.kind {
            ProductKind::Grocery { expiry_date } => Some(*expiry_date),
            _ => None,
        }
    }

    /// Add `amount` units to stock.
    pub fn restock(&mut self, amount: u32) -> InventoryResult<()> {
        self.quantity_in_stock = self.quantity_in_stock.checked_add(amount).ok_or_else(|| {
            InventoryError::invariant(format!(
                "restocking {} by {amount} overflows the stock counter",
                self.id
            ))
        })?;
        Ok(())
    }

    /// Remove `quantity` units from stock; stock is untouched on failure.
    pub fn sell(&mut self, quantity: u32) -> InventoryResult<()> {
        if quantity > self.quantity_in_stock {
            return Err(InventoryError::OutOfStock {
                product_id: self.id.clone(),
                requested: quantity,
                available: self.quantity_in_stock,
            });
        }
        self.quantity_in_stock -= quantity;
        Ok(())
    }

    /// `price * quantity_in_stock`, failing instead of overflowing.
    pub fn total_value(&self) -> InventoryResult<Decimal> {
        self.price
            .checked_mul(Decimal::from(self.quantity_in_stock))
            .ok_or_else(|| {
                InventoryError::invariant(format!("value of {} overflows a decimal", self.id))
            })
    }

    /// Whether a grocery expired strictly before `today`.
    ///
    /// A grocery expiring on `today` is still sellable. Other variants never
    /// expire.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date().is_some_and(|expiry| expiry < today)
    }

    /// Human-readable line, with grocery freshness judged against `today`.
    pub fn render_as_of(&self, today: NaiveDate) -> String {
        let tail = format!("${}, Qty: {}", self.price, self.quantity_in_stock);
        match &self.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => format!(
                "[Electronics] {} (Brand: {brand}, Warranty: {warranty_years} yrs) - {tail}",
                self.name
            ),
            ProductKind::Grocery { expiry_date } => {
                let status = if self.is_expired(today) { "Expired" } else { "Fresh" };
                format!(
                    "[Grocery] {} (Expires: {expiry_date}, Status: {status}) - {tail}",
                    self.name
                )
            }
            ProductKind::Clothing { size, material } => format!(
                "[Clothing] {} (Size: {size}, Material: {material}) - {tail}",
                self.name
            ),
        }
    }
}

fn significant_digits(price: Decimal) -> u32 {
    match price.normalize().mantissa().unsigned_abs() {
        0 => 0,
        mantissa => mantissa.ilog10() + 1,
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render_as_of(Local::now().date_naive()))
    }
}

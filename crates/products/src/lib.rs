//! Products domain module.
//!
//! The closed product variant set (Electronics, Grocery, Clothing), its stock
//! operations, and the flat record form used for persistence. Pure domain
//! logic (no IO).

pub mod product;
pub mod record;

pub use product::{Product, ProductKind, ProductType};
pub use record::{ClothingRecord, ElectronicsRecord, GroceryRecord, ProductRecord};

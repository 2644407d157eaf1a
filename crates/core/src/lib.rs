//! `shelfwise-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product and
//! inventory crates (no IO, no logging).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use id::ProductId;

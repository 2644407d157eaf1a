//! Inventory domain module.
//!
//! The in-memory store that owns products keyed by id, with CRUD, search,
//! stock mutation, valuation and expiry pruning. Deterministic domain logic
//! (no IO, no storage).

pub mod store;

pub use store::Inventory;

//! Product identifiers.

use core::borrow::Borrow;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a product, unique within one inventory.
///
/// Ids are chosen by whoever creates the product (e.g. `"E001"`), so this is a
/// plain string newtype rather than a generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier, rejecting blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, InventoryError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InventoryError::validation("product id cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank() {
        assert_eq!(ProductId::new("E001").unwrap().as_str(), "E001");
        assert!(matches!(ProductId::new("   "), Err(InventoryError::Validation(_))));
        assert!(matches!(ProductId::new(""), Err(InventoryError::Validation(_))));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::from("G001")).unwrap();
        assert_eq!(json, "\"G001\"");
    }
}

//! JSON codec for the whole product collection.
//!
//! The persisted form is one JSON array of flat records, each tagged with its
//! variant under `type`. Decoding dispatches on that tag against the closed
//! variant set; every failure surfaces as `InvalidProductData` carrying the
//! cause and the offending record index.

use serde_json::Value as JsonValue;

use shelfwise_core::{InventoryError, InventoryResult};
use shelfwise_inventory::Inventory;
use shelfwise_products::{Product, ProductRecord, ProductType};

/// Discriminator field inside every record.
pub const TYPE_FIELD: &str = "type";

/// Serialize every product, in store iteration order.
pub fn encode(inventory: &Inventory) -> InventoryResult<Vec<u8>> {
    let records = inventory
        .list_all()
        .into_iter()
        .map(Product::to_record)
        .collect::<InventoryResult<Vec<ProductRecord>>>()?;

    serde_json::to_vec_pretty(&records)
        .map_err(|e| InventoryError::invalid_data(format!("failed to encode inventory: {e}")))
}

/// Parse a full inventory.
///
/// Repeated product ids within one payload are rejected rather than letting
/// the later record win.
pub fn decode(bytes: &[u8]) -> InventoryResult<Inventory> {
    let values: Vec<JsonValue> = serde_json::from_slice(bytes)
        .map_err(|e| InventoryError::invalid_data(format!("malformed inventory data: {e}")))?;

    let mut inventory = Inventory::new();
    for (index, value) in values.into_iter().enumerate() {
        let product = decode_record(value)
            .and_then(Product::try_from)
            .map_err(|e| at_record(index, e))?;

        inventory.add(product).map_err(|e| at_record(index, e))?;
    }

    Ok(inventory)
}

/// Dispatch one JSON object to the record type named by its discriminator.
pub fn decode_record(value: JsonValue) -> InventoryResult<ProductRecord> {
    let mut fields = match value {
        JsonValue::Object(fields) => fields,
        other => {
            return Err(InventoryError::invalid_data(format!(
                "expected a product object, found {}",
                json_kind(&other)
            )));
        }
    };

    let tag = match fields.remove(TYPE_FIELD) {
        Some(JsonValue::String(tag)) => tag,
        Some(other) => {
            return Err(InventoryError::invalid_data(format!(
                "`{TYPE_FIELD}` must be a string, found {}",
                json_kind(&other)
            )));
        }
        None => {
            return Err(InventoryError::invalid_data(format!(
                "missing `{TYPE_FIELD}` discriminator"
            )));
        }
    };

    let Some(product_type) = ProductType::from_discriminator(&tag) else {
        return Err(InventoryError::invalid_data(format!("unknown product type: {tag}")));
    };

    let rest = JsonValue::Object(fields);
    let record = match product_type {
        ProductType::Electronics => serde_json::from_value(rest).map(ProductRecord::Electronics),
        ProductType::Grocery => serde_json::from_value(rest).map(ProductRecord::Grocery),
        ProductType::Clothing => serde_json::from_value(rest).map(ProductRecord::Clothing),
    };

    record.map_err(|e| InventoryError::invalid_data(format!("bad {product_type} record: {e}")))
}

fn at_record(index: usize, err: InventoryError) -> InventoryError {
    let cause = match err {
        InventoryError::InvalidProductData(cause) => cause,
        InventoryError::DuplicateProductId(id) => format!("duplicate product id {id}"),
        other => other.to_string(),
    };
    InventoryError::invalid_data(format!("record {index}: {cause}"))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

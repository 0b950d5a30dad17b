use serde::Deserialize;
use serde_json::Value;

use crate::error::AuditError;
use crate::ingest::{fold_rows, Row};
use crate::model::{InventoryRecord, SourceKind};
use crate::parse::normalize_item;
use crate::quantity::floor_quantity;

/// Shape every array element must have.
#[derive(Debug, Deserialize)]
struct CountEntry {
    item: String,
    quantity: f64,
}

/// Parse a JSON array of `{"item": .., "quantity": ..}` counts.
///
/// Invalid JSON or a non-array root fails the whole file. Elements of the
/// wrong shape, empty names and negative quantities are skipped.
pub fn parse_inventory_file(content: &str) -> Result<Vec<InventoryRecord>, AuditError> {
    let root: Value =
        serde_json::from_str(content).map_err(|e| AuditError::InventorySyntax(e.to_string()))?;

    let elements = match root {
        Value::Array(elements) => elements,
        other => {
            return Err(AuditError::InventoryShape(format!(
                "expected a JSON array at the root, found {}",
                json_kind(&other)
            )))
        }
    };

    let numbered = elements.into_iter().enumerate().map(|(i, v)| (i + 1, v));
    Ok(fold_rows(SourceKind::Inventory, numbered, parse_element))
}

fn parse_element(element: Value) -> Row<InventoryRecord> {
    let entry: CountEntry = match serde_json::from_value(element) {
        Ok(entry) => entry,
        Err(e) => return Row::Skip(format!("invalid inventory entry: {e}")),
    };

    let item = normalize_item(&entry.item);
    if item.is_empty() {
        return Row::Skip("empty item name".into());
    }

    match floor_quantity(entry.quantity) {
        Some(quantity) => Row::Keep(InventoryRecord { item, quantity }),
        None => Row::Skip(format!("invalid quantity {} for '{item}'", entry.quantity)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

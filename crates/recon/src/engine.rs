use std::collections::BTreeSet;

use crate::aggregate::{delivery_map, inventory_map, usage_totals};
use crate::error::AuditError;
use crate::model::{
    AuditReport, Delivered, DeliveryMap, InventoryMap, ItemResult, UsageMap, NO_DELIVERY_RECORD,
    NO_INVENTORY_RECORD,
};
use crate::parse::{parse_delivery_file, parse_inventory_file, parse_usage_file};
use crate::report::create_audit_report;

/// The three per-item maps an audit run reconciles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditInput {
    pub deliveries: DeliveryMap,
    pub usage: UsageMap,
    pub inventory: InventoryMap,
}

impl AuditInput {
    /// Parse and aggregate the raw text of all three sources.
    ///
    /// Fails only when a source is structurally unreadable; bad rows are
    /// dropped by the parsers.
    pub fn from_sources(delivery: &str, usage: &str, inventory: &str) -> Result<Self, AuditError> {
        let deliveries = delivery_map(&parse_delivery_file(delivery)?);
        let usage = usage_totals(&parse_usage_file(usage)?);
        let inventory = inventory_map(&parse_inventory_file(inventory)?);
        Ok(Self { deliveries, usage, inventory })
    }
}

/// Reconcile `input` and assemble the report, stamped with the current time.
pub fn run_audit(input: &AuditInput) -> AuditReport {
    create_audit_report(&input.deliveries, &input.usage, &input.inventory)
}

/// Classify one item.
///
/// Missing usage counts as zero; only a missing delivery or a missing
/// inventory count makes the item unknown. `expected` may go negative and is
/// reported as-is.
pub fn reconcile_item(
    item: &str,
    delivered: Option<&Delivered>,
    used: i64,
    actual: Option<i64>,
) -> ItemResult {
    let delivered = match delivered {
        None => {
            return ItemResult::Unknown {
                item: item.to_string(),
                reason: NO_DELIVERY_RECORD.to_string(),
            }
        }
        Some(Delivered::Missing { reason }) => {
            return ItemResult::Unknown {
                item: item.to_string(),
                reason: reason.clone(),
            }
        }
        Some(Delivered::Valid { value }) => *value,
    };

    let Some(actual) = actual else {
        return ItemResult::Unknown {
            item: item.to_string(),
            reason: NO_INVENTORY_RECORD.to_string(),
        };
    };

    let expected = delivered.saturating_sub(used);
    let difference = actual.saturating_sub(expected);

    if difference == 0 {
        ItemResult::Ok {
            item: item.to_string(),
            expected,
            actual,
        }
    } else {
        log::debug!("discrepancy for '{item}': expected {expected}, actual {actual}, difference {difference}");
        ItemResult::Discrepancy {
            item: item.to_string(),
            expected,
            actual,
            difference,
        }
    }
}

/// Reconcile every item named by any source, in ascending item order.
pub fn reconcile_all(
    deliveries: &DeliveryMap,
    usage: &UsageMap,
    inventory: &InventoryMap,
) -> Vec<ItemResult> {
    let items: BTreeSet<&str> = deliveries
        .keys()
        .chain(usage.keys())
        .chain(inventory.keys())
        .map(String::as_str)
        .collect();

    items
        .into_iter()
        .map(|item| {
            reconcile_item(
                item,
                deliveries.get(item),
                usage.get(item).copied().unwrap_or(0),
                inventory.get(item).copied(),
            )
        })
        .collect()
}

use crate::model::{
    DeliveryMap, DeliveryRecord, InventoryMap, InventoryRecord, UsageMap, UsageRecord,
};

/// Item → delivered quantity. A later line for the same item replaces the earlier one.
pub fn delivery_map(records: &[DeliveryRecord]) -> DeliveryMap {
    let mut map = DeliveryMap::new();
    for record in records {
        map.insert(record.item.clone(), record.quantity.clone());
    }
    map
}

/// Item → total used. Usage is cumulative, so repeated items are summed.
pub fn usage_totals(records: &[UsageRecord]) -> UsageMap {
    let mut totals = UsageMap::new();
    for record in records {
        let total = totals.entry(record.item.clone()).or_insert(0);
        *total = total.saturating_add(record.quantity);
    }
    totals
}

/// Item → counted quantity. The last count for an item supersedes earlier ones.
pub fn inventory_map(records: &[InventoryRecord]) -> InventoryMap {
    let mut map = InventoryMap::new();
    for record in records {
        map.insert(record.item.clone(), record.quantity);
    }
    map
}

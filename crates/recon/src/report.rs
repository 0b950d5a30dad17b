use chrono::{DateTime, Utc};

use crate::engine::reconcile_all;
use crate::model::{AuditReport, AuditSummary, DeliveryMap, InventoryMap, ItemResult, UsageMap};

/// Tally results per classification.
pub fn compute_summary(results: &[ItemResult]) -> AuditSummary {
    let mut summary = AuditSummary {
        total_items: results.len(),
        ..AuditSummary::default()
    };

    for r in results {
        match r {
            ItemResult::Ok { .. } => summary.ok_count += 1,
            ItemResult::Discrepancy { .. } => summary.discrepancy_count += 1,
            ItemResult::Unknown { .. } => summary.unknown_count += 1,
        }
    }

    summary
}

/// Reconcile the three maps and stamp the report with the current time.
pub fn create_audit_report(
    deliveries: &DeliveryMap,
    usage: &UsageMap,
    inventory: &InventoryMap,
) -> AuditReport {
    create_audit_report_at(deliveries, usage, inventory, Utc::now())
}

/// Same as [`create_audit_report`] with an explicit timestamp.
pub fn create_audit_report_at(
    deliveries: &DeliveryMap,
    usage: &UsageMap,
    inventory: &InventoryMap,
    generated_at: DateTime<Utc>,
) -> AuditReport {
    let results = reconcile_all(deliveries, usage, inventory);
    let summary = compute_summary(&results);

    log::info!(
        "audit report generated: {} item(s), {} discrepancies, {} unknown",
        summary.total_items,
        summary.discrepancy_count,
        summary.unknown_count,
    );

    AuditReport::new(generated_at, results, summary)
}

//! `foodaudit-recon`: three-way food inventory reconciliation engine.
//!
//! Pure engine crate: receives the raw text of the delivery, usage and
//! inventory sources, returns a classified per-item report.
//! No CLI or IO dependencies.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod parse;
pub mod quantity;
pub mod report;

pub use aggregate::{delivery_map, inventory_map, usage_totals};
pub use config::AuditConfig;
pub use engine::{reconcile_all, reconcile_item, run_audit, AuditInput};
pub use error::AuditError;
pub use model::{
    AuditReport, AuditSummary, Delivered, DeliveryMap, DeliveryRecord, InventoryMap,
    InventoryRecord, ItemResult, ItemStatus, SourceKind, UsageMap, UsageRecord,
};
pub use parse::{parse_delivery_file, parse_inventory_file, parse_usage_file};
pub use report::{create_audit_report, create_audit_report_at};

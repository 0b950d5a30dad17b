//! Format-specific readers for the three audit inputs.
//!
//! Each parser returns records in source order with duplicates kept;
//! resolving duplicates is the aggregators' job.

mod delivery;
mod inventory;
mod usage;

pub use delivery::parse_delivery_file;
pub use inventory::parse_inventory_file;
pub use usage::parse_usage_file;

/// Canonical item key: trimmed, lowercased.
pub(crate) fn normalize_item(raw: &str) -> String {
    raw.trim().to_lowercase()
}

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// The three independently produced inputs of an audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Delivery,
    Usage,
    Inventory,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [Self::Delivery, Self::Usage, Self::Inventory];

    /// Human label used in diagnostics ("delivery file", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery file",
            Self::Usage => "usage file",
            Self::Inventory => "inventory file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Quantity on a delivery line: a usable count, or the reason there isn't one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivered {
    Valid { value: i64 },
    Missing { reason: String },
}

impl Delivered {
    pub fn missing(reason: impl Into<String>) -> Self {
        Self::Missing { reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub item: String,
    pub quantity: Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub item: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub item: String,
    pub quantity: i64,
}

// ---------------------------------------------------------------------------
// Per-item maps
// ---------------------------------------------------------------------------

pub type DeliveryMap = BTreeMap<String, Delivered>;
pub type UsageMap = BTreeMap<String, i64>;
pub type InventoryMap = BTreeMap<String, i64>;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

pub const NO_DELIVERY_RECORD: &str = "no delivery record";
pub const NO_INVENTORY_RECORD: &str = "no inventory record";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemResult {
    Ok {
        item: String,
        expected: i64,
        actual: i64,
    },
    Discrepancy {
        item: String,
        expected: i64,
        actual: i64,
        difference: i64,
    },
    Unknown {
        item: String,
        reason: String,
    },
}

impl ItemResult {
    pub fn item(&self) -> &str {
        match self {
            Self::Ok { item, .. } | Self::Discrepancy { item, .. } | Self::Unknown { item, .. } => {
                item
            }
        }
    }

    pub fn status(&self) -> ItemStatus {
        match self {
            Self::Ok { .. } => ItemStatus::Ok,
            Self::Discrepancy { .. } => ItemStatus::Discrepancy,
            Self::Unknown { .. } => ItemStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Ok,
    Discrepancy,
    Unknown,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Discrepancy => write!(f, "DISCREPANCY"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total_items: usize,
    pub ok_count: usize,
    pub discrepancy_count: usize,
    pub unknown_count: usize,
}

impl AuditSummary {
    /// True when every item balanced.
    pub fn is_clean(&self) -> bool {
        self.discrepancy_count == 0 && self.unknown_count == 0
    }
}

/// Assembled once by [`crate::report::create_audit_report`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    timestamp: DateTime<Utc>,
    results: Vec<ItemResult>,
    summary: AuditSummary,
}

impl AuditReport {
    pub(crate) fn new(
        timestamp: DateTime<Utc>,
        results: Vec<ItemResult>,
        summary: AuditSummary,
    ) -> Self {
        Self { timestamp, results, summary }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn results(&self) -> &[ItemResult] {
        &self.results
    }

    pub fn summary(&self) -> &AuditSummary {
        &self.summary
    }
}

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::AuditError;
use crate::ingest::{fold_rows, Row};
use crate::model::{SourceKind, UsageRecord};
use crate::parse::normalize_item;
use crate::quantity::{floor_quantity, parse_number};

const ITEM_COLUMN: &str = "food";
const QUANTITY_COLUMN: &str = "quantity";

/// Parse a headered `food,quantity` usage log.
///
/// The first non-blank row is the header. Rows with an empty item or a
/// quantity that is not a non-negative number are skipped; fractional
/// quantities are floored.
pub fn parse_usage_file(content: &str) -> Result<Vec<UsageRecord>, AuditError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AuditError::UsageFormat(e.to_string()))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        rows.push((line, record));
    }

    let mut columns: Option<(usize, usize)> = None;
    Ok(fold_rows(SourceKind::Usage, rows, |record| {
        if is_blank(&record) {
            return Row::Ignore;
        }
        match columns {
            None => {
                columns = Some(resolve_columns(&record));
                Row::Ignore
            }
            Some((item_idx, qty_idx)) => parse_row(&record, item_idx, qty_idx),
        }
    }))
}

/// Column positions from the header, falling back to the first two columns.
fn resolve_columns(header: &StringRecord) -> (usize, usize) {
    let find = |name: &str| header.iter().position(|h| h.eq_ignore_ascii_case(name));
    match (find(ITEM_COLUMN), find(QUANTITY_COLUMN)) {
        (Some(item), Some(qty)) => (item, qty),
        _ => (0, 1),
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn parse_row(record: &StringRecord, item_idx: usize, qty_idx: usize) -> Row<UsageRecord> {
    let item = normalize_item(record.get(item_idx).unwrap_or(""));
    if item.is_empty() {
        return Row::Skip("empty item name".into());
    }

    let raw_qty = record.get(qty_idx).unwrap_or("");
    match parse_number(raw_qty).and_then(floor_quantity) {
        Some(quantity) => Row::Keep(UsageRecord { item, quantity }),
        None => Row::Skip(format!("invalid quantity \"{raw_qty}\" for '{item}'")),
    }
}

use crate::error::AuditError;
use crate::ingest::{fold_rows, numbered_lines, Row};
use crate::model::{DeliveryRecord, SourceKind};
use crate::parse::normalize_item;
use crate::quantity::normalize_delivery_value;

/// Parse `item=value` property lines.
///
/// Blank lines and `#` comments are ignored; lines without `=` or with an
/// empty item name are skipped. Bad quantities are not skipped: they become
/// `Delivered::Missing` and surface later as unknown items.
pub fn parse_delivery_file(content: &str) -> Result<Vec<DeliveryRecord>, AuditError> {
    Ok(fold_rows(SourceKind::Delivery, numbered_lines(content), parse_line))
}

fn parse_line(line: &str) -> Row<DeliveryRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Row::Ignore;
    }

    let Some((key, raw_value)) = line.split_once('=') else {
        return Row::Skip(format!("no '=' in \"{line}\""));
    };

    let item = normalize_item(key);
    if item.is_empty() {
        return Row::Skip("empty item name".into());
    }

    Row::Keep(DeliveryRecord {
        item,
        quantity: normalize_delivery_value(raw_value),
    })
}

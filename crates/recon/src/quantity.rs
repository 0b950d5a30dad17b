//! Raw text → quantity rules shared by the three parsers.

use crate::model::Delivered;

pub const EMPTY_DELIVERY_VALUE: &str = "empty value in delivery file";

/// Largest integer an `f64` still represents exactly (2^53 - 1).
pub const MAX_EXACT_QUANTITY: i64 = (1 << 53) - 1;

/// Normalize the value half of a `item=value` delivery line.
///
/// Never fails: every input is either a usable non-negative integer or a
/// `Missing` carrying a human-readable reason. The reason for a bad number
/// echoes `raw` exactly as it appeared, before trimming.
pub fn normalize_delivery_value(raw: &str) -> Delivered {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Delivered::missing(EMPTY_DELIVERY_VALUE);
    }

    let unquoted = strip_matching_quotes(trimmed);
    match parse_number(unquoted).and_then(whole_quantity) {
        Some(value) => Delivered::Valid { value },
        None => Delivered::missing(format!("invalid quantity: \"{raw}\"")),
    }
}

/// Remove one layer of `"..."` or `'...'`. Mismatched quotes are left alone.
pub fn strip_matching_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Decimal number with optional sign, fraction and exponent. Non-finite
/// spellings (`inf`, `NaN`) are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let n: f64 = s.parse().ok()?;
    n.is_finite().then_some(n)
}

/// Accept only exact non-negative integers (`20`, `20.0`, `2e1`).
pub fn whole_quantity(n: f64) -> Option<i64> {
    if n < 0.0 || n.fract() != 0.0 || n > MAX_EXACT_QUANTITY as f64 {
        return None;
    }
    Some(n as i64)
}

/// Accept any non-negative number, rounding down to a whole count.
/// Counts beyond `i64::MAX` saturate.
pub fn floor_quantity(n: f64) -> Option<i64> {
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(n.floor() as i64)
}

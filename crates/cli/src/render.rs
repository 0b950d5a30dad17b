//! Text and JSON renderings of an [`AuditReport`].

use chrono::SecondsFormat;
use foodaudit_recon::{AuditReport, AuditSummary, ItemResult};

const TITLE: &str = "Zoo Food Audit Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// `text` or `json` (any case). Anything else falls back to text.
    pub fn from_arg(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "text" => Self::Text,
            other => {
                log::warn!("unknown output format \"{other}\", using text");
                Self::Text
            }
        }
    }
}

pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_text(report: &AuditReport) -> String {
    let mut lines: Vec<String> = vec![TITLE.to_string(), "=".repeat(TITLE.len()), String::new()];

    lines.extend(report.results().iter().map(result_line));
    lines.push(String::new());
    lines.push(summary_line(report.summary()));
    lines.push(String::new());
    lines.push(format!(
        "Report generated: {}",
        report.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true)
    ));

    lines.join("\n")
}

fn result_line(result: &ItemResult) -> String {
    let status = result.status();
    match result {
        ItemResult::Ok { item, .. } => format!("{item}: {status}"),
        ItemResult::Discrepancy {
            item,
            expected,
            actual,
            difference,
        } => format!("{item}: {status} {difference:+} (expected: {expected}, actual: {actual})"),
        ItemResult::Unknown { item, reason } => format!("{item}: {status} ({reason})"),
    }
}

fn summary_line(summary: &AuditSummary) -> String {
    if summary.is_clean() {
        return "Summary: All items OK! No discrepancies found.".to_string();
    }

    let mut parts = Vec::new();
    if summary.discrepancy_count > 0 {
        let n = summary.discrepancy_count;
        parts.push(format!("{n} discrepanc{} found", if n == 1 { "y" } else { "ies" }));
    }
    if summary.unknown_count > 0 {
        let n = summary.unknown_count;
        parts.push(format!("{n} item{} with missing data", if n == 1 { "" } else { "s" }));
    }
    format!("Summary: {}", parts.join(", "))
}

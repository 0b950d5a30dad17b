use std::fmt;

/// Whole-file failures. Malformed individual rows never produce one of these;
/// they are dropped and logged by the parser instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// Inventory document is not valid JSON.
    InventorySyntax(String),
    /// Inventory document parsed, but its root is not an array.
    InventoryShape(String),
    /// Usage CSV could not be read as delimited text at all.
    UsageFormat(String),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty or duplicate file name, etc.).
    ConfigValidation(String),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InventorySyntax(msg) => write!(f, "failed to parse inventory file: {msg}"),
            Self::InventoryShape(msg) => write!(f, "invalid inventory format: {msg}"),
            Self::UsageFormat(msg) => write!(f, "failed to parse usage file: {msg}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for AuditError {}

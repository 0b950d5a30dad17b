use serde::Deserialize;

use crate::error::AuditError;
use crate::model::SourceKind;

/// File the CLI looks for in the data directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "audit.toml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub files: SourceFiles,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            files: SourceFiles::default(),
        }
    }
}

fn default_name() -> String {
    "Zoo Food Audit".into()
}

// ---------------------------------------------------------------------------
// Source files
// ---------------------------------------------------------------------------

/// File names of the three sources, relative to the data directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceFiles {
    #[serde(default = "default_delivery")]
    pub delivery: String,
    #[serde(default = "default_usage")]
    pub usage: String,
    #[serde(default = "default_inventory")]
    pub inventory: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            delivery: default_delivery(),
            usage: default_usage(),
            inventory: default_inventory(),
        }
    }
}

fn default_delivery() -> String {
    "delivery.txt".into()
}

fn default_usage() -> String {
    "usage.csv".into()
}

fn default_inventory() -> String {
    "inventory.json".into()
}

impl SourceFiles {
    pub fn get(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Delivery => &self.delivery,
            SourceKind::Usage => &self.usage,
            SourceKind::Inventory => &self.inventory,
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AuditConfig {
    pub fn from_toml(input: &str) -> Result<Self, AuditError> {
        let config: AuditConfig =
            toml::from_str(input).map_err(|e| AuditError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        for kind in SourceKind::ALL {
            if self.files.get(kind).trim().is_empty() {
                return Err(AuditError::ConfigValidation(format!(
                    "file name for {kind} is empty"
                )));
            }
        }

        // All three sources must be distinct files
        for (i, a) in SourceKind::ALL.iter().enumerate() {
            for b in &SourceKind::ALL[i + 1..] {
                if self.files.get(*a) == self.files.get(*b) {
                    return Err(AuditError::ConfigValidation(format!(
                        "{a} and {b} both point to '{}'",
                        self.files.get(*a)
                    )));
                }
            }
        }

        Ok(())
    }
}

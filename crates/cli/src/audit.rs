//! `food-audit`: read the three sources, reconcile, print the report.

use std::path::{Path, PathBuf};

use foodaudit_recon::config::DEFAULT_CONFIG_FILE;
use foodaudit_recon::{run_audit, AuditConfig, AuditInput};

use crate::exit_codes::{EXIT_AUDIT_FAILED, EXIT_OUTPUT, EXIT_UNBALANCED, EXIT_USAGE};
use crate::io::read_sources;
use crate::render::{render, OutputFormat};
use crate::CliError;

pub struct AuditOptions {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

fn audit_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

/// Explicit `--config`, else `audit.toml` in the data directory, else defaults.
pub fn load_config(data_dir: &Path, explicit: Option<&Path>) -> Result<AuditConfig, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = data_dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(AuditConfig::default());
            }
            candidate
        }
    };

    let config_str = std::fs::read_to_string(&path).map_err(|e| {
        audit_err(EXIT_USAGE, format!("cannot read config {}: {e}", path.display()))
    })?;
    let config = AuditConfig::from_toml(&config_str)
        .map_err(|e| audit_err(EXIT_USAGE, format!("{}: {e}", path.display())))?;

    log::debug!("using config {} ('{}')", path.display(), config.name);
    Ok(config)
}

/// Run one audit and return the rendered report.
///
/// Everything up to rendering is all-or-nothing: a read or structural
/// failure in any source yields an error and no report.
pub fn build_report(data_dir: &Path, config: &AuditConfig, format: OutputFormat) -> Result<(String, bool), CliError> {
    log::info!("starting audit '{}' in {}", config.name, data_dir.display());

    let texts = read_sources(data_dir, &config.files)
        .map_err(|e| audit_err(EXIT_AUDIT_FAILED, e.to_string()))?;

    let input = AuditInput::from_sources(&texts.delivery, &texts.usage, &texts.inventory)
        .map_err(|e| audit_err(EXIT_AUDIT_FAILED, e.to_string()))?;

    let report = run_audit(&input);
    let rendered = render(&report, format)
        .map_err(|e| audit_err(EXIT_AUDIT_FAILED, format!("JSON serialization error: {e}")))?;

    Ok((rendered, report.summary().is_clean()))
}

pub fn cmd_audit(opts: AuditOptions) -> Result<(), CliError> {
    let config = load_config(&opts.data_dir, opts.config.as_deref())?;
    let (rendered, clean) = build_report(&opts.data_dir, &config, opts.format)?;

    println!("{rendered}");

    if let Some(ref path) = opts.output {
        std::fs::write(path, format!("{rendered}\n"))
            .map_err(|e| audit_err(EXIT_OUTPUT, format!("cannot write output {}: {e}", path.display())))?;
        log::info!("wrote {}", path.display());
    }

    if opts.strict && !clean {
        return Err(audit_err(EXIT_UNBALANCED, "discrepancies or items with missing data found")
            .with_hint("run without --strict to exit 0 whenever a report is produced"));
    }

    Ok(())
}

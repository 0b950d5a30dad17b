// Food audit CLI - reconciles deliveries, usage logs and inventory counts

mod audit;
mod exit_codes;
mod io;
mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "food-audit")]
#[command(about = "Reconciles food deliveries, usage logs, and inventory counts to identify discrepancies")]
#[command(long_version = long_version())]
#[command(version)]
#[command(after_help = "\
Expects delivery.txt, usage.csv and inventory.json in the data directory
(names can be changed in audit.toml or with --config).

Examples:
  food-audit
  food-audit --data ./data --format json
  food-audit -d /srv/zoo/week-12 -l debug
  food-audit --format json --output report.json --strict")]
struct Cli {
    /// Data directory containing the input files
    #[arg(long, short = 'd', default_value = "./data", env = "FOOD_AUDIT_DATA")]
    data: PathBuf,

    /// Output format: text or json
    #[arg(long, short = 'f', default_value = "text")]
    format: String,

    /// Log level: debug, info, warn, error
    #[arg(long, short = 'l', default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// TOML config naming the input files (default: <data>/audit.toml if present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Exit 3 when any item is a discrepancy or unknown
    #[arg(long)]
    strict: bool,
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nengine:  foodaudit-recon ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   debug",
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            "\nengine:  foodaudit-recon ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   release",
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(logging::LogLevel::from_arg(&cli.log_level));

    let result = audit::cmd_audit(audit::AuditOptions {
        data_dir: cli.data,
        format: render::OutputFormat::from_arg(&cli.format),
        config: cli.config,
        output: cli.output,
        strict: cli.strict,
    });

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

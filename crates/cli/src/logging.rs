//! Diagnostic logging to stderr.
//!
//! The engine logs through the `log` facade; the subscriber installed here
//! picks those records up through its `log` bridge.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `debug`, `info`, `warn` or `error`. Anything else falls back to `info`.
    pub fn from_arg(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, takes precedence
/// over `level`. Calling this twice is harmless; the second call is ignored.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(LogLevel::from_arg("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_arg("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_arg("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_arg("info"), LogLevel::Info);
        assert_eq!(LogLevel::from_arg("verbose"), LogLevel::Info);
    }
}

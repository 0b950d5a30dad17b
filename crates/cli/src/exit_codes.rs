//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Meaning                                                      |
//! |------|--------------------------------------------------------------|
//! | 0    | Success (report produced)                                    |
//! | 1    | Audit failed (unreadable file, structurally broken input)    |
//! | 2    | CLI usage error (bad args, invalid config)                   |
//! | 3    | `--strict` and the report has discrepancies or unknown items |
//! | 4    | Report could not be written to `--output`                    |

/// Success - report produced.
pub const EXIT_SUCCESS: u8 = 0;

/// Audit failed: a source could not be read or is structurally broken.
/// No partial report is printed.
pub const EXIT_AUDIT_FAILED: u8 = 1;

/// Usage error - bad arguments, unreadable or invalid config.
/// clap exits with this code for argument errors on its own.
pub const EXIT_USAGE: u8 = 2;

/// Report produced, but `--strict` was set and not every item balanced.
pub const EXIT_UNBALANCED: u8 = 3;

/// Report produced but writing it to `--output` failed.
pub const EXIT_OUTPUT: u8 = 4;

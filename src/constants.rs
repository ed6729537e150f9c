//! Application-wide constants and default values.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === External Commands ===

/// Default tunnel management binary.
pub const IPSEC_BINARY: &str = "ipsec";
/// Subcommand producing the full per-connection report.
pub const STATUS_SUBCOMMAND: &str = "statusall";
/// Default privilege elevation wrapper.
pub const SUDO_BINARY: &str = "sudo";

// === Path Configuration ===

/// Default location of the tunnel definitions.
pub const IPSEC_CONF_PATH: &str = "/etc/ipsec.conf";
/// Name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Report Patterns ===

/// No association up or connecting.
pub const PATTERN_DOWN: &str = r"Security Associations \(0 up, 0 connecting\)";
/// Exactly one association, either up or connecting.
pub const PATTERN_ESTABLISHED: &str =
    r"Security Associations \(0 up, 1 connecting\)|Security Associations \(1 up, 0 connecting\)";
/// Exactly one fully up association.
pub const PATTERN_INSTALLED: &str = r"Security Associations \(1 up, 0 connecting\)";

pub const PATTERN_BYTES_IN: &str = r"(\d+) bytes_i";
pub const PATTERN_BYTES_OUT: &str = r"(\d+) bytes_o";
pub const PATTERN_PACKETS_IN: &str = r"bytes_i \((\d+) pkts";
pub const PATTERN_PACKETS_OUT: &str = r"bytes_o \((\d+) pkts";

// === Logging ===

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

//! Tunnel list loader for `ipsec.conf`.
//!
//! Only what the status pass needs is read: the `conn` section names, in file
//! order, and whether a section sets `auto=ignore`. Everything else in the
//! file is skipped without validation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::state::{Configuration, TunnelDescriptor};

const DEFAULT_SECTION: &str = "%default";

/// Reads and parses the tunnel list from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read.
pub fn load(path: &Path) -> Result<Configuration, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content);
    debug!(path = %path.display(), tunnels = config.len(), "loaded tunnel configuration");
    Ok(config)
}

/// Parses `ipsec.conf` content into an ordered tunnel list.
pub fn parse(content: &str) -> Configuration {
    let mut tunnels = Vec::new();
    let mut current: Option<TunnelDescriptor> = None;

    for raw in content.lines() {
        let line = strip_comment(raw);
        if line.trim().is_empty() {
            continue;
        }

        // Section headers start at column 0; parameters are indented.
        if !line.starts_with(char::is_whitespace) {
            tunnels.extend(current.take());
            let mut words = line.split_whitespace();
            if let (Some("conn"), Some(name)) = (words.next(), words.next()) {
                if name != DEFAULT_SECTION {
                    current = Some(TunnelDescriptor::new(name));
                }
            }
            continue;
        }

        if let Some(tunnel) = current.as_mut() {
            if let Some((key, value)) = line.split_once('=') {
                if key.trim() == "auto" && value.trim() == "ignore" {
                    tunnel.ignored = true;
                }
            }
        }
    }
    tunnels.extend(current);

    Configuration::new(tunnels)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

//! Retrieval of raw `ipsec statusall` reports.
//!
//! The [`StatusProvider`] trait separates "get the report text for a tunnel"
//! from interpreting it, so the query pass can run against canned text in
//! tests and against the real command in production.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::constants;
use crate::error::ProviderError;
use crate::state::TunnelDescriptor;

/// Source of raw status report text for a single tunnel.
pub trait StatusProvider {
    /// Returns the status report for `tunnel`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when no report could be captured at all.
    fn fetch(&self, tunnel: &TunnelDescriptor) -> Result<String, ProviderError>;
}

/// Runs `ipsec statusall <name>`, optionally through `sudo`.
#[derive(Clone, Debug)]
pub struct CliStatusProvider {
    binary: PathBuf,
    use_sudo: bool,
    sudo_binary: PathBuf,
}

impl Default for CliStatusProvider {
    fn default() -> Self {
        Self::new(constants::IPSEC_BINARY)
    }
}

impl CliStatusProvider {
    /// Creates a provider invoking `binary` directly.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            use_sudo: false,
            sudo_binary: PathBuf::from(constants::SUDO_BINARY),
        }
    }

    /// Enables or disables invocation through the elevation wrapper.
    #[must_use]
    pub fn with_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = use_sudo;
        self
    }

    /// Overrides the elevation wrapper binary.
    #[must_use]
    pub fn with_sudo_binary(mut self, sudo_binary: impl Into<PathBuf>) -> Self {
        self.sudo_binary = sudo_binary.into();
        self
    }

    /// The argv executed for `tunnel`, program first.
    pub fn command_line(&self, tunnel: &TunnelDescriptor) -> Vec<String> {
        let mut argv = Vec::with_capacity(4);
        if self.use_sudo {
            argv.push(self.sudo_binary.display().to_string());
        }
        argv.push(self.binary.display().to_string());
        argv.push(constants::STATUS_SUBCOMMAND.to_string());
        argv.push(tunnel.name.clone());
        argv
    }

    fn program(&self) -> &Path {
        if self.use_sudo {
            &self.sudo_binary
        } else {
            &self.binary
        }
    }

    fn command(&self, tunnel: &TunnelDescriptor) -> Command {
        let mut cmd = Command::new(self.program());
        if self.use_sudo {
            cmd.arg(&self.binary);
        }
        cmd.args([constants::STATUS_SUBCOMMAND, tunnel.name.as_str()]);
        cmd
    }
}

impl StatusProvider for CliStatusProvider {
    fn fetch(&self, tunnel: &TunnelDescriptor) -> Result<String, ProviderError> {
        debug!(tunnel = %tunnel.name, argv = ?self.command_line(tunnel), "querying tunnel status");

        let output = self
            .command(tunnel)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ProviderError::Spawn {
                binary: self.program().display().to_string(),
                source,
            })?;

        // statusall exits non-zero on some platforms (FreeBSD returns 3) while
        // still printing a valid report, so the exit status is not checked.
        if !output.status.success() {
            debug!(tunnel = %tunnel.name, status = %output.status, "status command exited unsuccessfully");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_direct() {
        let provider = CliStatusProvider::default();
        let tunnel = TunnelDescriptor::new("office");
        assert_eq!(
            provider.command_line(&tunnel),
            ["ipsec", "statusall", "office"]
        );
    }

    #[test]
    fn test_command_line_sudo() {
        let provider = CliStatusProvider::new("/usr/sbin/ipsec").with_sudo(true);
        let tunnel = TunnelDescriptor::new("office");
        assert_eq!(
            provider.command_line(&tunnel),
            ["sudo", "/usr/sbin/ipsec", "statusall", "office"]
        );
    }

    #[test]
    fn test_providers_with_different_elevation_coexist() {
        let plain = CliStatusProvider::default();
        let elevated = plain.clone().with_sudo(true);
        let tunnel = TunnelDescriptor::new("t");
        assert_eq!(plain.command_line(&tunnel).len(), 3);
        assert_eq!(elevated.command_line(&tunnel).len(), 4);
    }

    #[test]
    fn test_fetch_missing_binary_is_error() {
        let provider = CliStatusProvider::new("/nonexistent/path/ipsec");
        let result = provider.fetch(&TunnelDescriptor::new("office"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/ipsec"));
    }

    #[test]
    fn test_fetch_missing_sudo_is_error() {
        let provider = CliStatusProvider::default()
            .with_sudo(true)
            .with_sudo_binary("/nonexistent/path/sudo");
        let err = provider.fetch(&TunnelDescriptor::new("office")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/sudo"));
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_captures_stdout() {
        let provider = CliStatusProvider::new("echo");
        let out = provider.fetch(&TunnelDescriptor::new("office")).unwrap();
        assert_eq!(out.trim(), "statusall office");
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_ignores_exit_code() {
        let provider = CliStatusProvider::new("false");
        let out = provider.fetch(&TunnelDescriptor::new("office"));
        assert_eq!(out.unwrap(), "");
    }
}

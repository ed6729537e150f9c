//! Application settings loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::core::provider::CliStatusProvider;
use crate::error::ConfigError;

/// Settings for the status command and tunnel source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tunnel management binary.
    pub ipsec_binary: PathBuf,
    /// Run the status command through `sudo_binary`.
    pub use_sudo: bool,
    pub sudo_binary: PathBuf,
    /// Tunnel definitions file.
    pub ipsec_conf: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ipsec_binary: PathBuf::from(constants::IPSEC_BINARY),
            use_sudo: false,
            sudo_binary: PathBuf::from(constants::SUDO_BINARY),
            ipsec_conf: PathBuf::from(constants::IPSEC_CONF_PATH),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the command-line status provider described by these settings.
    pub fn provider(&self) -> CliStatusProvider {
        CliStatusProvider::new(&self.ipsec_binary)
            .with_sudo(self.use_sudo)
            .with_sudo_binary(&self.sudo_binary)
    }
}

/// Default settings file location (`<config dir>/ipsec-status/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(constants::APP_NAME).join(constants::CONFIG_FILE_NAME))
}

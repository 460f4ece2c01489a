//! Machine configuration, stored as TOML

use crate::error::{PsxError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What the driving loop does when the emulated hardware is put in a state we don't support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Stop and return the error to the caller
    Halt,
    /// Log the error and keep running. The emulated state may be wrong from then on.
    LogAndContinue,
}

impl Default for UnsupportedPolicy {
    fn default() -> Self {
        UnsupportedPolicy::Halt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Path to the 512KB BIOS image
    pub bios_path: PathBuf,
    /// Value of every byte of RAM on power up
    pub ram_fill: u8,
    pub on_unsupported: UnsupportedPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            bios_path: PathBuf::from("SCPH1001.BIN"),
            ram_fill: 0,
            on_unsupported: UnsupportedPolicy::default(),
        }
    }
}

impl MachineConfig {
    pub fn from_toml_str(s: &str) -> Result<MachineConfig> {
        toml::from_str(s).map_err(|e| PsxError::ConfigError(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PsxError::ConfigError(e.to_string()))
    }

    /// Load the configuration file at `path`
    pub fn load(path: &Path) -> Result<MachineConfig> {
        let s = fs::read_to_string(path)?;

        let config = MachineConfig::from_toml_str(&s).map_err(|e| match e {
            PsxError::ConfigError(reason) => {
                PsxError::ConfigError(format!("{}: {}", path.display(), reason))
            }
            e => e,
        })?;

        info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// `<config dir>/psx-core/config.toml`, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("psx-core").join("config.toml"))
    }

    /// Load the configuration from `default_path()` if it exists, otherwise use the defaults
    pub fn load_or_default() -> Result<MachineConfig> {
        match MachineConfig::default_path() {
            Some(path) if path.exists() => MachineConfig::load(&path),
            _ => Ok(MachineConfig::default()),
        }
    }
}

//! Terminal configuration loaded from `vault.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, VaultError};
use crate::settings::Settings;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vault.toml";

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "VAULT_CONFIG";

/// Top-level terminal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// Prompt printed before input and before echoed commands.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// JSON snapshot of the character data. The embedded sample is used when
    /// this is unset.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// Settings at session start.
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub boot: BootConfig,
}

/// Boot animation options.
#[derive(Debug, Clone, Deserialize)]
pub struct BootConfig {
    /// Play the boot sequence before the first prompt.
    #[serde(default = "yes")]
    pub enabled: bool,
}

fn default_prompt() -> String {
    "VAULT-TEC> ".to_string()
}

fn yes() -> bool {
    true
}

impl Default for BootConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            snapshot_path: None,
            settings: Settings::default(),
            boot: BootConfig::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.prompt.contains('\n') {
            return Err(VaultError::Config(
                "prompt must be a single line".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load a config file. A relative `snapshot_path` is resolved against
    /// the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        if let (Some(snapshot), Some(dir)) = (&config.snapshot_path, path.parent())
            && snapshot.is_relative()
        {
            config.snapshot_path = Some(dir.join(snapshot));
        }
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Resolve the terminal config.
///
/// Resolution order:
/// 1. Explicit path (first CLI argument)
/// 2. `VAULT_CONFIG` environment variable
/// 3. `vault.toml` in the working directory
/// 4. Built-in defaults
///
/// An explicit path that fails to load is an error. A missing default file
/// is not.
pub fn resolve_config(explicit: Option<&str>) -> Result<TerminalConfig> {
    if let Some(path) = explicit {
        return TerminalConfig::load(Path::new(path));
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return TerminalConfig::load(Path::new(&path));
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        return TerminalConfig::load(default_path);
    }
    log::warn!("No {DEFAULT_CONFIG_FILE} found -- using built-in defaults");
    Ok(TerminalConfig::default())
}

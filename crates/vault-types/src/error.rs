//! Error types for the Vault-Tec terminal.

use std::io;

/// Errors produced by the terminal crates.
///
/// Command-level variants render as the text that follows `ERROR: ` in the
/// scrollback log, so their messages are user-facing.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("config error: {0}")]
    Config(String),

    #[error("data error: {0}")]
    Data(String),

    #[error("Unknown setting \"{0}\"")]
    UnknownSetting(String),

    #[error("Location \"{0}\" not found.")]
    UnknownLocation(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VaultError>;

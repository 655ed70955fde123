//! Foundation types for the Vault-Tec terminal.
//!
//! This crate holds the types shared by every other crate in the workspace:
//! the error type, the display settings record with its merge-patch, and the
//! TOML terminal configuration.

pub mod config;
pub mod error;
pub mod settings;

pub use config::{TerminalConfig, resolve_config};
pub use error::{Result, VaultError};
pub use settings::{Settings, SettingsPatch};

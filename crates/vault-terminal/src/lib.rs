//! Command interpreter for the Vault-Tec terminal.
//!
//! Commands implement the `Command` trait and are registered by name. The
//! interpreter parses an input line, resolves the command name, and
//! dispatches `execute()`. Commands never touch session state; they return a
//! `CommandEffect` that the session coordinator applies.

pub mod character_commands;
mod commands;
pub mod effect;
pub mod history;
mod interpreter;
pub mod parser;
pub mod record_commands;
pub mod settings_commands;
pub mod world_commands;

/// Register DOSSIER, ID, and SHEET into a registry.
pub use character_commands::register_character_commands;
/// Register every built-in command into a registry.
pub use commands::register_builtins;
pub use effect::{
    CommandEffect, LineKind, OutputLine, PanelChange, PanelData, PanelDescriptor, PanelKind,
};
/// Shell-style Up/Down recall of submitted lines.
pub use history::InputHistory;
/// A single executable command trait.
pub use interpreter::Command;
/// Read-only context passed to every command.
pub use interpreter::CommandContext;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
pub use interpreter::{Interpretation, Interpreter, Outcome, unknown_command_message};
pub use parser::{ParsedInput, parse};
/// Register QUESTS, INVENTORY, JOURNAL, and RELATIONS into a registry.
pub use record_commands::register_record_commands;
/// Register SETTINGS into a registry.
pub use settings_commands::register_settings_commands;
/// Register MAP, LOCATIONS, and TIMELINE into a registry.
pub use world_commands::register_world_commands;

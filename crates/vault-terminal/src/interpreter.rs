//! Command trait, registry, and dispatch logic.

use std::collections::HashMap;
use std::sync::Arc;

use vault_data::Snapshot;
use vault_types::Settings;
use vault_types::error::Result;

use crate::effect::CommandEffect;
use crate::parser;

/// Read-only context passed to every command.
pub struct CommandContext<'a> {
    /// The registry the command was resolved from.
    pub registry: &'a CommandRegistry,
    /// Settings as of this submission.
    pub settings: &'a Settings,
    /// Current domain snapshot.
    pub snapshot: &'a Arc<Snapshot>,
}

/// A single executable command.
///
/// `execute` must be a pure function of its arguments and the context; it
/// must not keep state between calls.
pub trait Command {
    /// Upper-case canonical name (what the user types, in any case).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Usage string (e.g. "LOCATIONS \[id\]"), shown in the HELP reference.
    fn usage(&self) -> &str;

    /// Execute with upper-cased arguments.
    ///
    /// An `Err` is not fatal: the interpreter turns it into an error line.
    fn execute(&self, args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect>;
}

/// Registry of available commands, keyed by upper-case name.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    order: Vec<String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its original position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_ascii_uppercase();
        if self.commands.insert(key.clone(), cmd).is_none() {
            self.order.push(key);
        }
    }

    /// Find a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(&name.to_ascii_uppercase())
            .map(|cmd| &**cmd)
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.commands.get(key))
            .map(|cmd| cmd.as_ref() as &dyn Command)
    }

    /// Return sorted completions for a partial command name.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let upper = partial.to_ascii_uppercase();
        let mut matches: Vec<String> = self
            .commands
            .keys()
            .filter(|name| name.starts_with(&upper))
            .cloned()
            .collect();
        matches.sort();
        matches
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// How a submission was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and returned an effect.
    Executed,
    /// The command ran but could not satisfy the request.
    Failed,
    /// No command with that name.
    UnknownCommand,
}

/// The interpreter's answer to one non-empty submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// Raw input exactly as typed, for the command echo.
    pub echo: String,
    /// Upper-cased command token.
    pub command: String,
    pub outcome: Outcome,
    /// Normalized effect. Failures are already folded into error lines.
    pub effect: CommandEffect,
}

/// Error line for an unrecognized command token.
pub fn unknown_command_message(token: &str) -> String {
    format!("ERROR: Unknown command \"{token}\". Type HELP for available commands.")
}

/// Parses input lines and dispatches them through a [`CommandRegistry`].
pub struct Interpreter {
    registry: CommandRegistry,
}

impl Interpreter {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Interpret one submitted line.
    ///
    /// Returns `None` for empty or all-whitespace input: nothing is echoed
    /// and nothing changes. Never fails; every error becomes an error line
    /// in the returned effect.
    pub fn interpret(&self, raw: &str, ctx: &CommandContext<'_>) -> Option<Interpretation> {
        let parsed = parser::parse(raw)?;
        let echo = raw.to_string();

        let Some(cmd) = self.registry.lookup(&parsed.command) else {
            log::debug!("Unknown command: {}", parsed.command);
            return Some(Interpretation {
                echo,
                effect: CommandEffect::error(unknown_command_message(&parsed.command)),
                command: parsed.command,
                outcome: Outcome::UnknownCommand,
            });
        };

        let args = parsed.arg_refs();
        log::debug!("Dispatching {} {:?}", cmd.name(), args);
        let (outcome, effect) = match cmd.execute(&args, ctx) {
            Ok(effect) => (Outcome::Executed, effect),
            Err(e) => {
                log::debug!("{} failed: {e}", cmd.name());
                (Outcome::Failed, CommandEffect::error(format!("ERROR: {e}")))
            },
        };

        Some(Interpretation {
            echo,
            command: parsed.command,
            outcome,
            effect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{LineKind, OutputLine};
    use vault_types::VaultError;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "ECHO"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "ECHO [text...]"
        }
        fn execute(&self, args: &[&str], _: &CommandContext<'_>) -> Result<CommandEffect> {
            Ok(CommandEffect::lines([args.join(" ")]))
        }
    }

    struct FailCmd;
    impl Command for FailCmd {
        fn name(&self) -> &str {
            "FAIL"
        }
        fn description(&self) -> &str {
            "Always fails"
        }
        fn usage(&self) -> &str {
            "FAIL"
        }
        fn execute(&self, _: &[&str], _: &CommandContext<'_>) -> Result<CommandEffect> {
            Err(VaultError::UnknownSetting("WIDGET".into()))
        }
    }

    fn interpreter() -> Interpreter {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(FailCmd));
        Interpreter::new(reg)
    }

    fn run(interp: &Interpreter, line: &str) -> Option<Interpretation> {
        let settings = Settings::default();
        let snapshot = Arc::new(Snapshot::default());
        let ctx = CommandContext {
            registry: interp.registry(),
            settings: &settings,
            snapshot: &snapshot,
        };
        interp.interpret(line, &ctx)
    }

    #[test]
    fn register_and_execute() {
        let i = interpreter();
        let r = run(&i, "echo hello world").unwrap();
        assert_eq!(r.outcome, Outcome::Executed);
        assert_eq!(
            r.effect.output_lines,
            Some(vec![OutputLine::output("HELLO WORLD")])
        );
    }

    #[test]
    fn echo_is_verbatim() {
        let i = interpreter();
        let r = run(&i, "  Echo MixedCase ").unwrap();
        assert_eq!(r.echo, "  Echo MixedCase ");
        assert_eq!(r.command, "ECHO");
    }

    #[test]
    fn empty_input_is_none() {
        let i = interpreter();
        assert!(run(&i, "").is_none());
        assert!(run(&i, "   ").is_none());
        assert!(run(&i, "\t\n").is_none());
    }

    #[test]
    fn unknown_command_becomes_error_line() {
        let i = interpreter();
        let r = run(&i, "frob").unwrap();
        assert_eq!(r.outcome, Outcome::UnknownCommand);
        let lines = r.effect.output_lines.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(
            lines[0].text,
            "ERROR: Unknown command \"FROB\". Type HELP for available commands."
        );
    }

    #[test]
    fn command_error_becomes_error_line() {
        let i = interpreter();
        let r = run(&i, "fail").unwrap();
        assert_eq!(r.outcome, Outcome::Failed);
        let lines = r.effect.output_lines.unwrap();
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(lines[0].text, "ERROR: Unknown setting \"WIDGET\"");
    }

    #[test]
    fn lookup_case_insensitive() {
        let i = interpreter();
        for name in ["echo", "Echo", "ECHO", "eChO"] {
            assert_eq!(i.registry().lookup(name).map(|c| c.name()), Some("ECHO"));
        }
        assert!(i.registry().lookup("ech").is_none());
    }

    #[test]
    fn register_replaces_existing_command() {
        struct Lower;
        impl Command for Lower {
            fn name(&self) -> &str {
                "echo"
            }
            fn description(&self) -> &str {
                "replacement"
            }
            fn usage(&self) -> &str {
                "echo"
            }
            fn execute(&self, _: &[&str], _: &CommandContext<'_>) -> Result<CommandEffect> {
                Ok(CommandEffect::default())
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(Lower));
        reg.register(Box::new(FailCmd));
        reg.register(Box::new(Lower));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.lookup("ECHO").unwrap().description(), "replacement");
        let order: Vec<&str> = reg.commands().map(|c| c.description()).collect();
        assert_eq!(order, ["replacement", "Always fails"]);
    }

    #[test]
    fn commands_in_registration_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(FailCmd));
        reg.register(Box::new(EchoCmd));
        let names: Vec<&str> = reg.commands().map(|c| c.name()).collect();
        assert_eq!(names, ["FAIL", "ECHO"]);
        let usages: Vec<&str> = reg.commands().map(|c| c.usage()).collect();
        assert_eq!(usages, ["FAIL", "ECHO [text...]"]);
    }

    #[test]
    fn completions_by_prefix() {
        let i = interpreter();
        assert_eq!(i.registry().completions("e"), ["ECHO"]);
        assert_eq!(i.registry().completions(""), ["ECHO", "FAIL"]);
        assert!(i.registry().completions("z").is_empty());
    }

    #[test]
    fn default_creates_empty_registry() {
        let reg = CommandRegistry::default();
        assert!(reg.is_empty());
    }
}

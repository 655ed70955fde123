//! Vault-Tec terminal desktop entry point.
//!
//! Plays the boot sequence, then runs a raw-mode prompt over the session.
//! Up/Down recall earlier input, Tab completes command names, F1/F2/F3
//! switch focus between terminal, balanced, and visual, F5 reloads the
//! snapshot file. Escape or Ctrl-C quits.

mod prompt;
mod render;
mod views;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use vault_data::{FileSnapshot, Snapshot, SnapshotProvider, StaticSnapshot};
use vault_session::{BootSequence, Session, WELCOME_LINES};
use vault_terminal::{CommandRegistry, Interpreter, register_builtins};
use vault_types::{TerminalConfig, resolve_config};

use prompt::{Prompt, PromptAction};
use views::TextViews;

/// Where the character data comes from.
enum Source {
    Sample(StaticSnapshot),
    File(FileSnapshot),
}

impl Source {
    fn open(config: &TerminalConfig) -> Result<Self> {
        match &config.snapshot_path {
            Some(path) => Ok(Self::File(FileSnapshot::open(path).with_context(|| {
                format!("loading snapshot {}", path.display())
            })?)),
            None => {
                log::info!("No snapshot_path configured -- using the sample character");
                Ok(Self::Sample(StaticSnapshot::sample()?))
            },
        }
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        match self {
            Self::Sample(s) => s.snapshot(),
            Self::File(f) => f.snapshot(),
        }
    }

    /// Re-read a file source. Returns `false` for the sample or on failure.
    fn reload(&mut self) -> bool {
        match self {
            Self::Sample(_) => false,
            Self::File(f) => f.reload(),
        }
    }

    fn is_failing(&self) -> bool {
        matches!(self, Self::File(f) if f.is_failing())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, VAULT_CONFIG env var, or ./vault.toml.
    let arg = std::env::args().nth(1);
    let config = resolve_config(arg.as_deref())?;
    let mut source = Source::open(&config)?;
    log::info!(
        "Starting Vault-Tec terminal for {}",
        source.snapshot().character.name
    );

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    log::info!("Registered {} commands", registry.len());
    let interpreter = Interpreter::new(registry);

    let mut session = Session::new(config.settings);

    enable_raw_mode().context("enable raw mode")?;
    let result = run(&config, &mut session, &interpreter, &mut source);
    disable_raw_mode().context("disable raw mode")?;
    println!();
    result
}

/// Play the boot animation. Any key skips it; Esc skips and quits.
///
/// Returns `false` if the user asked to quit.
fn boot(out: &mut impl Write) -> Result<bool> {
    let mut boot = BootSequence::new();
    while let Some(delay) = boot.next_delay_ms() {
        if event::poll(Duration::from_millis(delay.into()))?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
        {
            boot.cancel();
            return Ok(key.code != KeyCode::Esc);
        }
        render::draw_boot_lines(out, boot.tick(delay))?;
    }
    Ok(true)
}

fn run(
    config: &TerminalConfig,
    session: &mut Session,
    interpreter: &Interpreter,
    source: &mut Source,
) -> Result<()> {
    let mut out = io::stdout();
    let views = TextViews::default();
    let mut prompt = Prompt::new();

    if config.boot.enabled && !boot(&mut out)? {
        return Ok(());
    }
    for line in WELCOME_LINES {
        session.push_system(line);
    }

    loop {
        render::draw(
            &mut out,
            session,
            &views,
            &config.prompt,
            prompt.input(),
            prompt.cursor_column(),
        )?;

        let Event::Key(key) = event::read().context("event read")? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match prompt.handle_key(key, interpreter.registry()) {
            PromptAction::Edited => {},
            PromptAction::Submit(raw) => {
                source.reload();
                session.submit(&raw, interpreter, &source.snapshot());
            },
            PromptAction::Focus(mode) => session.set_focus_mode(mode),
            PromptAction::Reload => {
                if source.reload() {
                    session.push_system("SNAPSHOT RELOADED.");
                } else if source.is_failing() {
                    session.push_system("SNAPSHOT UNREADABLE. KEEPING LAST KNOWN DATA.");
                }
            },
            PromptAction::Quit => return Ok(()),
        }
    }
}

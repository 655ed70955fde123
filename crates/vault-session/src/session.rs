//! Session state and the coordinator that applies command effects.

use std::sync::Arc;
use std::time::SystemTime;

use vault_data::Snapshot;
use vault_terminal::{
    CommandContext, Interpretation, Interpreter, LineKind, Outcome, PanelChange, PanelDescriptor,
};
use vault_types::Settings;

use crate::clock::{Clock, SystemClock};

/// Kind of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    /// Echo of submitted input.
    Command,
    Output,
    Error,
    /// Banner lines pushed by the host.
    System,
}

/// One line of the terminal log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub text: String,
    pub timestamp: SystemTime,
}

/// Which side of the split view gets the space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusMode {
    #[default]
    Balanced,
    Terminal,
    Visual,
}

impl FocusMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Balanced => "BALANCED",
            Self::Terminal => "TERMINAL",
            Self::Visual => "VISUAL",
        }
    }
}

/// Interactive terminal session.
///
/// The log is append-only. CLEAR does not drop entries; it moves the start
/// of the visible window past everything logged so far. `split_view_active`
/// is true exactly when a panel is showing.
pub struct Session {
    log: Vec<HistoryEntry>,
    visible_start: usize,
    active_panel: Option<PanelDescriptor>,
    split_view_active: bool,
    focus_mode: FocusMode,
    settings: Settings,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Fresh session: empty log, no panel, balanced focus.
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Box::new(SystemClock))
    }

    /// Fresh session stamping entries from `clock`.
    pub fn with_clock(settings: Settings, clock: Box<dyn Clock>) -> Self {
        Self {
            log: Vec::new(),
            visible_start: 0,
            active_panel: None,
            split_view_active: false,
            focus_mode: FocusMode::default(),
            settings,
            clock,
        }
    }

    /// Interpret `raw` against the current settings and apply the result.
    ///
    /// Returns how the submission resolved, or `None` when the input was
    /// empty and nothing happened.
    pub fn submit(
        &mut self,
        raw: &str,
        interpreter: &Interpreter,
        snapshot: &Arc<Snapshot>,
    ) -> Option<Outcome> {
        let ctx = CommandContext {
            registry: interpreter.registry(),
            settings: &self.settings,
            snapshot,
        };
        let interpretation = interpreter.interpret(raw, &ctx)?;
        let outcome = interpretation.outcome;
        self.apply(interpretation);
        Some(outcome)
    }

    /// Apply one interpretation: echo, output lines, panel, settings.
    pub fn apply(&mut self, interpretation: Interpretation) {
        let Interpretation {
            echo,
            command,
            effect,
            ..
        } = interpretation;

        self.push(HistoryKind::Command, echo);

        for line in effect.output_lines.unwrap_or_default() {
            let kind = match line.kind {
                LineKind::Output => HistoryKind::Output,
                LineKind::Error => HistoryKind::Error,
            };
            self.push(kind, line.text);
        }

        if effect.clear_screen {
            self.visible_start = self.log.len();
        }

        match effect.panel {
            PanelChange::Show(panel) => {
                log::debug!("{command}: showing {} panel", panel.kind);
                self.active_panel = Some(panel);
                self.split_view_active = true;
            },
            PanelChange::Clear => {
                self.active_panel = None;
                self.split_view_active = false;
            },
            PanelChange::Keep => {},
        }

        if let Some(patch) = effect.settings_patch
            && !patch.is_empty()
        {
            log::debug!("{command}: merging settings patch {patch:?}");
            self.settings.merge(&patch);
        }
    }

    /// Append a system banner line.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(HistoryKind::System, text.into());
    }

    fn push(&mut self, kind: HistoryKind, text: String) {
        let timestamp = self.clock.now();
        self.log.push(HistoryEntry {
            kind,
            text,
            timestamp,
        });
    }

    /// Change focus. Does not touch the panel or split view.
    pub fn set_focus_mode(&mut self, mode: FocusMode) {
        self.focus_mode = mode;
    }

    /// Every entry ever logged, oldest first.
    pub fn log(&self) -> &[HistoryEntry] {
        &self.log
    }

    /// Entries logged since the last CLEAR.
    pub fn visible_log(&self) -> &[HistoryEntry] {
        &self.log[self.visible_start..]
    }

    pub fn active_panel(&self) -> Option<&PanelDescriptor> {
        self.active_panel.as_ref()
    }

    pub fn split_view_active(&self) -> bool {
        self.split_view_active
    }

    pub fn focus_mode(&self) -> FocusMode {
        self.focus_mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

//! Command results and panel descriptors.
//!
//! A command never touches session state. It returns a [`CommandEffect`]
//! value and the session coordinator applies it.

use std::fmt;
use std::sync::Arc;

use vault_data::{Snapshot, TimelineMode};
use vault_types::SettingsPatch;

/// Flavor of an emitted output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Output,
    Error,
}

/// One line a command asks to append to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }

    /// Blank spacer row.
    pub fn blank() -> Self {
        Self::output("")
    }
}

/// Visual panel types. Closed: every view must handle all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Id,
    Dossier,
    Sheet,
    Map,
    Locations,
    Timeline,
    Quests,
    Inventory,
    Journal,
    Relations,
}

impl PanelKind {
    pub const ALL: [PanelKind; 10] = [
        Self::Id,
        Self::Dossier,
        Self::Sheet,
        Self::Map,
        Self::Locations,
        Self::Timeline,
        Self::Quests,
        Self::Inventory,
        Self::Journal,
        Self::Relations,
    ];

    /// Wire tag used by the view layer.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Dossier => "dossier",
            Self::Sheet => "sheet",
            Self::Map => "map",
            Self::Locations => "locations",
            Self::Timeline => "timeline",
            Self::Quests => "quests",
            Self::Inventory => "inventory",
            Self::Journal => "journal",
            Self::Relations => "relations",
        }
    }

    /// Resolve a wire tag. Unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Data handed to a panel view. The snapshot is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelData {
    pub snapshot: Arc<Snapshot>,
    /// Location to open directly (LOCATIONS <id>).
    pub selected_location: Option<String>,
    /// Timeline filter (TIMELINE [mode]).
    pub timeline_mode: Option<TimelineMode>,
}

impl PanelData {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self {
            snapshot,
            selected_location: None,
            timeline_mode: None,
        }
    }
}

/// Request to show a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelDescriptor {
    pub kind: PanelKind,
    pub data: PanelData,
}

impl PanelDescriptor {
    pub fn new(kind: PanelKind, data: PanelData) -> Self {
        Self { kind, data }
    }
}

/// What to do with the visual panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelChange {
    /// Leave the panel as it is.
    #[default]
    Keep,
    /// Show or replace the panel.
    Show(PanelDescriptor),
    /// Hide the panel and leave split view.
    Clear,
}

/// Result of executing one command.
///
/// `panel` being an enum makes "show" and "clear" mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandEffect {
    /// Lines to append. `None` leaves the log alone.
    pub output_lines: Option<Vec<OutputLine>>,
    pub panel: PanelChange,
    pub settings_patch: Option<SettingsPatch>,
    /// Hide everything currently in the scrollback from view.
    pub clear_screen: bool,
}

impl CommandEffect {
    /// Effect that only prints lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output_lines: Some(lines.into_iter().map(OutputLine::output).collect()),
            ..Self::default()
        }
    }

    /// Effect carrying a single error line.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            output_lines: Some(vec![OutputLine::error(text)]),
            ..Self::default()
        }
    }

    pub fn with_panel(mut self, kind: PanelKind, data: PanelData) -> Self {
        self.panel = PanelChange::Show(PanelDescriptor::new(kind, data));
        self
    }

    pub fn with_settings(mut self, patch: SettingsPatch) -> Self {
        self.settings_patch = Some(patch);
        self
    }

    /// The panel this effect opens, if any.
    pub fn shown_panel(&self) -> Option<&PanelDescriptor> {
        match &self.panel {
            PanelChange::Show(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_for_every_kind() {
        for kind in PanelKind::ALL {
            assert_eq!(PanelKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(PanelKind::from_tag("pipboy"), None);
        assert_eq!(PanelKind::from_tag("MAP"), None);
    }

    #[test]
    fn lines_effect_has_no_panel() {
        let e = CommandEffect::lines(["", "hello"]);
        let lines = e.output_lines.as_ref().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], OutputLine::blank());
        assert_eq!(e.panel, PanelChange::Keep);
        assert!(e.settings_patch.is_none());
        assert!(e.shown_panel().is_none());
    }

    #[test]
    fn error_effect_is_error_flavored() {
        let e = CommandEffect::error("ERROR: nope");
        let lines = e.output_lines.unwrap();
        assert_eq!(lines[0].kind, LineKind::Error);
    }

    #[test]
    fn with_panel_sets_show() {
        let data = PanelData::new(Arc::new(Snapshot::default()));
        let e = CommandEffect::lines(["x"]).with_panel(PanelKind::Map, data);
        assert_eq!(e.shown_panel().map(|p| p.kind), Some(PanelKind::Map));
    }
}

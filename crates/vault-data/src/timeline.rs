//! Timeline entries and the view modes that filter them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many entries QUICK mode keeps.
pub const QUICK_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Entries visible in the given mode, in stored order.
    pub fn filtered(&self, mode: TimelineMode) -> Vec<&TimelineEntry> {
        match mode {
            TimelineMode::Quick => self.entries.iter().take(QUICK_LIMIT).collect(),
            TimelineMode::Full => self.entries.iter().collect(),
            TimelineMode::Arc => self
                .entries
                .iter()
                .filter(|e| matches!(e.kind, EntryKind::Quest | EntryKind::Milestone))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub date: String,
    pub order: u32,
    pub title: String,
    pub short_summary: String,
    pub links: TimelineLinks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Quest,
    Location,
    Combat,
    Journal,
    Milestone,
    #[default]
    #[serde(other)]
    Other,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Quest => "QUEST",
            Self::Location => "LOCATION",
            Self::Combat => "COMBAT",
            Self::Journal => "JOURNAL",
            Self::Milestone => "MILESTONE",
            Self::Other => "EVENT",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineLinks {
    pub quest_id: Option<String>,
    pub location_id: Option<String>,
    pub journal_id: Option<u32>,
}

/// Timeline view mode selected by `TIMELINE [mode]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimelineMode {
    /// First ten entries.
    Quick,
    /// Every entry.
    #[default]
    Full,
    /// Quest and milestone entries only.
    Arc,
}

impl TimelineMode {
    /// Parse an upper-case mode keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "QUICK" => Some(Self::Quick),
            "FULL" => Some(Self::Full),
            "ARC" => Some(Self::Arc),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Quick => "QUICK",
            Self::Full => "FULL",
            Self::Arc => "ARC",
        }
    }

    /// One-line description shown in the panel header.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Quick => "Top 10 moments",
            Self::Full => "Complete chronological history",
            Self::Arc => "Major narrative beats only",
        }
    }
}

impl fmt::Display for TimelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

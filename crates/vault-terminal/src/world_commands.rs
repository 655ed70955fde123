//! World commands: MAP, LOCATIONS, TIMELINE.

use std::sync::Arc;

use vault_data::TimelineMode;
use vault_types::error::{Result, VaultError};

use crate::commands::banner;
use crate::effect::{CommandEffect, PanelData, PanelKind};
use crate::interpreter::{Command, CommandContext, CommandRegistry};

/// How many timeline titles TIMELINE prints.
const RECENT_EVENTS: usize = 5;

/// Register world commands.
pub fn register_world_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(MapCmd));
    reg.register(Box::new(LocationsCmd));
    reg.register(Box::new(TimelineCmd));
}

// ---------------------------------------------------------------------------
// MAP
// ---------------------------------------------------------------------------

struct MapCmd;
impl Command for MapCmd {
    fn name(&self) -> &str {
        "MAP"
    }
    fn description(&self) -> &str {
        "Show interactive world map"
    }
    fn usage(&self) -> &str {
        "MAP"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let map = &ctx.snapshot.map;
        let mut out = banner("WORLD MAP");
        out.extend([
            "  Loading interactive map...".to_string(),
            "  Click locations in visual panel for details.".to_string(),
            String::new(),
            format!(
                "  Locations Visited: {}/{}",
                map.visited_count(),
                map.locations.len()
            ),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out)
            .with_panel(PanelKind::Map, PanelData::new(Arc::clone(ctx.snapshot))))
    }
}

// ---------------------------------------------------------------------------
// LOCATIONS
// ---------------------------------------------------------------------------

struct LocationsCmd;
impl Command for LocationsCmd {
    fn name(&self) -> &str {
        "LOCATIONS"
    }
    fn description(&self) -> &str {
        "Browse location archive or view specific location"
    }
    fn usage(&self) -> &str {
        "LOCATIONS [id]"
    }
    fn execute(&self, args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let s = ctx.snapshot;
        let Some(&id) = args.first() else {
            let mut out = banner("LOCATION ARCHIVE");
            out.extend([
                format!("  Total Locations: {}", s.locations.len()),
                format!("  Visited: {}", s.visited_location_count()),
                String::new(),
                "  Use LOCATIONS [id] to view specific location.".to_string(),
                "  See visual panel for filterable index.".to_string(),
                String::new(),
            ]);
            return Ok(CommandEffect::lines(out)
                .with_panel(PanelKind::Locations, PanelData::new(Arc::clone(s))));
        };

        let location = s
            .location(id)
            .ok_or_else(|| VaultError::UnknownLocation(id.to_string()))?;

        let mut out = banner(&format!("LOCATION: {}", location.name.to_uppercase()));
        out.extend([
            format!("  {}", location.summary),
            String::new(),
            format!("  First Arrival: {}", location.first_arrival),
            format!("  Key Events: {}", location.events.len()),
            format!("  Notable NPCs: {}", location.npcs.len()),
            String::new(),
            "  See visual panel for full details.".to_string(),
            String::new(),
        ]);
        let data = PanelData {
            selected_location: Some(id.to_string()),
            ..PanelData::new(Arc::clone(s))
        };
        Ok(CommandEffect::lines(out).with_panel(PanelKind::Locations, data))
    }
}

// ---------------------------------------------------------------------------
// TIMELINE
// ---------------------------------------------------------------------------

struct TimelineCmd;
impl Command for TimelineCmd {
    fn name(&self) -> &str {
        "TIMELINE"
    }
    fn description(&self) -> &str {
        "View chronological event timeline\nModes: QUICK, FULL, ARC (default: FULL)"
    }
    fn usage(&self) -> &str {
        "TIMELINE [mode]"
    }
    fn execute(&self, args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let mode = match args.first() {
            None => TimelineMode::default(),
            Some(&word) => TimelineMode::from_keyword(word).ok_or_else(|| {
                VaultError::InvalidArgument(format!(
                    "Unknown timeline mode \"{word}\". Use QUICK, FULL, or ARC."
                ))
            })?,
        };

        let entries = ctx.snapshot.timeline.filtered(mode);
        let mut out = banner(&format!("TIMELINE - {mode} MODE"));
        out.extend([
            format!("  Showing {} events", entries.len()),
            String::new(),
            "  Recent Events:".to_string(),
        ]);
        out.extend(
            entries
                .iter()
                .take(RECENT_EVENTS)
                .map(|e| format!("  {}. {}", e.order, e.title)),
        );
        out.extend([
            String::new(),
            "  See visual panel for complete timeline.".to_string(),
            String::new(),
        ]);
        let data = PanelData {
            timeline_mode: Some(mode),
            ..PanelData::new(Arc::clone(ctx.snapshot))
        };
        Ok(CommandEffect::lines(out).with_panel(PanelKind::Timeline, data))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::commands::test_support::*;
    use crate::effect::PanelKind;
    use vault_data::{EntryKind, Snapshot, TimelineEntry, TimelineMode};
    use vault_types::{Settings, VaultError};

    fn snapshot_with_timeline(n: usize) -> Arc<Snapshot> {
        let mut s = Snapshot::sample().unwrap();
        s.timeline.entries = (0..n)
            .map(|i| TimelineEntry {
                id: format!("t{i}"),
                kind: if i % 3 == 0 {
                    EntryKind::Milestone
                } else {
                    EntryKind::Location
                },
                order: i as u32 + 1,
                title: format!("Event {}", i + 1),
                ..Default::default()
            })
            .collect();
        Arc::new(s)
    }

    #[test]
    fn map_counts_visited() {
        let effect = exec("MAP", &[], &Settings::default(), &sample()).unwrap();
        assert!(texts(&effect).contains(&"  Locations Visited: 4/6"));
        assert_eq!(effect.shown_panel().unwrap().kind, PanelKind::Map);
    }

    #[test]
    fn locations_without_id_opens_archive() {
        let effect = exec("LOCATIONS", &[], &Settings::default(), &sample()).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Total Locations: 4"));
        assert!(lines.contains(&"  Visited: 4"));
        let panel = effect.shown_panel().unwrap();
        assert_eq!(panel.kind, PanelKind::Locations);
        assert!(panel.data.selected_location.is_none());
    }

    #[test]
    fn locations_with_known_id_selects_it() {
        let effect = exec("LOCATIONS", &["VAULT13"], &Settings::default(), &sample()).unwrap();
        let lines = texts(&effect);
        assert!(lines.iter().any(|l| l.contains("LOCATION: VAULT 13")));
        assert!(lines.contains(&"  First Arrival: Day 1 - Born here"));
        assert!(lines.contains(&"  Notable NPCs: 2"));
        let panel = effect.shown_panel().unwrap();
        assert_eq!(panel.kind, PanelKind::Locations);
        assert_eq!(panel.data.selected_location.as_deref(), Some("VAULT13"));
    }

    #[test]
    fn locations_with_hyphenated_id() {
        let effect = exec("LOCATIONS", &["SHADY-SANDS"], &Settings::default(), &sample()).unwrap();
        assert!(texts(&effect).contains(&"  Key Events: 2"));
    }

    #[test]
    fn locations_with_unknown_id_fails() {
        let err = exec("LOCATIONS", &["NOWHERE"], &Settings::default(), &sample()).unwrap_err();
        assert!(matches!(err, VaultError::UnknownLocation(ref id) if id == "NOWHERE"));
        assert_eq!(err.to_string(), "Location \"NOWHERE\" not found.");
    }

    #[test]
    fn timeline_defaults_to_full() {
        let snap = snapshot_with_timeline(15);
        let effect = exec("TIMELINE", &[], &Settings::default(), &snap).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Showing 15 events"));
        let panel = effect.shown_panel().unwrap();
        assert_eq!(panel.data.timeline_mode, Some(TimelineMode::Full));
    }

    #[test]
    fn timeline_quick_keeps_ten() {
        let snap = snapshot_with_timeline(15);
        let effect = exec("TIMELINE", &["QUICK"], &Settings::default(), &snap).unwrap();
        assert!(texts(&effect).contains(&"  Showing 10 events"));
        let panel = effect.shown_panel().unwrap();
        assert_eq!(panel.kind, PanelKind::Timeline);
        let mode = panel.data.timeline_mode.unwrap();
        assert_eq!(mode, TimelineMode::Quick);
        assert_eq!(panel.data.snapshot.timeline.filtered(mode).len(), 10);
    }

    #[test]
    fn timeline_prints_top_five_titles() {
        let snap = snapshot_with_timeline(15);
        let effect = exec("TIMELINE", &["FULL"], &Settings::default(), &snap).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  1. Event 1"));
        assert!(lines.contains(&"  5. Event 5"));
        assert!(!lines.contains(&"  6. Event 6"));
    }

    #[test]
    fn timeline_arc_filters() {
        let snap = snapshot_with_timeline(9);
        let effect = exec("TIMELINE", &["ARC"], &Settings::default(), &snap).unwrap();
        assert!(texts(&effect).contains(&"  Showing 3 events"));
    }

    #[test]
    fn timeline_unknown_mode_fails() {
        let err = exec("TIMELINE", &["SIDEWAYS"], &Settings::default(), &sample()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown timeline mode \"SIDEWAYS\". Use QUICK, FULL, or ARC."
        );
    }
}

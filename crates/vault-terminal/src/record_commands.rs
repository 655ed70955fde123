//! Record commands: QUESTS, INVENTORY, JOURNAL, RELATIONS.

use std::sync::Arc;

use vault_data::QuestStatus;
use vault_types::error::Result;

use crate::commands::{banner, rule};
use crate::effect::{CommandEffect, PanelData, PanelKind};
use crate::interpreter::{Command, CommandContext, CommandRegistry};

/// How many notable items INVENTORY prints.
const NOTABLE_ITEMS: usize = 5;

/// Characters of the first journal entry JOURNAL quotes.
const EXCERPT_CHARS: usize = 60;

/// Register quest, inventory, journal, and relations commands.
pub fn register_record_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(QuestsCmd));
    reg.register(Box::new(InventoryCmd));
    reg.register(Box::new(JournalCmd));
    reg.register(Box::new(RelationsCmd));
}

// ---------------------------------------------------------------------------
// QUESTS
// ---------------------------------------------------------------------------

struct QuestsCmd;
impl Command for QuestsCmd {
    fn name(&self) -> &str {
        "QUESTS"
    }
    fn description(&self) -> &str {
        "Display quest log"
    }
    fn usage(&self) -> &str {
        "QUESTS"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let s = ctx.snapshot;
        let mut out = banner("QUEST LOG");
        out.extend([
            format!("  Active Quests: {}", s.quest_count(QuestStatus::Active)),
            format!("  Completed: {}", s.quest_count(QuestStatus::Completed)),
            format!("  Failed: {}", s.quest_count(QuestStatus::Failed)),
            String::new(),
            "  Highlights:".to_string(),
        ]);
        out.extend(
            s.quests
                .iter()
                .filter(|q| q.highlight)
                .map(|q| format!("  - {} [{}]", q.name, q.status.label())),
        );
        out.extend([
            String::new(),
            "  See visual panel for full quest details.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out).with_panel(PanelKind::Quests, PanelData::new(Arc::clone(s))))
    }
}

// ---------------------------------------------------------------------------
// INVENTORY
// ---------------------------------------------------------------------------

struct InventoryCmd;
impl Command for InventoryCmd {
    fn name(&self) -> &str {
        "INVENTORY"
    }
    fn description(&self) -> &str {
        "Show equipped items and notable possessions"
    }
    fn usage(&self) -> &str {
        "INVENTORY"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let inv = &ctx.snapshot.inventory;
        let mut out = banner("INVENTORY");
        out.push(rule("EQUIPPED"));
        out.extend(
            inv.equipped
                .iter()
                .map(|i| format!("  {}: {}", i.slot, i.name)),
        );
        out.push(String::new());
        out.push(rule("NOTABLE ITEMS"));
        out.extend(
            inv.notable
                .iter()
                .take(NOTABLE_ITEMS)
                .map(|i| format!("  {} x{}", i.name, i.quantity)),
        );
        out.extend([
            String::new(),
            "  See visual panel for complete inventory.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out)
            .with_panel(PanelKind::Inventory, PanelData::new(Arc::clone(ctx.snapshot))))
    }
}

// ---------------------------------------------------------------------------
// JOURNAL
// ---------------------------------------------------------------------------

/// First `max` characters of `text`, on a char boundary.
fn excerpt(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

struct JournalCmd;
impl Command for JournalCmd {
    fn name(&self) -> &str {
        "JOURNAL"
    }
    fn description(&self) -> &str {
        "Read in-character journal entries"
    }
    fn usage(&self) -> &str {
        "JOURNAL"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let journal = &ctx.snapshot.journal;
        let mut out = banner("PERSONAL JOURNAL");
        out.push(format!("  Total Entries: {}", journal.len()));
        out.push(String::new());
        match journal.first() {
            Some(first) => {
                out.push("  Recent Entry:".to_string());
                out.push(format!("  \"{}...\"", excerpt(&first.entry, EXCERPT_CHARS)));
            },
            None => out.push("  No entries recorded.".to_string()),
        }
        out.extend([
            String::new(),
            "  See visual panel for all entries.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out)
            .with_panel(PanelKind::Journal, PanelData::new(Arc::clone(ctx.snapshot))))
    }
}

// ---------------------------------------------------------------------------
// RELATIONS
// ---------------------------------------------------------------------------

struct RelationsCmd;
impl Command for RelationsCmd {
    fn name(&self) -> &str {
        "RELATIONS"
    }
    fn description(&self) -> &str {
        "View faction standings and reputation"
    }
    fn usage(&self) -> &str {
        "RELATIONS"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let rel = &ctx.snapshot.relations;
        let mut out = banner("FACTION RELATIONS");
        out.push(format!("  Overall Karma: {}", rel.karma));
        out.push(String::new());
        out.push(rule("FACTION STANDINGS"));
        out.extend(
            rel.factions
                .iter()
                .map(|f| format!("  {}: {}", f.name, f.reputation)),
        );
        out.extend([
            String::new(),
            "  See visual panel for detailed reputation information.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out)
            .with_panel(PanelKind::Relations, PanelData::new(Arc::clone(ctx.snapshot))))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::commands::test_support::*;
    use vault_data::Snapshot;
    use vault_types::Settings;

    #[test]
    fn quests_counts_and_highlights() {
        let effect = exec("QUESTS", &[], &Settings::default(), &sample()).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Active Quests: 1"));
        assert!(lines.contains(&"  Completed: 2"));
        assert!(lines.contains(&"  Failed: 0"));
        assert!(lines.contains(&"  - Find the Water Chip [ACTIVE]"));
        assert!(lines.contains(&"  - Rescue Tandi [COMPLETED]"));
        assert!(!lines.iter().any(|l| l.contains("Stop the Raiders")));
        assert_eq!(effect.shown_panel().unwrap().kind, PanelKind::Quests);
    }

    #[test]
    fn inventory_equipped_and_notable() {
        let effect = exec("INVENTORY", &[], &Settings::default(), &sample()).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Weapon: 10mm Pistol"));
        assert!(lines.contains(&"  Armor: Leather Armor"));
        assert!(lines.contains(&"  Stimpak x8"));
        assert!(lines.contains(&"  Bottle Caps x450"));
        assert_eq!(effect.shown_panel().unwrap().kind, PanelKind::Inventory);
    }

    #[test]
    fn inventory_caps_notable_at_five() {
        let mut s = Snapshot::sample().unwrap();
        let extra = s.inventory.notable[0].clone();
        s.inventory.notable.push(vault_data::snapshot::NotableItem {
            name: "Sixth Item".into(),
            ..extra
        });
        let effect = exec("INVENTORY", &[], &Settings::default(), &Arc::new(s)).unwrap();
        assert!(!texts(&effect).iter().any(|l| l.contains("Sixth Item")));
    }

    #[test]
    fn journal_excerpt_is_sixty_chars() {
        let effect = exec("JOURNAL", &[], &Settings::default(), &sample()).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Total Entries: 3"));
        let quote = lines.iter().find(|l| l.starts_with("  \"")).unwrap();
        let inner = quote
            .trim_start_matches("  \"")
            .trim_end_matches("...\"");
        assert_eq!(inner.chars().count(), 60);
        assert!(inner.starts_with("The wasteland is harsher"));
    }

    #[test]
    fn journal_empty() {
        let s = Snapshot::from_json(r#"{"character": {"name": "Nobody"}}"#).unwrap();
        let effect = exec("JOURNAL", &[], &Settings::default(), &Arc::new(s)).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Total Entries: 0"));
        assert!(lines.contains(&"  No entries recorded."));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo", 2), "hé");
        assert_eq!(excerpt("short", 60), "short");
    }

    #[test]
    fn relations_lists_factions() {
        let effect = exec("RELATIONS", &[], &Settings::default(), &sample()).unwrap();
        let lines = texts(&effect);
        assert!(lines.contains(&"  Overall Karma: Good (250)"));
        assert!(lines.contains(&"  Shady Sands: Idolized"));
        assert!(lines.contains(&"  Brotherhood of Steel: Unknown"));
        assert_eq!(effect.shown_panel().unwrap().kind, PanelKind::Relations);
    }
}

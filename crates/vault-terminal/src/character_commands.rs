//! Character commands: DOSSIER, ID, SHEET.

use std::sync::Arc;

use vault_types::error::Result;

use crate::commands::{banner, rule};
use crate::effect::{CommandEffect, PanelData, PanelKind};
use crate::interpreter::{Command, CommandContext, CommandRegistry};

/// How many skills SHEET prints.
const TOP_SKILLS: usize = 5;

/// Register character commands.
pub fn register_character_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(DossierCmd));
    reg.register(Box::new(IdCmd));
    reg.register(Box::new(SheetCmd));
}

// ---------------------------------------------------------------------------
// DOSSIER
// ---------------------------------------------------------------------------

struct DossierCmd;
impl Command for DossierCmd {
    fn name(&self) -> &str {
        "DOSSIER"
    }
    fn description(&self) -> &str {
        "Display character summary overview"
    }
    fn usage(&self) -> &str {
        "DOSSIER"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let s = ctx.snapshot;
        let mut out = banner("CHARACTER DOSSIER");
        out.extend([
            format!("  NAME: {}", s.character.name),
            format!("  ORIGIN: {}", s.character.origin),
            format!(
                "  LEVEL: {}  |  AGE: {}  |  PRONOUNS: {}",
                s.stats.level, s.character.age, s.character.pronouns
            ),
            String::new(),
            format!("  {}", s.character.tagline),
            String::new(),
            rule("CURRENT STATUS"),
            format!(
                "  HP: {}/{}  |  XP: {}",
                s.stats.hp, s.stats.max_hp, s.stats.experience
            ),
            format!("  LOCATION: {}", s.current_location),
            format!("  KARMA: {}", s.relations.karma),
            String::new(),
            "  Use ID for detailed identification card.".to_string(),
            "  Use SHEET for complete statistics.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out)
            .with_panel(PanelKind::Dossier, PanelData::new(Arc::clone(s))))
    }
}

// ---------------------------------------------------------------------------
// ID
// ---------------------------------------------------------------------------

struct IdCmd;
impl Command for IdCmd {
    fn name(&self) -> &str {
        "ID"
    }
    fn description(&self) -> &str {
        "View Vault-Tec identification card"
    }
    fn usage(&self) -> &str {
        "ID"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let mut out = banner("VAULT-TEC IDENTIFICATION CARD");
        out.extend([
            "  Loading visual ID card...".to_string(),
            "  See visual panel for complete identification document.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out)
            .with_panel(PanelKind::Id, PanelData::new(Arc::clone(ctx.snapshot))))
    }
}

// ---------------------------------------------------------------------------
// SHEET
// ---------------------------------------------------------------------------

struct SheetCmd;
impl Command for SheetCmd {
    fn name(&self) -> &str {
        "SHEET"
    }
    fn description(&self) -> &str {
        "Display detailed character sheet"
    }
    fn usage(&self) -> &str {
        "SHEET"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let s = ctx.snapshot;
        let mut out = banner("CHARACTER SHEET");
        out.push(rule("S.P.E.C.I.A.L."));
        for (name, value) in s.special.entries() {
            let label = format!("{name}:");
            out.push(format!("  {label:<14}{value}"));
        }
        out.push(String::new());
        out.push(rule("TOP SKILLS"));
        out.extend(
            s.skills
                .iter()
                .take(TOP_SKILLS)
                .map(|sk| format!("  {}: {}%", sk.name, sk.value)),
        );
        out.extend([
            String::new(),
            "  See visual panel for complete details.".to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(out).with_panel(PanelKind::Sheet, PanelData::new(Arc::clone(s))))
    }
}

//! Built-in command registration plus HELP and CLEAR.

use vault_types::error::Result;

use crate::effect::{CommandEffect, PanelChange};
use crate::interpreter::{Command, CommandContext, CommandRegistry};

/// Inner width of the box-drawn headers.
const BANNER_WIDTH: usize = 62;

/// Register every built-in command into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    crate::register_character_commands(reg);
    crate::register_world_commands(reg);
    crate::register_record_commands(reg);
    crate::register_settings_commands(reg);
}

/// Boxed section header, framed by blank spacer lines.
pub(crate) fn banner(title: &str) -> Vec<String> {
    let title: String = title.chars().take(BANNER_WIDTH).collect();
    vec![
        String::new(),
        format!("╔{}╗", "═".repeat(BANNER_WIDTH)),
        format!("║{title:^BANNER_WIDTH$}║"),
        format!("╚{}╝", "═".repeat(BANNER_WIDTH)),
        String::new(),
    ]
}

/// Inline sub-heading, e.g. `─── EQUIPPED ───`.
pub(crate) fn rule(title: &str) -> String {
    format!("  ─── {title} ───")
}

// ---------------------------------------------------------------------------
// HELP
// ---------------------------------------------------------------------------

const HELP_RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Width of the usage column in the HELP reference.
const USAGE_COLUMN: usize = 17;

/// Reference lines for one command. Extra description lines are indented
/// under the first.
fn reference_lines(cmd: &dyn Command) -> Vec<String> {
    let mut desc = cmd.description().lines();
    let first = desc.next().unwrap_or_default();
    let mut lines = vec![format!("  {:<USAGE_COLUMN$}- {first}", cmd.usage())];
    lines.extend(desc.map(|more| format!("  {:<USAGE_COLUMN$}  {more}", "")));
    lines
}

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "HELP"
    }
    fn description(&self) -> &str {
        "Display this command reference"
    }
    fn usage(&self) -> &str {
        "HELP"
    }
    fn execute(&self, _args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let mut lines = vec![
            String::new(),
            HELP_RULE.to_string(),
            "  VAULT-TEC UNIFIED OPERATING SYSTEM - COMMAND REFERENCE".to_string(),
            HELP_RULE.to_string(),
            String::new(),
        ];
        lines.extend(ctx.registry.commands().flat_map(reference_lines));
        lines.extend([
            String::new(),
            "  Navigation: Use arrow keys to recall previous commands".to_string(),
            "  Tip: Commands are not case-sensitive".to_string(),
            String::new(),
            HELP_RULE.to_string(),
            String::new(),
        ]);
        Ok(CommandEffect::lines(lines))
    }
}

// ---------------------------------------------------------------------------
// CLEAR
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "CLEAR"
    }
    fn description(&self) -> &str {
        "Clear terminal output"
    }
    fn usage(&self) -> &str {
        "CLEAR"
    }
    fn execute(&self, _args: &[&str], _ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        Ok(CommandEffect {
            output_lines: Some(Vec::new()),
            panel: PanelChange::Clear,
            settings_patch: None,
            clear_screen: true,
        })
    }
}

//! SETTINGS command: show or toggle display options.

use vault_types::SettingsPatch;
use vault_types::error::{Result, VaultError};
use vault_types::settings::on_off;

use crate::commands::banner;
use crate::effect::CommandEffect;
use crate::interpreter::{Command, CommandContext, CommandRegistry};

/// Register the SETTINGS command.
pub fn register_settings_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(SettingsCmd));
}

/// Toggles reachable from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Scanlines,
    Sound,
    Stream,
}

impl Toggle {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "SCANLINES" => Some(Self::Scanlines),
            "SOUND" => Some(Self::Sound),
            "STREAM" => Some(Self::Stream),
            _ => None,
        }
    }

    fn patch(self, on: bool) -> SettingsPatch {
        let mut patch = SettingsPatch::default();
        match self {
            Self::Scanlines => patch.scanlines_enabled = Some(on),
            Self::Sound => patch.sound_enabled = Some(on),
            Self::Stream => patch.stream_mode_enabled = Some(on),
        }
        patch
    }

    fn confirmation(self, on: bool) -> String {
        let state = if on { "ENABLED" } else { "DISABLED" };
        match self {
            Self::Scanlines => format!("  Scanlines: {state}"),
            Self::Sound => format!("  Sound effects: {state}"),
            Self::Stream if on => {
                "  Stream Mode: ENABLED - Enhanced readability for streaming".to_string()
            },
            Self::Stream => "  Stream Mode: DISABLED".to_string(),
        }
    }
}

fn parse_on_off(value: Option<&str>) -> Option<bool> {
    match value? {
        "ON" => Some(true),
        "OFF" => Some(false),
        _ => None,
    }
}

struct SettingsCmd;
impl Command for SettingsCmd {
    fn name(&self) -> &str {
        "SETTINGS"
    }
    fn description(&self) -> &str {
        "Adjust terminal and display options"
    }
    fn usage(&self) -> &str {
        "SETTINGS"
    }
    fn execute(&self, args: &[&str], ctx: &CommandContext<'_>) -> Result<CommandEffect> {
        let Some(&name) = args.first() else {
            let s = ctx.settings;
            let mut out = banner("SETTINGS");
            out.extend([
                "  Current Settings:".to_string(),
                format!("  - CRT Intensity: {}", s.crt_intensity),
                format!("  - Scanlines: {}", on_off(s.scanlines_enabled)),
                format!("  - Text Speed: {}ms", s.text_speed_ms),
                format!("  - Sound: {}", on_off(s.sound_enabled)),
                format!("  - Stream Mode: {}", on_off(s.stream_mode_enabled)),
                String::new(),
                "  Commands:".to_string(),
                "  SETTINGS SCANLINES [ON|OFF]".to_string(),
                "  SETTINGS SOUND [ON|OFF]".to_string(),
                "  SETTINGS STREAM [ON|OFF]".to_string(),
                String::new(),
            ]);
            return Ok(CommandEffect::lines(out));
        };

        let toggle =
            Toggle::from_name(name).ok_or_else(|| VaultError::UnknownSetting(name.to_string()))?;
        let on = parse_on_off(args.get(1).copied()).ok_or_else(|| {
            VaultError::InvalidArgument(format!("Expected ON or OFF for {name}"))
        })?;

        log::info!("Setting {name} -> {}", on_off(on));
        Ok(CommandEffect::lines([toggle.confirmation(on)]).with_settings(toggle.patch(on)))
    }
}

//! Display settings and their merge-patch.

use serde::{Deserialize, Serialize};

/// Terminal display settings.
///
/// There is a single instance per session. It is never replaced wholesale;
/// changes arrive as a [`SettingsPatch`] and are merged field by field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CRT glow intensity multiplier.
    pub crt_intensity: f32,
    /// Whether the scanline overlay is drawn.
    pub scanlines_enabled: bool,
    /// Per-character delay for typed-out text, in milliseconds.
    pub text_speed_ms: u32,
    /// Whether UI sound effects play.
    pub sound_enabled: bool,
    /// High-readability layout for streaming.
    pub stream_mode_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crt_intensity: 1.0,
            scanlines_enabled: true,
            text_speed_ms: 30,
            sound_enabled: false,
            stream_mode_enabled: false,
        }
    }
}

impl Settings {
    /// Merge a patch into these settings. Fields absent from the patch keep
    /// their current value. No range validation is applied.
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.crt_intensity {
            self.crt_intensity = v;
        }
        if let Some(v) = patch.scanlines_enabled {
            self.scanlines_enabled = v;
        }
        if let Some(v) = patch.text_speed_ms {
            self.text_speed_ms = v;
        }
        if let Some(v) = patch.sound_enabled {
            self.sound_enabled = v;
        }
        if let Some(v) = patch.stream_mode_enabled {
            self.stream_mode_enabled = v;
        }
    }
}

/// A partial [`Settings`] record. `None` fields are left untouched by
/// [`Settings::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub crt_intensity: Option<f32>,
    pub scanlines_enabled: Option<bool>,
    pub text_speed_ms: Option<u32>,
    pub sound_enabled: Option<bool>,
    pub stream_mode_enabled: Option<bool>,
}

impl SettingsPatch {
    /// True if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Render a boolean toggle the way the terminal prints it.
pub fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_boot_state() {
        let s = Settings::default();
        assert_eq!(s.crt_intensity, 1.0);
        assert!(s.scanlines_enabled);
        assert_eq!(s.text_speed_ms, 30);
        assert!(!s.sound_enabled);
        assert!(!s.stream_mode_enabled);
    }

    #[test]
    fn merge_only_touches_patched_fields() {
        let mut s = Settings::default();
        s.merge(&SettingsPatch {
            scanlines_enabled: Some(false),
            ..Default::default()
        });
        assert_eq!(
            s,
            Settings {
                scanlines_enabled: false,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn merge_empty_patch_is_noop() {
        let mut s = Settings {
            crt_intensity: 0.4,
            sound_enabled: true,
            ..Settings::default()
        };
        let before = s;
        s.merge(&SettingsPatch::default());
        assert_eq!(s, before);
    }

    #[test]
    fn merge_does_not_bound_text_speed() {
        let mut s = Settings::default();
        s.merge(&SettingsPatch {
            text_speed_ms: Some(u32::MAX),
            ..Default::default()
        });
        assert_eq!(s.text_speed_ms, u32::MAX);
    }

    #[test]
    fn patch_is_empty() {
        assert!(SettingsPatch::default().is_empty());
        let p = SettingsPatch {
            sound_enabled: Some(true),
            ..Default::default()
        };
        assert!(!p.is_empty());
    }

    #[test]
    fn settings_deserialize_partial_toml() {
        let s: Settings = toml::from_str("sound_enabled = true").unwrap();
        assert!(s.sound_enabled);
        assert!(s.scanlines_enabled);
        assert_eq!(s.text_speed_ms, 30);
    }

    #[test]
    fn on_off_labels() {
        assert_eq!(on_off(true), "ON");
        assert_eq!(on_off(false), "OFF");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn patch_strategy() -> impl Strategy<Value = SettingsPatch> {
            (
                proptest::option::of(0.0f32..4.0),
                proptest::option::of(any::<bool>()),
                proptest::option::of(any::<u32>()),
                proptest::option::of(any::<bool>()),
                proptest::option::of(any::<bool>()),
            )
                .prop_map(|(crt, scan, speed, sound, stream)| SettingsPatch {
                    crt_intensity: crt,
                    scanlines_enabled: scan,
                    text_speed_ms: speed,
                    sound_enabled: sound,
                    stream_mode_enabled: stream,
                })
        }

        proptest! {
            #[test]
            fn merge_is_idempotent(patch in patch_strategy()) {
                let mut once = Settings::default();
                once.merge(&patch);
                let mut twice = once;
                twice.merge(&patch);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn unpatched_fields_survive(patch in patch_strategy()) {
                let base = Settings::default();
                let mut merged = base;
                merged.merge(&patch);
                if patch.scanlines_enabled.is_none() {
                    prop_assert_eq!(merged.scanlines_enabled, base.scanlines_enabled);
                }
                if patch.text_speed_ms.is_none() {
                    prop_assert_eq!(merged.text_speed_ms, base.text_speed_ms);
                }
                if patch.sound_enabled.is_none() {
                    prop_assert_eq!(merged.sound_enabled, base.sound_enabled);
                }
                if patch.stream_mode_enabled.is_none() {
                    prop_assert_eq!(merged.stream_mode_enabled, base.stream_mode_enabled);
                }
            }
        }
    }
}

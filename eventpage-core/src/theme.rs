//! Theme Presets
//!
//! A closed catalog. Applying a preset replaces the five colors and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{ConfigError, EventConfig, ThemeColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    Default,
    Midnight,
    Sakura,
    Matcha,
    Ink,
    Cornell,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 6] = [
        Self::Default,
        Self::Midnight,
        Self::Sakura,
        Self::Matcha,
        Self::Ink,
        Self::Cornell,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Midnight => "midnight",
            Self::Sakura => "sakura",
            Self::Matcha => "matcha",
            Self::Ink => "ink",
            Self::Cornell => "cornell",
        }
    }

    /// accent, gold, paper, dark, ink
    fn palette(self) -> [&'static str; 5] {
        match self {
            Self::Default => ["#c23b22", "#b8860b", "#f5f0e8", "#0a0a0a", "#1a1a1a"],
            Self::Midnight => ["#4a7dff", "#a0a0a0", "#eef1f6", "#0a0e1a", "#1a1e2a"],
            Self::Sakura => ["#d4737a", "#c4956a", "#faf5f3", "#1a0a0e", "#2a1a1e"],
            Self::Matcha => ["#5a8a5a", "#a09050", "#f2f5ee", "#0a1a0a", "#1a2a1a"],
            Self::Ink => ["#888888", "#666666", "#fafafa", "#000000", "#111111"],
            Self::Cornell => ["#b31b1b", "#8b0000", "#faf8f5", "#0a0404", "#1a1010"],
        }
    }

    pub fn colors(self) -> ThemeColors {
        let [accent, gold, paper, dark, ink] = self.palette();
        ThemeColors {
            accent: accent.into(),
            gold: gold.into(),
            paper: paper.into(),
            dark: dark.into(),
            ink: ink.into(),
        }
    }

    pub fn apply(self, config: &mut EventConfig) {
        config.colors = self.colors();
        tracing::debug!(preset = self.name(), "Applied theme preset");
    }

    /// The preset whose accent the record currently uses, if any.
    pub fn active(config: &EventConfig) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.palette()[0].eq_ignore_ascii_case(&config.colors.accent))
    }
}

impl FromStr for ThemePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_touches_colors() {
        let mut config = EventConfig::default();
        config.event_name_en = "Sake Night".into();
        config.sections.quote = false;
        let before = config.clone();

        ThemePreset::Midnight.apply(&mut config);

        assert_eq!(config.colors, ThemePreset::Midnight.colors());
        assert_eq!(config.event_name_en, before.event_name_en);
        assert_eq!(config.sections, before.sections);
        assert_eq!(config.inclusions, before.inclusions);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("Sakura".parse::<ThemePreset>().unwrap(), ThemePreset::Sakura);
        assert!(matches!(
            "neon".parse::<ThemePreset>(),
            Err(ConfigError::UnknownPreset(name)) if name == "neon"
        ));
    }

    #[test]
    fn test_active_preset_follows_accent() {
        let mut config = EventConfig::default();
        assert_eq!(ThemePreset::active(&config), Some(ThemePreset::Default));
        ThemePreset::Cornell.apply(&mut config);
        assert_eq!(ThemePreset::active(&config), Some(ThemePreset::Cornell));
        config.colors.accent = "#123456".into();
        assert_eq!(ThemePreset::active(&config), None);
    }

    #[test]
    fn test_catalog_colors_are_well_formed() {
        for preset in ThemePreset::ALL {
            for (_, value) in preset.colors().entries() {
                assert!(crate::color::is_valid_hex(value), "{preset}: {value}");
            }
        }
    }
}

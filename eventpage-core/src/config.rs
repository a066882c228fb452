//! Configuration Record - Everything the Page Shows
//!
//! Keys follow the editor's camelCase names. Every field has a default, so a
//! partial JSON document is a complete record.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const INCLUSION_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown theme preset: {0}")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventConfig {
    pub event_name_en: String,
    pub event_name_jp: String,
    pub event_date: String,
    pub event_date_card: String,
    pub event_time: String,
    pub event_venue: String,
    pub event_venue_note: String,
    pub event_price: String,
    pub event_price_note: String,
    pub event_capacity: String,
    #[serde(rename = "eventURL")]
    pub event_url: String,

    pub hero_tagline: String,
    pub transition_jp: String,
    pub transition_sub: String,
    pub exp_headline: String,
    pub exp_desc: String,
    pub quote_text: String,
    pub quote_attr: String,

    pub inclusions: [Inclusion; INCLUSION_COUNT],

    #[serde(flatten)]
    pub colors: ThemeColors,

    #[serde(flatten)]
    pub sections: SectionFlags,
}

/// One "what's included" entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inclusion {
    pub title: String,
    pub detail: String,
}

impl Inclusion {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub accent: String,
    pub gold: String,
    pub paper: String,
    pub dark: String,
    pub ink: String,
}

impl ThemeColors {
    /// Field name and value, in editor order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("accent", &self.accent),
            ("gold", &self.gold),
            ("paper", &self.paper),
            ("dark", &self.dark),
            ("ink", &self.ink),
        ]
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        crate::theme::ThemePreset::Default.colors()
    }
}

/// Visibility of the optional sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionFlags {
    #[serde(rename = "showPreloader")]
    pub preloader: bool,
    #[serde(rename = "showTransition")]
    pub transition: bool,
    #[serde(rename = "showExperience")]
    pub experience: bool,
    #[serde(rename = "showInclusions")]
    pub inclusions: bool,
    #[serde(rename = "showQuote")]
    pub quote: bool,
    /// Hero background ornament
    #[serde(rename = "showKanji")]
    pub kanji: bool,
}

impl SectionFlags {
    pub fn all() -> Self {
        Self {
            preloader: true,
            transition: true,
            experience: true,
            inclusions: true,
            quote: true,
            kanji: true,
        }
    }

    pub fn none() -> Self {
        Self {
            preloader: false,
            transition: false,
            experience: false,
            inclusions: false,
            quote: false,
            kanji: false,
        }
    }
}

impl Default for SectionFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event_name_en: "Karaoke Night".into(),
            event_name_jp: "カラオケナイト".into(),
            event_date: "Saturday, March 8 · 7:00 PM".into(),
            event_date_card: "Sat, March 8".into(),
            event_time: "7:00 PM to 10:00 PM".into(),
            event_venue: "Venue TBA".into(),
            event_venue_note: "Ithaca, NY. Address shared upon RSVP.".into(),
            event_price: "8".into(),
            event_price_note: "Covers room, food, and drinks.".into(),
            event_capacity: "25 spots".into(),
            event_url: "https://cornelluniversity.campusgroups.com/jjc/rsvp_boot?id=YOUR_EVENT_ID".into(),
            hero_tagline: "An evening of music, food, and good company. Hosted by the new JJC board for the people who actually make Johnson worth it.".into(),
            transition_jp: "一期一会".into(),
            transition_sub: "One moment, one encounter".into(),
            exp_headline: "This isn't another club event.".into(),
            exp_desc: "It's a private room, a full song catalog, a table full of food, and three hours where nobody talks about recruiting.".into(),
            quote_text: "\"We're not the old JJC. We're building something people actually want to show up to.\"".into(),
            quote_attr: "JJC Executive Board · 2025".into(),
            inclusions: [
                Inclusion::new(
                    "Private karaoke room",
                    "Full catalog: English, Japanese, Korean, and more.",
                ),
                Inclusion::new(
                    "Food and drinks all night",
                    "Provided throughout the evening. Come hungry.",
                ),
                Inclusion::new(
                    "Three hours, no interruptions",
                    "Just music, friends, and questionable song choices.",
                ),
                Inclusion::new(
                    "A legitimate reason to close your laptop",
                    "Casework can wait. Your duet partner can't.",
                ),
            ],
            colors: ThemeColors::default(),
            sections: SectionFlags::default(),
        }
    }
}

impl EventConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), event = %config.event_name_en, "Loaded event config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

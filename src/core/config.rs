use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

pub const PROJECTS_KEY: &str = "projects";
pub const THEME_KEY: &str = "theme";
pub const SETTINGS_KEY: &str = "settings";
pub const EXPORT_FILE_NAME: &str = "projects.json";

/// Largest id a JSON consumer using IEEE doubles can hold exactly (2^53 - 1).
pub const MAX_PROJECT_ID: u64 = (1 << 53) - 1;

/// Seven days in milliseconds.
pub const RECENT_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// How long a flash notice stays on screen.
pub const FLASH_MS: u32 = 3_000;

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_CARD_GAP: u32 = 16;
pub const MAX_CARD_GAP: u32 = 48;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Theme: Light",
            Theme::Dark => "Theme: Dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Anything other than `"dark"` falls back to light.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// User preferences persisted under [`SETTINGS_KEY`]. The theme lives under its own
/// key and is not part of this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    #[serde(default = "default_card_gap")]
    pub card_gap: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            autosave: default_autosave(),
            card_gap: default_card_gap(),
        }
    }
}

impl Settings {
    /// Parses a stored settings record, falling back to defaults on bad data.
    pub fn from_json(raw: &str) -> Self {
        let mut settings: Settings = serde_json::from_str(raw).unwrap_or_default();
        settings.card_gap = settings.card_gap.min(MAX_CARD_GAP);
        settings
    }

    pub fn set_card_gap(&mut self, gap: u32) {
        self.card_gap = gap.min(MAX_CARD_GAP);
    }
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

fn default_autosave() -> bool {
    true
}

fn default_card_gap() -> u32 {
    DEFAULT_CARD_GAP
}

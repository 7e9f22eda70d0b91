use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    #[default]
    Default,
    Ocean,
    Forest,
    Sunset,
}

impl ThemeStyle {
    pub const ALL: [ThemeStyle; 4] = [
        ThemeStyle::Default,
        ThemeStyle::Ocean,
        ThemeStyle::Forest,
        ThemeStyle::Sunset,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
        }
    }
}

/// Look-and-feel choices that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub theme_style: ThemeStyle,
}

impl Preferences {
    pub fn path() -> PathBuf {
        platform::data_dir().join("preferences.toml")
    }

    /// Missing or unreadable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(prefs) = toml::from_str::<Preferences>(&content) {
                return prefs;
            }
        }
        Self::default()
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

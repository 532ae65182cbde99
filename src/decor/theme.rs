use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What the user asked for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// `System` follows the host; an unknown host mode falls back to light.
    pub fn resolve(self, system: Option<ThemeMode>) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => system.unwrap_or_default(),
        }
    }
}

/// Colours only. Nothing here changes geometry or collection behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub guide_line: &'static str,
}

impl ThemeMode {
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                background: "#FAFAFA",
                foreground: "#171717",
                muted: "#F0F0F0",
                guide_line: "#D4D4D4",
            },
            ThemeMode::Dark => Palette {
                background: "#0A0A0A",
                foreground: "#EDEDED",
                muted: "#1C1C1C",
                guide_line: "#333333",
            },
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

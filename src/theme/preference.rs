//! The stored, unresolved theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::detect::ColorMode;
use crate::error::Error;

/// What the user asked for. `System` defers to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Resolves against the given system mode.
    pub fn resolve(self, system: ColorMode) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::System => system,
        }
    }
}

impl From<ColorMode> for ThemePreference {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemePreference::Light,
            ColorMode::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(Error::InvalidValue {
                kind: "theme",
                value: s.to_string(),
                expected: "light, dark, system",
            }),
        }
    }
}

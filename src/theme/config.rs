//! Provider configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::detect::ColorMode;
use super::preference::ThemePreference;
use crate::error::Error;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Which attribute of the document root encodes the resolved theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeAttribute {
    /// `class="dark"` / `class="light"`.
    #[default]
    Class,
    /// A `data-*` attribute set to the resolved theme name.
    Data(String),
}

impl TryFrom<String> for ThemeAttribute {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed == "class" {
            Ok(ThemeAttribute::Class)
        } else if trimmed.len() > "data-".len() && trimmed.starts_with("data-") {
            Ok(ThemeAttribute::Data(trimmed.to_string()))
        } else {
            Err(Error::InvalidValue {
                kind: "theme attribute",
                value,
                expected: "class, data-*",
            })
        }
    }
}

impl From<ThemeAttribute> for String {
    fn from(attr: ThemeAttribute) -> Self {
        attr.to_string()
    }
}

impl fmt::Display for ThemeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeAttribute::Class => f.write_str("class"),
            ThemeAttribute::Data(name) => f.write_str(name),
        }
    }
}

/// How a [`ThemeProvider`](super::ThemeProvider) negotiates and applies the theme.
///
/// Every field has a default, so an empty YAML mapping is a valid config:
///
/// ```yaml
/// attribute: class
/// storage_key: theme
/// enable_system: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub attribute: ThemeAttribute,
    pub storage_key: String,
    /// Falls back to `system` when system detection is enabled, `light` otherwise.
    pub default_theme: Option<ThemePreference>,
    pub enable_system: bool,
    pub enable_color_scheme: bool,
    pub forced_theme: Option<ColorMode>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            attribute: ThemeAttribute::Class,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_theme: None,
            enable_system: true,
            enable_color_scheme: true,
            forced_theme: None,
        }
    }
}

impl ThemeConfig {
    /// The preference used when storage holds nothing usable.
    pub fn default_theme(&self) -> ThemePreference {
        match self.default_theme {
            Some(pref) if self.allows(pref) => pref,
            _ if self.enable_system => ThemePreference::System,
            _ => ThemePreference::Light,
        }
    }

    /// Whether `pref` may be selected under this configuration.
    pub fn allows(&self, pref: ThemePreference) -> bool {
        pref != ThemePreference::System || self.enable_system
    }

    /// The preferences a user can pick from.
    pub fn themes(&self) -> Vec<ThemePreference> {
        ThemePreference::ALL
            .into_iter()
            .filter(|pref| self.allows(*pref))
            .collect()
    }
}

//! System color mode detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use crate::error::Error;

/// A resolved theme: the concrete mode the page is painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Both modes, in the order theme classes are cleared from the root.
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(Error::InvalidValue {
                kind: "color mode",
                value: s.to_string(),
                expected: "light, dark",
            }),
        }
    }
}

/// Function used to ask the environment for its preferred color mode.
pub type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the process-wide detector used to determine whether the user
/// prefers a light or dark theme.
///
/// Providers built without an explicit detector consult this one, so tests
/// and the CLI's `--system` flag can pin the answer.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Asks the process-wide detector for the current system color mode.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

/// Queries the OS. Anything that is not explicitly dark reads as light.
pub fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        #[allow(unreachable_patterns)]
        _ => ColorMode::Light,
    }
}

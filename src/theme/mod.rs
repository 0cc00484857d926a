//! Theme negotiation: preference, resolution, persistence and application.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: light, dark, or system
//! - [`ColorMode`]: a resolved light or dark theme
//! - [`ThemeProvider`] / [`ThemeHandle`]: page-wide state and explicit access to it
//! - [`ThemeStorage`]: where the preference is persisted
//! - [`ThemeConfig`]: how the provider negotiates and applies the theme

mod config;
mod detect;
mod preference;
mod provider;
mod storage;

pub use config::{ThemeAttribute, ThemeConfig, DEFAULT_STORAGE_KEY};
pub use detect::{
    detect_color_mode, os_theme_detector, set_theme_detector, ColorMode, ThemeDetector,
};
pub use preference::ThemePreference;
pub use provider::{ThemeHandle, ThemeProvider, ThemeSnapshot};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage};

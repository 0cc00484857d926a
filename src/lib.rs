//! # Theme Toggle
//!
//! A greeting page with a light/dark theme toggle, and the theme negotiation
//! behind it.
//!
//! ## Concepts
//!
//! - **Preference vs. resolved theme**: the user picks `light`, `dark` or
//!   `system` ([`ThemePreference`]); the page is painted in a concrete
//!   [`ColorMode`] after `system` is resolved against the environment.
//! - **Explicit theme state**: a [`ThemeProvider`] owns the page-wide state and
//!   hands out [`ThemeHandle`]s. Components receive a handle when built
//!   instead of discovering the state implicitly.
//! - **Hydration-safe button**: [`ThemeButton`] renders nothing until it is
//!   mounted, so the first render pass never shows an icon that might
//!   disagree with the resolved theme.
//! - **Styling contract**: the resolved theme is written onto the
//!   [`DocumentRoot`] as a `dark`/`light` class (or a `data-*` attribute).
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_toggle::{ColorMode, Icon, MemoryStorage, Page, ThemeConfig, ThemeProvider};
//!
//! // No stored preference, OS prefers dark
//! let provider = ThemeProvider::with_detector(
//!     ThemeConfig::default(),
//!     MemoryStorage::new(),
//!     || ColorMode::Dark,
//! );
//! let mut page = Page::new(provider).unwrap();
//! page.hydrate();
//! assert_eq!(page.home().button().icon(), Some(Icon::Sun));
//!
//! page.click();
//! assert_eq!(page.home().button().icon(), Some(Icon::Moon));
//! assert!(page.root().has_class("light"));
//!
//! page.click();
//! assert_eq!(page.home().button().icon(), Some(Icon::Sun));
//! ```

pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod page;
pub mod render;
pub mod theme;

pub use components::{ButtonState, Home, Icon, ThemeButton};
pub use config::{AppConfig, StorageConfig};
pub use document::DocumentRoot;
pub use error::{Error, Result};
pub use page::Page;
pub use render::Renderer;
pub use theme::{
    detect_color_mode, set_theme_detector, ColorMode, FileStorage, MemoryStorage, ThemeAttribute,
    ThemeConfig, ThemeHandle, ThemePreference, ThemeProvider, ThemeSnapshot, ThemeStorage,
};

//! Page-wide theme state and the handles components use to reach it.
//!
//! A [`ThemeProvider`] is built once at the root of a page. It reads the
//! stored preference, resolves it against the system color mode, and writes
//! the result onto the [`DocumentRoot`]. Components never discover the
//! provider implicitly; they are given a [`ThemeHandle`] at construction.
//!
//! # Example
//!
//! ```rust
//! use theme_toggle::{ColorMode, MemoryStorage, ThemeConfig, ThemePreference, ThemeProvider};
//!
//! let provider = ThemeProvider::with_detector(
//!     ThemeConfig::default(),
//!     MemoryStorage::new(),
//!     || ColorMode::Dark,
//! );
//! let handle = provider.handle();
//!
//! assert_eq!(handle.theme(), ThemePreference::System);
//! assert_eq!(handle.resolved_theme(), ColorMode::Dark);
//! assert!(provider.root().has_class("dark"));
//!
//! handle.set_theme(ThemePreference::Light);
//! assert!(provider.root().has_class("light"));
//! ```

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::config::{ThemeAttribute, ThemeConfig};
use super::detect::{detect_color_mode, ColorMode, ThemeDetector};
use super::preference::ThemePreference;
use super::storage::ThemeStorage;
use crate::document::DocumentRoot;

/// Point-in-time view of the theme state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub theme: ThemePreference,
    pub resolved_theme: ColorMode,
    pub system_theme: ColorMode,
    pub forced_theme: Option<ColorMode>,
}

struct ProviderState {
    config: ThemeConfig,
    storage: Box<dyn ThemeStorage>,
    theme: ThemePreference,
    system: ColorMode,
    root: DocumentRoot,
}

impl ProviderState {
    fn resolved(&self) -> ColorMode {
        self.config
            .forced_theme
            .unwrap_or_else(|| self.theme.resolve(self.system))
    }

    fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            theme: self.theme,
            resolved_theme: self.resolved(),
            system_theme: self.system,
            forced_theme: self.config.forced_theme,
        }
    }

    /// Parses a stored value, falling back to the configured default.
    fn preference_from(&self, stored: Option<&str>) -> ThemePreference {
        let Some(raw) = stored else {
            return self.config.default_theme();
        };
        match raw.parse::<ThemePreference>() {
            Ok(pref) if self.config.allows(pref) => pref,
            Ok(pref) => {
                tracing::warn!(theme = %pref, "stored theme is disabled, using default");
                self.config.default_theme()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme");
                self.config.default_theme()
            }
        }
    }

    fn load(&mut self) {
        let stored = match self.storage.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "theme storage unavailable, using default");
                None
            }
        };
        self.theme = self.preference_from(stored.as_deref());
    }

    fn persist(&mut self) {
        if let Err(e) = self
            .storage
            .set(&self.config.storage_key, self.theme.as_str())
        {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    }

    fn apply(&mut self) {
        let resolved = self.resolved();
        match &self.config.attribute {
            ThemeAttribute::Class => {
                for mode in ColorMode::ALL {
                    self.root.remove_class(mode.as_str());
                }
                self.root.add_class(resolved.as_str());
            }
            ThemeAttribute::Data(name) => self.root.set_attribute(name, resolved.as_str()),
        }
        let scheme = self.config.enable_color_scheme.then_some(resolved);
        self.root.set_color_scheme(scheme);
    }
}

/// Owner of the page-wide theme state.
pub struct ThemeProvider {
    state: Rc<RefCell<ProviderState>>,
}

impl ThemeProvider {
    /// Creates a provider that asks the process-wide detector for the system mode.
    pub fn new(config: ThemeConfig, storage: impl ThemeStorage + 'static) -> Self {
        Self::with_detector(config, storage, detect_color_mode)
    }

    /// Creates a provider with an explicit system color detector.
    pub fn with_detector(
        config: ThemeConfig,
        storage: impl ThemeStorage + 'static,
        detector: ThemeDetector,
    ) -> Self {
        let default_theme = config.default_theme();
        let mut state = ProviderState {
            config,
            storage: Box::new(storage),
            theme: default_theme,
            system: detector(),
            root: DocumentRoot::new(),
        };
        state.load();
        state.apply();
        tracing::debug!(
            theme = %state.theme,
            resolved = %state.resolved(),
            system = %state.system,
            "theme provider initialized"
        );
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Returns a handle for a component that needs theme state.
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Current state of the document root.
    pub fn root(&self) -> DocumentRoot {
        self.state.borrow().root.clone()
    }

    pub fn config(&self) -> ThemeConfig {
        self.state.borrow().config.clone()
    }

    /// The environment's color preference changed.
    pub fn system_theme_changed(&self, mode: ColorMode) {
        let mut state = self.state.borrow_mut();
        if state.system == mode {
            return;
        }
        state.system = mode;
        state.apply();
        tracing::debug!(system = %mode, resolved = %state.resolved(), "system theme changed");
    }

    /// Another page wrote (or removed) the storage key; adopt its value.
    ///
    /// The value is not written back.
    pub fn storage_changed(&self, value: Option<&str>) {
        let mut state = self.state.borrow_mut();
        state.theme = state.preference_from(value);
        state.apply();
        tracing::debug!(theme = %state.theme, "theme changed in storage");
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("snapshot", &self.state.borrow().snapshot())
            .finish_non_exhaustive()
    }
}

/// Read accessor and mutate function for the provider's theme state.
///
/// Handles are cheap to clone and all observe the same state.
#[derive(Clone)]
pub struct ThemeHandle {
    state: Rc<RefCell<ProviderState>>,
}

impl ThemeHandle {
    /// The stored preference, possibly `system`.
    pub fn theme(&self) -> ThemePreference {
        self.state.borrow().theme
    }

    /// The concrete theme the page is painted in.
    pub fn resolved_theme(&self) -> ColorMode {
        self.state.borrow().resolved()
    }

    pub fn system_theme(&self) -> ColorMode {
        self.state.borrow().system
    }

    pub fn forced_theme(&self) -> Option<ColorMode> {
        self.state.borrow().config.forced_theme
    }

    /// Preferences selectable under the provider's configuration.
    pub fn themes(&self) -> Vec<ThemePreference> {
        self.state.borrow().config.themes()
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.state.borrow().snapshot()
    }

    /// Requests a new preference. The provider persists it and re-applies the root.
    ///
    /// `system` is ignored when system detection is disabled.
    pub fn set_theme(&self, theme: ThemePreference) {
        let mut state = self.state.borrow_mut();
        if !state.config.allows(theme) {
            tracing::warn!(theme = %theme, "theme not enabled, ignoring");
            return;
        }
        state.theme = theme;
        state.persist();
        state.apply();
        tracing::debug!(theme = %theme, resolved = %state.resolved(), "theme set");
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

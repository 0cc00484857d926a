//! A single page: provider, home component and renderer, driven through
//! its lifecycle.
//!
//! A page is rendered once before hydration (the button is still
//! unmounted and draws nothing), then [`Page::hydrate`] mounts the button and
//! later renders show the icon for the resolved theme.
//!
//! # Example
//!
//! ```rust
//! use theme_toggle::{ColorMode, MemoryStorage, Page, ThemeConfig, ThemeProvider};
//!
//! let provider = ThemeProvider::with_detector(
//!     ThemeConfig::default(),
//!     MemoryStorage::new(),
//!     || ColorMode::Dark,
//! );
//! let mut page = Page::new(provider).unwrap();
//!
//! let first = page.render().unwrap();
//! assert!(!first.contains("<button"));
//!
//! page.hydrate();
//! assert!(page.render().unwrap().contains(r#"data-icon="sun""#));
//!
//! assert_eq!(page.click(), Some(ColorMode::Light));
//! assert!(page.root().has_class("light"));
//! ```

use serde::Serialize;

use crate::components::{Home, HomeView, DEFAULT_GREETING};
use crate::config::AppConfig;
use crate::document::{DocumentRoot, RootView};
use crate::error::Result;
use crate::render::{Renderer, PAGE_TEMPLATE};
use crate::theme::{ColorMode, ThemeHandle, ThemeProvider, ThemeStorage};

#[derive(Serialize)]
struct PageView<'a> {
    root: RootView,
    home: HomeView<'a>,
}

pub struct Page {
    provider: ThemeProvider,
    home: Home,
    renderer: Renderer,
}

impl Page {
    pub fn new(provider: ThemeProvider) -> Result<Self> {
        Self::with_greeting(provider, DEFAULT_GREETING)
    }

    pub fn with_greeting(provider: ThemeProvider, greeting: impl Into<String>) -> Result<Self> {
        let home = Home::with_greeting(greeting, provider.handle());
        Ok(Self {
            provider,
            home,
            renderer: Renderer::new()?,
        })
    }

    /// Builds a page from application configuration, persisting into `storage`.
    pub fn from_config(config: &AppConfig, storage: impl ThemeStorage + 'static) -> Result<Self> {
        let provider = ThemeProvider::new(config.theme.clone(), storage);
        Self::with_greeting(provider, config.greeting.clone())
    }

    /// Renders the whole document in its current state.
    pub fn render(&self) -> Result<String> {
        let root = self.provider.root();
        let view = PageView {
            root: root.view(),
            home: self.home.view(),
        };
        self.renderer.render(PAGE_TEMPLATE, &view)
    }

    /// Mounts the page's components after the first render.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn hydrate(&mut self) -> bool {
        self.home.button_mut().mount()
    }

    pub fn is_hydrated(&self) -> bool {
        self.home.button().is_mounted()
    }

    /// Activates the toggle button. Ignored before hydration.
    pub fn click(&mut self) -> Option<ColorMode> {
        self.home.button_mut().click()
    }

    pub fn root(&self) -> DocumentRoot {
        self.provider.root()
    }

    pub fn theme(&self) -> ThemeHandle {
        self.provider.handle()
    }

    pub fn provider(&self) -> &ThemeProvider {
        &self.provider
    }

    pub fn home(&self) -> &Home {
        &self.home
    }
}

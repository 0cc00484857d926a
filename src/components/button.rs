//! The theme toggle button.
//!
//! The button renders nothing until it has mounted. The first render pass
//! happens before the real resolved theme is known on the client, and an
//! icon drawn then could disagree with the one drawn after hydration.

use serde::Serialize;

use super::icon::{Icon, IconView};
use crate::theme::{ColorMode, ThemeHandle, ThemePreference};

pub const TOGGLE_LABEL: &str = "Toggle Dark Mode";

const BUTTON_CLASSES: &[&str] = &[
    "flex",
    "items-center",
    "justify-center",
    "p-4",
    "transition-colors",
];

/// Observable state of a [`ThemeButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Unmounted,
    Mounted(ColorMode),
}

/// A button that shows the resolved theme and flips it on click.
#[derive(Debug, Clone)]
pub struct ThemeButton {
    theme: ThemeHandle,
    mounted: bool,
}

impl ThemeButton {
    pub fn new(theme: ThemeHandle) -> Self {
        Self {
            theme,
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Marks the button as mounted after its first render has committed.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        tracing::debug!(resolved = %self.theme.resolved_theme(), "theme button mounted");
        true
    }

    pub fn state(&self) -> ButtonState {
        if self.mounted {
            ButtonState::Mounted(self.theme.resolved_theme())
        } else {
            ButtonState::Unmounted
        }
    }

    /// The icon currently displayed, if any.
    pub fn icon(&self) -> Option<Icon> {
        match self.state() {
            ButtonState::Unmounted => None,
            ButtonState::Mounted(resolved) => Some(Icon::for_theme(resolved)),
        }
    }

    /// Switches the resolved theme to its opposite and returns the new one.
    ///
    /// An unmounted button has no rendered control, so clicks are ignored.
    /// Under a forced theme the resolved theme never changes, so every click
    /// stores the opposite of the forced theme.
    pub fn click(&mut self) -> Option<ColorMode> {
        if !self.mounted {
            return None;
        }
        let next = self.theme.resolved_theme().toggled();
        self.theme.set_theme(ThemePreference::from(next));
        Some(self.theme.resolved_theme())
    }

    pub(crate) fn view(&self) -> Option<ButtonView> {
        self.icon().map(|icon| ButtonView {
            label: TOGGLE_LABEL,
            kind: "button",
            classes: BUTTON_CLASSES,
            icon: icon.view(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ButtonView {
    pub label: &'static str,
    pub kind: &'static str,
    pub classes: &'static [&'static str],
    pub icon: IconView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryStorage, ThemeConfig, ThemeProvider};

    fn provider(system: fn() -> ColorMode) -> ThemeProvider {
        ThemeProvider::with_detector(ThemeConfig::default(), MemoryStorage::new(), system)
    }

    #[test]
    fn test_unmounted_renders_nothing() {
        let provider = provider(|| ColorMode::Dark);
        let button = ThemeButton::new(provider.handle());

        assert_eq!(button.state(), ButtonState::Unmounted);
        assert!(button.view().is_none());
        assert_eq!(button.icon(), None);
    }

    #[test]
    fn test_mount_is_one_shot() {
        let provider = provider(|| ColorMode::Dark);
        let mut button = ThemeButton::new(provider.handle());

        assert!(button.mount());
        assert!(!button.mount());
        assert!(button.is_mounted());
    }

    #[test]
    fn test_mounted_icon_matches_resolved_theme() {
        let provider = provider(|| ColorMode::Dark);
        let mut button = ThemeButton::new(provider.handle());
        button.mount();

        assert_eq!(button.state(), ButtonState::Mounted(ColorMode::Dark));
        assert_eq!(button.icon(), Some(Icon::Sun));
        assert_eq!(button.icon(), Some(Icon::Sun));

        provider.handle().set_theme(ThemePreference::Light);
        assert_eq!(button.icon(), Some(Icon::Moon));
    }

    #[test]
    fn test_click_toggles_and_never_selects_system() {
        let provider = provider(|| ColorMode::Dark);
        let handle = provider.handle();
        let mut button = ThemeButton::new(handle.clone());
        button.mount();

        assert_eq!(button.click(), Some(ColorMode::Light));
        assert_eq!(handle.theme(), ThemePreference::Light);
        assert_eq!(button.click(), Some(ColorMode::Dark));
        assert_eq!(handle.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_click_before_mount_is_ignored() {
        let provider = provider(|| ColorMode::Dark);
        let mut button = ThemeButton::new(provider.handle());

        assert_eq!(button.click(), None);
        assert_eq!(provider.handle().theme(), ThemePreference::System);
    }

    #[test]
    fn test_click_under_forced_theme_stores_opposite() {
        let config = ThemeConfig {
            forced_theme: Some(ColorMode::Dark),
            ..ThemeConfig::default()
        };
        let provider = ThemeProvider::with_detector(config, MemoryStorage::new(), || {
            ColorMode::Light
        });
        let handle = provider.handle();
        let mut button = ThemeButton::new(handle.clone());
        button.mount();

        for _ in 0..3 {
            assert_eq!(button.click(), Some(ColorMode::Dark));
            assert_eq!(handle.theme(), ThemePreference::Light);
            assert_eq!(button.icon(), Some(Icon::Sun));
        }
    }

    #[test]
    fn test_view_carries_accessibility_label() {
        let provider = provider(|| ColorMode::Light);
        let mut button = ThemeButton::new(provider.handle());
        button.mount();

        let view = button.view().unwrap();
        assert_eq!(view.label, "Toggle Dark Mode");
        assert_eq!(view.kind, "button");
        assert_eq!(view.icon.name, "moon");
    }
}

//! End-to-end page lifecycle: first render, hydration, clicks, persistence.

use proptest::prelude::*;
use serial_test::serial;
use tempfile::TempDir;
use theme_toggle::theme::os_theme_detector;
use theme_toggle::{
    set_theme_detector, AppConfig, ButtonState, ColorMode, FileStorage, Icon, MemoryStorage, Page,
    ThemeConfig, ThemePreference, ThemeProvider,
};

fn page_with(storage: MemoryStorage, system: fn() -> ColorMode) -> Page {
    let provider = ThemeProvider::with_detector(ThemeConfig::default(), storage, system);
    Page::new(provider).unwrap()
}

#[test]
fn test_dark_system_scenario() {
    let mut page = page_with(MemoryStorage::new(), || ColorMode::Dark);

    // Before hydration: nothing drawn, but the root already carries the theme.
    assert_eq!(page.home().button().state(), ButtonState::Unmounted);
    assert!(!page.render().unwrap().contains("<svg"));
    assert!(page.root().has_class("dark"));

    page.hydrate();
    assert_eq!(page.theme().resolved_theme(), ColorMode::Dark);
    assert_eq!(page.home().button().icon(), Some(Icon::Sun));

    assert_eq!(page.click(), Some(ColorMode::Light));
    assert_eq!(page.home().button().icon(), Some(Icon::Moon));
    assert!(page.root().has_class("light"));
    assert!(!page.root().has_class("dark"));

    assert_eq!(page.click(), Some(ColorMode::Dark));
    assert_eq!(page.home().button().icon(), Some(Icon::Sun));
    assert!(page.root().has_class("dark"));
}

#[test]
fn test_hydrate_twice_keeps_single_icon() {
    let mut page = page_with(MemoryStorage::new(), || ColorMode::Light);
    assert!(page.hydrate());
    assert!(!page.hydrate());
    assert!(page.is_hydrated());

    let html = page.render().unwrap();
    assert_eq!(html.matches("<svg").count(), 1);
    assert_eq!(html, page.render().unwrap());
}

#[test]
#[serial]
fn test_preference_survives_reload_through_file() {
    set_theme_detector(|| ColorMode::Dark);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let config = AppConfig::default();

    let mut first = Page::from_config(&config, FileStorage::new(&path)).unwrap();
    first.hydrate();
    let after_click = first.click().unwrap();

    let second = Page::from_config(&config, FileStorage::new(&path)).unwrap();
    assert_eq!(second.theme().theme(), ThemePreference::from(after_click));
    assert_eq!(second.theme().resolved_theme(), after_click);
    assert_eq!(after_click, ColorMode::Light);

    set_theme_detector(os_theme_detector);
}

#[test]
fn test_click_repairs_corrupt_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json").unwrap();

    let provider =
        ThemeProvider::with_detector(ThemeConfig::default(), FileStorage::new(&path), dark_system);
    let mut page = Page::new(provider).unwrap();
    page.hydrate();
    assert_eq!(page.click(), Some(ColorMode::Light));

    let reloaded =
        ThemeProvider::with_detector(ThemeConfig::default(), FileStorage::new(&path), dark_system);
    assert_eq!(reloaded.handle().theme(), ThemePreference::Light);
    assert_eq!(reloaded.handle().resolved_theme(), ColorMode::Light);
}

#[test]
#[serial]
fn test_default_provider_uses_process_detector() {
    set_theme_detector(|| ColorMode::Dark);
    let provider = ThemeProvider::new(ThemeConfig::default(), MemoryStorage::new());
    assert_eq!(provider.handle().resolved_theme(), ColorMode::Dark);

    set_theme_detector(|| ColorMode::Light);
    let provider = ThemeProvider::new(ThemeConfig::default(), MemoryStorage::new());
    assert_eq!(provider.handle().resolved_theme(), ColorMode::Light);

    set_theme_detector(os_theme_detector);
}

fn dark_system() -> ColorMode {
    ColorMode::Dark
}

fn light_system() -> ColorMode {
    ColorMode::Light
}

fn system_for(dark: bool) -> fn() -> ColorMode {
    if dark {
        dark_system
    } else {
        light_system
    }
}

fn stored_value() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("light")),
        Just(Some("dark")),
        Just(Some("system")),
        Just(Some("garbage")),
    ]
}

proptest! {
    #[test]
    fn toggling_twice_restores_resolved_theme(
        system_dark in any::<bool>(),
        stored in stored_value(),
        clicks in 0usize..6,
    ) {
        let storage = match stored {
            Some(value) => MemoryStorage::with_entry("theme", value),
            None => MemoryStorage::new(),
        };
        let mut page = page_with(storage, system_for(system_dark));
        page.hydrate();

        for _ in 0..clicks {
            page.click();
        }
        let before = page.theme().resolved_theme();

        let once = page.click().unwrap();
        prop_assert_eq!(once, before.toggled());
        let twice = page.click().unwrap();
        prop_assert_eq!(twice, before);
    }

    #[test]
    fn icon_and_root_always_match_resolved_theme(
        system_dark in any::<bool>(),
        stored in stored_value(),
        clicks in 0usize..6,
    ) {
        let storage = match stored {
            Some(value) => MemoryStorage::with_entry("theme", value),
            None => MemoryStorage::new(),
        };
        let mut page = page_with(storage, system_for(system_dark));
        page.hydrate();

        for _ in 0..clicks {
            page.click();
            let resolved = page.theme().resolved_theme();
            prop_assert_eq!(page.home().button().icon(), Some(Icon::for_theme(resolved)));
            prop_assert!(page.root().has_class(resolved.as_str()));
            prop_assert!(!page.root().has_class(resolved.toggled().as_str()));
        }
    }
}

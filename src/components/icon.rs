//! Solid 24px sun and moon icons.

use serde::Serialize;

use crate::theme::ColorMode;

const SUN_PATH: &str = "M12 2.25a.75.75 0 0 1 .75.75v2.25a.75.75 0 0 1-1.5 0V3a.75.75 0 0 1 .75-.75ZM7.5 12a4.5 4.5 0 1 1 9 0 4.5 4.5 0 0 1-9 0ZM18.894 6.166a.75.75 0 0 0-1.06-1.06l-1.591 1.59a.75.75 0 1 0 1.06 1.061l1.591-1.59ZM21.75 12a.75.75 0 0 1-.75.75h-2.25a.75.75 0 0 1 0-1.5H21a.75.75 0 0 1 .75.75ZM17.834 18.894a.75.75 0 0 0 1.06-1.06l-1.59-1.591a.75.75 0 1 0-1.061 1.06l1.59 1.591ZM12 18a.75.75 0 0 1 .75.75V21a.75.75 0 0 1-1.5 0v-2.25A.75.75 0 0 1 12 18ZM7.758 17.303a.75.75 0 0 0-1.061-1.06l-1.591 1.59a.75.75 0 0 0 1.06 1.061l1.591-1.59ZM6 12a.75.75 0 0 1-.75.75H3a.75.75 0 0 1 0-1.5h2.25A.75.75 0 0 1 6 12ZM6.697 7.757a.75.75 0 0 0 1.06-1.06l-1.59-1.591a.75.75 0 0 0-1.061 1.06l1.59 1.591Z";

const MOON_PATH: &str = "M9.528 1.718a.75.75 0 0 1 .162.819A8.97 8.97 0 0 0 9 6a9 9 0 0 0 9 9 8.97 8.97 0 0 0 3.463-.69.75.75 0 0 1 .981.98 10.503 10.503 0 0 1-9.694 6.46c-5.799 0-10.5-4.7-10.5-10.5 0-4.368 2.667-8.112 6.46-9.694a.75.75 0 0 1 .818.162Z";

/// Icon shown on the toggle button.
///
/// The icon names the theme a click switches *to*: a sun while dark is
/// active, a moon while light is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    pub fn for_theme(resolved: ColorMode) -> Self {
        match resolved {
            ColorMode::Dark => Icon::Sun,
            ColorMode::Light => Icon::Moon,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Moon => "moon",
        }
    }

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Icon::Sun => &["h-16", "w-16", "text-orange-300"],
            Icon::Moon => &["h-16", "w-16", "text-slate-800"],
        }
    }

    pub fn svg_path(self) -> &'static str {
        match self {
            Icon::Sun => SUN_PATH,
            Icon::Moon => MOON_PATH,
        }
    }

    pub(crate) fn view(self) -> IconView {
        IconView {
            name: self.name(),
            classes: self.classes(),
            path: self.svg_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct IconView {
    pub name: &'static str,
    pub classes: &'static [&'static str],
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_theme() {
        assert_eq!(Icon::for_theme(ColorMode::Dark), Icon::Sun);
        assert_eq!(Icon::for_theme(ColorMode::Light), Icon::Moon);
    }

    #[test]
    fn test_icon_colors() {
        assert!(Icon::Sun.classes().contains(&"text-orange-300"));
        assert!(Icon::Moon.classes().contains(&"text-slate-800"));
    }
}

//! The home page body: a greeting above the toggle button.

use serde::Serialize;

use super::button::{ButtonView, ThemeButton};
use crate::theme::ThemeHandle;

pub const DEFAULT_GREETING: &str = "Hello world!";

#[derive(Debug, Clone)]
pub struct Home {
    greeting: String,
    button: ThemeButton,
}

impl Home {
    pub fn new(theme: ThemeHandle) -> Self {
        Self::with_greeting(DEFAULT_GREETING, theme)
    }

    pub fn with_greeting(greeting: impl Into<String>, theme: ThemeHandle) -> Self {
        Self {
            greeting: greeting.into(),
            button: ThemeButton::new(theme),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn button(&self) -> &ThemeButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut ThemeButton {
        &mut self.button
    }

    pub(crate) fn view(&self) -> HomeView<'_> {
        HomeView {
            greeting: &self.greeting,
            button: self.button.view(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct HomeView<'a> {
    pub greeting: &'a str,
    pub button: Option<ButtonView>,
}

//! The document root element the theme is written onto.
//!
//! CSS keys every visual rule off this element, so it is the single styling
//! contract between the theme provider and the page: a `dark`/`light` class
//! (or a data attribute) plus an optional `color-scheme` declaration.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::theme::ColorMode;

/// Attributes of the `<html>` element that the provider manages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    color_scheme: Option<ColorMode>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_color_scheme(&mut self, mode: Option<ColorMode>) {
        self.color_scheme = mode;
    }

    pub fn color_scheme(&self) -> Option<ColorMode> {
        self.color_scheme
    }

    /// Snapshot used by the page template.
    pub(crate) fn view(&self) -> RootView {
        RootView {
            classes: self.classes.iter().cloned().collect(),
            attributes: self.attributes.clone(),
            style: self
                .color_scheme
                .map(|mode| format!("color-scheme: {};", mode)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RootView {
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: Option<String>,
}

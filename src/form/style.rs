//! Inline style sets for the payment form
//!
//! Styles are grouped into four categories. Caller overrides are merged over
//! the built-in set one category at a time: an override replaces the base
//! value for the same property and leaves every other property alone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS property name to value, rendered in key order
pub type StyleMap = BTreeMap<String, String>;

/// Style properties for each part of the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormStyles {
    /// The `<form>` element
    pub form: StyleMap,
    /// Every input and the textarea
    pub input: StyleMap,
    /// The submit button
    pub button: StyleMap,
    /// The status block under the form
    pub status: StyleMap,
}

fn style_map(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl FormStyles {
    /// An empty style set, useful as a base for overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in look of the payment form
    pub fn base() -> Self {
        Self {
            form: style_map(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "10px"),
                ("max-width", "400px"),
                ("margin", "auto"),
                ("padding", "20px"),
                ("border", "1px solid #ddd"),
                ("border-radius", "8px"),
                ("background-color", "#f9f9f9"),
                ("font-family", "Arial, sans-serif"),
            ]),
            input: style_map(&[
                ("padding", "10px"),
                ("border", "1px solid #ccc"),
                ("border-radius", "4px"),
                ("font-size", "14px"),
            ]),
            button: style_map(&[
                ("padding", "10px"),
                ("border", "none"),
                ("border-radius", "4px"),
                ("background-color", "#007bff"),
                ("color", "#fff"),
                ("font-size", "16px"),
                ("cursor", "pointer"),
            ]),
            status: style_map(&[
                ("margin-top", "10px"),
                ("text-align", "center"),
                ("font-size", "14px"),
            ]),
        }
    }

    /// Set one property in the form category
    pub fn with_form(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(property.into(), value.into());
        self
    }

    /// Set one property in the input category
    pub fn with_input(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.input.insert(property.into(), value.into());
        self
    }

    /// Set one property in the button category
    pub fn with_button(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.button.insert(property.into(), value.into());
        self
    }

    /// Set one property in the status category
    pub fn with_status(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.status.insert(property.into(), value.into());
        self
    }

    /// Shallow-merge `overrides` over `self`, category by category
    pub fn merged(&self, overrides: &FormStyles) -> FormStyles {
        FormStyles {
            form: merge_map(&self.form, &overrides.form),
            input: merge_map(&self.input, &overrides.input),
            button: merge_map(&self.button, &overrides.button),
            status: merge_map(&self.status, &overrides.status),
        }
    }
}

fn merge_map(base: &StyleMap, overrides: &StyleMap) -> StyleMap {
    let mut merged = base.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Render a style map as the value of an inline `style` attribute
pub fn inline_css(styles: &StyleMap) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join(" ")
}

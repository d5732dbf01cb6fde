//! Quick style presets.
//!
//! Applying a theme is a pure function from a property bag to a new bag; the
//! session records the result as ordinary prop replacements so themes undo
//! like any other edit.

use pagekit_schema::{ComponentProps, ComponentType, PropBag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        primary: impl Into<String>,
        background: impl Into<String>,
        text: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            background: background.into(),
            text: text.into(),
            accent: accent.into(),
        }
    }

    /// Built-in presets
    pub fn presets() -> Vec<Theme> {
        vec![
            Theme::new("modern", "#2563eb", "#ffffff", "#111827", "#f59e0b"),
            Theme::new("dark", "#8b5cf6", "#0f172a", "#f8fafc", "#22d3ee"),
            Theme::new("warm", "#ea580c", "#fff7ed", "#431407", "#dc2626"),
            Theme::new("minimal", "#111827", "#ffffff", "#111827", "#6b7280"),
        ]
    }

    pub fn preset(name: &str) -> Option<Theme> {
        Self::presets()
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

/// Role a section plays in the palette
enum Role {
    /// Strong brand-colored band
    Primary,
    /// Attention strip
    Accent,
    /// Regular content on the page background
    Surface,
    /// Text on whatever is behind it
    Ink,
    Untouched,
}

fn role(component_type: ComponentType) -> Role {
    match component_type {
        ComponentType::Hero | ComponentType::Newsletter | ComponentType::Button => Role::Primary,
        ComponentType::Banner | ComponentType::Countdown => Role::Accent,
        ComponentType::Text => Role::Ink,
        ComponentType::Spacer => Role::Untouched,
        ComponentType::Categories
        | ComponentType::Products
        | ComponentType::Image
        | ComponentType::Testimonials
        | ComponentType::Features
        | ComponentType::Gallery
        | ComponentType::Contact
        | ComponentType::Faq
        | ComponentType::Container => Role::Surface,
    }
}

/// Returns `props` recolored with `theme`. Only keys the type declares are
/// written; every other key is carried over unchanged.
pub fn apply_theme(component_type: ComponentType, props: &PropBag, theme: &Theme) -> PropBag {
    let (background, text) = match role(component_type) {
        Role::Primary => (Some(&theme.primary), Some(&theme.background)),
        Role::Accent => (Some(&theme.accent), Some(&theme.background)),
        Role::Surface => (Some(&theme.background), Some(&theme.text)),
        Role::Ink => (None, Some(&theme.text)),
        Role::Untouched => (None, None),
    };

    let declared = ComponentProps::declared_keys(component_type);
    let mut patch = PropBag::new();
    if let Some(color) = background {
        if declared.contains(&"backgroundColor") {
            patch.insert("backgroundColor", color.as_str());
        }
    }
    if let Some(color) = text {
        if declared.contains(&"textColor") {
            patch.insert("textColor", color.as_str());
        }
    }

    props.merged(&patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::registry::default_props;

    fn dark() -> Theme {
        Theme::preset("dark").unwrap()
    }

    #[test]
    fn test_hero_takes_primary_band() {
        let props = default_props(ComponentType::Hero);
        let themed = apply_theme(ComponentType::Hero, &props, &dark());

        assert_eq!(themed.get_str("backgroundColor"), Some("#8b5cf6"));
        assert_eq!(themed.get_str("textColor"), Some("#0f172a"));
        assert_eq!(themed.get_str("title"), props.get_str("title"));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let props = default_props(ComponentType::Faq);
        let snapshot = props.clone();
        let _ = apply_theme(ComponentType::Faq, &props, &dark());
        assert_eq!(props, snapshot);
    }

    #[test]
    fn test_undeclared_keys_are_not_added() {
        // Gallery has no textColor
        let props = default_props(ComponentType::Gallery);
        let themed = apply_theme(ComponentType::Gallery, &props, &dark());
        assert!(!themed.contains_key("textColor"));
        assert_eq!(themed.get_str("backgroundColor"), Some("#0f172a"));
    }

    #[test]
    fn test_spacer_untouched() {
        let props = default_props(ComponentType::Spacer);
        assert_eq!(apply_theme(ComponentType::Spacer, &props, &dark()), props);
    }

    #[test]
    fn test_preset_lookup_is_case_insensitive() {
        assert!(Theme::preset("WARM").is_some());
        assert!(Theme::preset("neon").is_none());
    }
}

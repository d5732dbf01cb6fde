//! # Templates
//!
//! A template (page document) is a named, categorized, ordered list of
//! component instances. Order is rendering order, top to bottom, and must
//! survive save/load unchanged.
//!
//! `isDefault`, `usageCount` and `version` are system-managed: the store sets
//! them, editors never do.

use crate::instance::ComponentInstance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suffix appended to the name of a duplicated template
pub const COPY_MARKER: &str = "(copy)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Homepage,
    Product,
    Category,
    About,
    #[default]
    Custom,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Homepage => "homepage",
            TemplateCategory::Product => "product",
            TemplateCategory::Category => "category",
            TemplateCategory::About => "about",
            TemplateCategory::Custom => "custom",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homepage" => Ok(TemplateCategory::Homepage),
            "product" => Ok(TemplateCategory::Product),
            "category" => Ok(TemplateCategory::Category),
            "about" => Ok(TemplateCategory::About),
            "custom" => Ok(TemplateCategory::Custom),
            other => Err(format!("unknown template category '{}'", other)),
        }
    }
}

/// A persisted page layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: TemplateCategory,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub usage_count: u64,
    /// Incremented by the store on every update
    #[serde(default)]
    pub version: u64,
}

/// A page document is a template being edited
pub type PageDocument = Template;

impl Template {
    /// Empty, unsaved template
    pub fn new(name: impl Into<String>, category: TemplateCategory) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            category,
            thumbnail: String::new(),
            components: Vec::new(),
            created_at: now,
            updated_at: now,
            is_default: false,
            usage_count: 0,
            version: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    pub fn with_components(mut self, components: Vec<ComponentInstance>) -> Self {
        self.components = components;
        self
    }

    /// Position of a component in render order
    pub fn index_of(&self, component_id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id == component_id)
    }

    pub fn component(&self, component_id: &str) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.id == component_id)
    }

    pub fn component_mut(&mut self, component_id: &str) -> Option<&mut ComponentInstance> {
        self.components.iter_mut().find(|c| c.id == component_id)
    }

    /// Unsaved duplicate: empty id, "(copy)" name, not default, unused, fresh
    /// timestamps.
    pub fn copy_of(&self) -> Template {
        let now = Utc::now();
        Template {
            id: String::new(),
            name: format!("{} {}", self.name, COPY_MARKER),
            description: self.description.clone(),
            category: self.category,
            thumbnail: self.thumbnail.clone(),
            components: self.components.clone(),
            created_at: now,
            updated_at: now,
            is_default: false,
            usage_count: 0,
            version: 0,
        }
    }

    /// Ordering used by template listings: defaults first, then most recently
    /// updated.
    pub fn listing_order(a: &Template, b: &Template) -> std::cmp::Ordering {
        b.is_default
            .cmp(&a.is_default)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_type::ComponentType;
    use chrono::Duration;

    #[test]
    fn test_round_trip_preserves_order_and_props() {
        let template = Template::new("Spring", TemplateCategory::Homepage).with_components(vec![
            ComponentInstance::new(ComponentType::Banner),
            ComponentInstance::new(ComponentType::Hero),
            ComponentInstance::new(ComponentType::Products),
        ]);

        let json = serde_json::to_string(&template).unwrap();
        let loaded: Template = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, template);
    }

    #[test]
    fn test_wire_field_names() {
        let template = Template::new("Spring", TemplateCategory::About);
        let json: serde_json::Value = serde_json::to_value(&template).unwrap();

        assert_eq!(json["category"], "about");
        assert_eq!(json["isDefault"], false);
        assert_eq!(json["usageCount"], 0);
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn test_copy_of_resets_system_fields() {
        let mut template = Template::new("Classic", TemplateCategory::Homepage);
        template.id = "tpl-1".to_string();
        template.is_default = true;
        template.usage_count = 12;

        let copy = template.copy_of();
        assert_eq!(copy.name, "Classic (copy)");
        assert!(copy.id.is_empty());
        assert!(!copy.is_default);
        assert_eq!(copy.usage_count, 0);
    }

    #[test]
    fn test_listing_order() {
        let now = Utc::now();
        let mut old_default = Template::new("Default", TemplateCategory::Homepage);
        old_default.is_default = true;
        old_default.updated_at = now - Duration::days(30);

        let mut recent = Template::new("Recent", TemplateCategory::Custom);
        recent.updated_at = now;

        let mut stale = Template::new("Stale", TemplateCategory::Custom);
        stale.updated_at = now - Duration::days(2);

        let mut list = vec![stale, recent, old_default];
        list.sort_by(Template::listing_order);

        let names: Vec<_> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Default", "Recent", "Stale"]);
    }
}

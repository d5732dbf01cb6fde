/// Consistency checks for loaded templates.
///
/// Nothing here rejects a document: findings are reported so an editor or the
/// CLI can surface them, and rendering proceeds regardless.
use crate::component_type::ComponentKind;
use crate::props::{is_color_key, is_link_key, ComponentProps};
use crate::template::Template;
use crate::value::PropValue;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Renders, but probably not as intended
    Warning,
    /// Breaks an editor invariant
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
}

impl ValidationIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            message: message.into(),
            component_id: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            component_id: None,
        }
    }

    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }
}

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}|transparent)$").expect("valid color regex")
    })
}

/// Whether a string is an accepted color literal
pub fn is_valid_color(value: &str) -> bool {
    color_pattern().is_match(value.trim())
}

const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Whether a link target may be placed in an `href`: relative paths,
/// fragments, queries, or one of the http(s)/mailto/tel schemes
pub fn is_safe_link(link: &str) -> bool {
    let link = link.trim();
    let Some(colon) = link.find(':') else {
        return true;
    };
    // a colon after the first path, query or fragment delimiter is not a scheme
    if link[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = &link[..colon];
    SAFE_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme))
}

/// Check a template and return every finding in document order
pub fn validate_template(template: &Template) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for component in &template.components {
        if component.id.trim().is_empty() {
            issues.push(ValidationIssue::error("Component with empty id"));
        } else if !seen.insert(component.id.as_str()) {
            issues.push(
                ValidationIssue::error(format!("Duplicate component id '{}'", component.id))
                    .with_component(&component.id),
            );
        }

        let component_type = match &component.kind {
            ComponentKind::Known(t) => *t,
            ComponentKind::Unknown(name) => {
                issues.push(
                    ValidationIssue::warning(format!(
                        "Unknown component type '{}' will render as a placeholder",
                        name
                    ))
                    .with_component(&component.id),
                );
                continue;
            }
        };

        let missing: Vec<&str> = ComponentProps::declared_keys(component_type)
            .iter()
            .copied()
            .filter(|key| !component.props.contains_key(key))
            .collect();
        if !missing.is_empty() {
            issues.push(
                ValidationIssue::warning(format!(
                    "{} is missing properties: {}",
                    component_type,
                    missing.join(", ")
                ))
                .with_component(&component.id),
            );
        }

        for (key, value) in component.props.iter() {
            if is_link_key(key) {
                if let PropValue::Text(link) = value {
                    if !is_safe_link(link) {
                        issues.push(
                            ValidationIssue::warning(format!(
                                "Unsafe link '{}' for '{}' will render as '#'",
                                link, key
                            ))
                            .with_component(&component.id),
                        );
                    }
                }
                continue;
            }
            if !is_color_key(key) {
                continue;
            }
            let valid = match value {
                PropValue::Text(s) => is_valid_color(s),
                _ => false,
            };
            if !valid {
                issues.push(
                    ValidationIssue::warning(format!("Invalid color '{}' for '{}'", value, key))
                        .with_component(&component.id),
                );
            }
        }
    }

    issues
}

pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.level == ValidationLevel::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_type::ComponentType;
    use crate::instance::ComponentInstance;
    use crate::template::TemplateCategory;
    use crate::value::PropBag;

    #[test]
    fn test_clean_template_has_no_issues() {
        let template = Template::new("Clean", TemplateCategory::Custom).with_components(vec![
            ComponentInstance::new(ComponentType::Hero),
            ComponentInstance::new(ComponentType::Faq),
        ]);
        assert!(validate_template(&template).is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let template = Template::new("Dup", TemplateCategory::Custom).with_components(vec![
            ComponentInstance::new(ComponentType::Text).with_id("a"),
            ComponentInstance::new(ComponentType::Text).with_id("a"),
        ]);
        let issues = validate_template(&template);
        assert!(has_errors(&issues));
        assert_eq!(issues[0].component_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_unknown_types_and_bad_colors_are_warnings() {
        let json = r##"{
            "name": "Mixed",
            "components": [
                {"id": "c1", "type": "carousel", "props": {}},
                {"id": "c2", "type": "spacer", "props": {"height": 10, "backgroundColor": "reddish"}}
            ]
        }"##;
        let template: Template = serde_json::from_str(json).unwrap();
        let issues = validate_template(&template);

        assert!(!has_errors(&issues));
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("carousel"));
        assert!(issues[1].message.contains("reddish"));
    }

    #[test]
    fn test_missing_props_reported() {
        let mut instance = ComponentInstance::new(ComponentType::Button);
        instance.props = PropBag::new().with("text", "Go");
        let template = Template::new("Sparse", TemplateCategory::Custom).with_components(vec![instance]);

        let issues = validate_template(&template);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("link"));
    }

    #[test]
    fn test_script_links_are_warnings() {
        let mut button = ComponentInstance::new(ComponentType::Button).with_id("b");
        button.props.insert("link", " JavaScript:alert(1)");
        let mut hero = ComponentInstance::new(ComponentType::Hero).with_id("h");
        hero.props.insert("buttonLink", "https://shop.example/sale");
        let template =
            Template::new("Links", TemplateCategory::Custom).with_components(vec![button, hero]);

        let issues = validate_template(&template);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, ValidationLevel::Warning);
        assert_eq!(issues[0].component_id.as_deref(), Some("b"));
        assert!(issues[0].message.contains("'link'"));
    }

    #[test]
    fn test_safe_links() {
        for ok in ["", "/sale", "#top", "?page=2", "products/1", "/a:b", "HTTPS://x.y", "mailto:a@b.c", "tel:+1555"] {
            assert!(is_safe_link(ok), "{}", ok);
        }
        for bad in ["javascript:alert(1)", "data:text/html,x", "vbscript:msgbox", " JAVASCRIPT:void(0)"] {
            assert!(!is_safe_link(bad), "{}", bad);
        }
    }

    #[test]
    fn test_color_literals() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#1e293b"));
        assert!(is_valid_color("transparent"));
        assert!(!is_valid_color("blue"));
        assert!(!is_valid_color("#12345"));
    }
}

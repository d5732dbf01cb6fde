//! # Component Instances
//!
//! One configured building block of a page: a type tag, an id that is stable
//! for the instance's lifetime, and its property bag.

use crate::component_type::{ComponentKind, ComponentType};
use crate::errors::RegistryError;
use crate::props::ComponentProps;
use crate::value::PropBag;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A component placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: String,

    /// Immutable after creation; changing type means delete + recreate
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    #[serde(default)]
    pub props: PropBag,

    /// Visual overrides applied on top of the rendered section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PropBag>,
}

impl ComponentInstance {
    /// Create an instance with a fresh id and the registry defaults
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            id: generate_component_id(component_type.as_str()),
            kind: ComponentKind::Known(component_type),
            props: ComponentProps::defaults(component_type).to_bag(),
            style: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_props(mut self, patch: &PropBag) -> Self {
        self.props.merge(patch);
        self
    }

    pub fn with_style(mut self, style: PropBag) -> Self {
        self.style = Some(style);
        self
    }

    pub fn component_type(&self) -> Option<ComponentType> {
        self.kind.known()
    }

    /// Copy with a freshly generated id; type, props and style are cloned
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_component_id(self.kind.as_str()),
            kind: self.kind.clone(),
            props: self.props.clone(),
            style: self.style.clone(),
        }
    }

    /// Typed view of the props, or `UnknownType` for forward-compat types
    pub fn resolved_props(&self) -> Result<ComponentProps, RegistryError> {
        match &self.kind {
            ComponentKind::Known(t) => Ok(ComponentProps::from_bag(*t, &self.props)),
            ComponentKind::Unknown(name) => Err(RegistryError::UnknownType(name.clone())),
        }
    }
}

/// Generate a component id that is never reused
pub fn generate_component_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance_has_defaults() {
        let hero = ComponentInstance::new(ComponentType::Hero);
        assert!(hero.id.starts_with("hero-"));
        assert!(hero.props.contains_key("title"));
        assert!(hero.props.contains_key("subtitle"));
        assert_eq!(hero.style, None);
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let original = ComponentInstance::new(ComponentType::Banner);
        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.kind, original.kind);
        assert_eq!(copy.props, original.props);
    }

    #[test]
    fn test_wire_shape() {
        let instance = ComponentInstance::new(ComponentType::Spacer).with_id("spacer-1");
        let json: serde_json::Value = serde_json::to_value(&instance).unwrap();

        assert_eq!(json["id"], "spacer-1");
        assert_eq!(json["type"], "spacer");
        assert_eq!(json["props"]["height"], 40);
        assert!(json.get("style").is_none());
    }

    #[test]
    fn test_unknown_type_resolves_to_error() {
        let json = r#"{"id":"x-1","type":"carousel","props":{"speed":3}}"#;
        let instance: ComponentInstance = serde_json::from_str(json).unwrap();

        assert_eq!(instance.component_type(), None);
        assert_eq!(
            instance.resolved_props().unwrap_err(),
            RegistryError::UnknownType("carousel".to_string())
        );
    }
}

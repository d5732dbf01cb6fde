use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of component types a page can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Hero,
    Categories,
    Products,
    Banner,
    Text,
    Image,
    Button,
    Spacer,
    Testimonials,
    Newsletter,
    Features,
    Countdown,
    Gallery,
    Contact,
    Faq,
    Container,
}

impl ComponentType {
    pub const ALL: [ComponentType; 16] = [
        ComponentType::Hero,
        ComponentType::Categories,
        ComponentType::Products,
        ComponentType::Banner,
        ComponentType::Text,
        ComponentType::Image,
        ComponentType::Button,
        ComponentType::Spacer,
        ComponentType::Testimonials,
        ComponentType::Newsletter,
        ComponentType::Features,
        ComponentType::Countdown,
        ComponentType::Gallery,
        ComponentType::Contact,
        ComponentType::Faq,
        ComponentType::Container,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Hero => "hero",
            ComponentType::Categories => "categories",
            ComponentType::Products => "products",
            ComponentType::Banner => "banner",
            ComponentType::Text => "text",
            ComponentType::Image => "image",
            ComponentType::Button => "button",
            ComponentType::Spacer => "spacer",
            ComponentType::Testimonials => "testimonials",
            ComponentType::Newsletter => "newsletter",
            ComponentType::Features => "features",
            ComponentType::Countdown => "countdown",
            ComponentType::Gallery => "gallery",
            ComponentType::Contact => "contact",
            ComponentType::Faq => "faq",
            ComponentType::Container => "container",
        }
    }

    pub fn is_available_on(&self, surface: Surface) -> bool {
        match surface {
            Surface::Storefront => *self != ComponentType::Container,
            Surface::PageBuilder => matches!(
                self,
                ComponentType::Container
                    | ComponentType::Text
                    | ComponentType::Image
                    | ComponentType::Button
                    | ComponentType::Hero
                    | ComponentType::Products
            ),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownType(s.to_string()))
    }
}

/// Editing surface a component palette is shown on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Public storefront page editor (full component set)
    #[default]
    Storefront,
    /// Admin page builder (simplified primitives)
    PageBuilder,
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "storefront" => Ok(Surface::Storefront),
            "page_builder" | "page-builder" | "builder" => Ok(Surface::PageBuilder),
            other => Err(format!("unknown surface '{}'", other)),
        }
    }
}

/// Type tag as stored on an instance.
///
/// Persisted documents may reference types this build does not know (written
/// by a newer schema). Those load as `Unknown` and render as placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Known(ComponentType),
    Unknown(String),
}

impl ComponentKind {
    pub fn known(&self) -> Option<ComponentType> {
        match self {
            ComponentKind::Known(t) => Some(*t),
            ComponentKind::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Known(t) => t.as_str(),
            ComponentKind::Unknown(s) => s,
        }
    }
}

impl From<String> for ComponentKind {
    fn from(s: String) -> Self {
        match s.parse::<ComponentType>() {
            Ok(t) => ComponentKind::Known(t),
            Err(_) => ComponentKind::Unknown(s),
        }
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl From<ComponentType> for ComponentKind {
    fn from(t: ComponentType) -> Self {
        ComponentKind::Known(t)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_type() {
        for t in ComponentType::ALL {
            assert_eq!(t.as_str().parse::<ComponentType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = "carousel".parse::<ComponentType>().unwrap_err();
        assert_eq!(err, RegistryError::UnknownType("carousel".to_string()));
    }

    #[test]
    fn test_kind_keeps_unknown_strings() {
        let kind: ComponentKind = serde_json::from_str("\"carousel\"").unwrap();
        assert_eq!(kind, ComponentKind::Unknown("carousel".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"carousel\"");

        let kind: ComponentKind = serde_json::from_str("\"hero\"").unwrap();
        assert_eq!(kind.known(), Some(ComponentType::Hero));
    }

    #[test]
    fn test_surfaces() {
        let builder: Vec<_> = ComponentType::ALL
            .iter()
            .filter(|t| t.is_available_on(Surface::PageBuilder))
            .collect();
        assert_eq!(builder.len(), 6);

        let storefront = ComponentType::ALL
            .iter()
            .filter(|t| t.is_available_on(Surface::Storefront))
            .count();
        assert_eq!(storefront, 15);
    }
}

//! # Component Registry
//!
//! Static catalog of the component types an editor can place, with display
//! metadata and default properties. The registry is read-only process-wide
//! configuration; lookups never mutate it.

use crate::component_type::{ComponentType, Surface};
use crate::errors::RegistryError;
use crate::props::ComponentProps;
use crate::value::PropBag;
use serde::Serialize;

/// Palette entry for one component type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub display_name: &'static str,
    pub description: &'static str,
    pub default_props: PropBag,
}

struct Entry {
    component_type: ComponentType,
    display_name: &'static str,
    description: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        component_type: ComponentType::Hero,
        display_name: "Hero Banner",
        description: "Large banner with headline, subtitle and call to action",
    },
    Entry {
        component_type: ComponentType::Categories,
        display_name: "Categories",
        description: "Grid of product categories",
    },
    Entry {
        component_type: ComponentType::Products,
        display_name: "Product Grid",
        description: "Featured products with price and rating",
    },
    Entry {
        component_type: ComponentType::Banner,
        display_name: "Promo Banner",
        description: "Thin promotional strip",
    },
    Entry {
        component_type: ComponentType::Text,
        display_name: "Text Block",
        description: "Paragraphs of free text",
    },
    Entry {
        component_type: ComponentType::Image,
        display_name: "Image",
        description: "Single image, optionally linked",
    },
    Entry {
        component_type: ComponentType::Button,
        display_name: "Button",
        description: "Call-to-action button",
    },
    Entry {
        component_type: ComponentType::Spacer,
        display_name: "Spacer",
        description: "Vertical whitespace",
    },
    Entry {
        component_type: ComponentType::Testimonials,
        display_name: "Testimonials",
        description: "Customer quotes",
    },
    Entry {
        component_type: ComponentType::Newsletter,
        display_name: "Newsletter",
        description: "Email signup form",
    },
    Entry {
        component_type: ComponentType::Features,
        display_name: "Features",
        description: "Highlights of the store's services",
    },
    Entry {
        component_type: ComponentType::Countdown,
        display_name: "Countdown",
        description: "Timer counting down to the end of a sale",
    },
    Entry {
        component_type: ComponentType::Gallery,
        display_name: "Gallery",
        description: "Image grid",
    },
    Entry {
        component_type: ComponentType::Contact,
        display_name: "Contact",
        description: "Contact details and message form",
    },
    Entry {
        component_type: ComponentType::Faq,
        display_name: "FAQ",
        description: "Frequently asked questions",
    },
    Entry {
        component_type: ComponentType::Container,
        display_name: "Container",
        description: "Layout box for page-builder content",
    },
];

impl Entry {
    fn to_spec(&self) -> ComponentSpec {
        ComponentSpec {
            component_type: self.component_type,
            display_name: self.display_name,
            description: self.description,
            default_props: default_props(self.component_type),
        }
    }
}

/// Ordered palette for a surface
pub fn list_available(surface: Surface) -> Vec<ComponentSpec> {
    ENTRIES
        .iter()
        .filter(|e| e.component_type.is_available_on(surface))
        .map(Entry::to_spec)
        .collect()
}

/// Palette entry for a known type
pub fn spec_for(component_type: ComponentType) -> ComponentSpec {
    ENTRIES
        .iter()
        .find(|e| e.component_type == component_type)
        .map(Entry::to_spec)
        .unwrap_or_else(|| ComponentSpec {
            component_type,
            display_name: component_type.as_str(),
            description: "",
            default_props: default_props(component_type),
        })
}

/// Default property bag for a known type
pub fn default_props(component_type: ComponentType) -> PropBag {
    ComponentProps::defaults(component_type).to_bag()
}

/// Default property bag by type name.
///
/// Fails with `UnknownType` for names outside the closed set; callers treat
/// that as non-fatal (see [`get_defaults_or_empty`]).
pub fn get_defaults(type_name: &str) -> Result<PropBag, RegistryError> {
    let component_type: ComponentType = type_name.parse()?;
    Ok(default_props(component_type))
}

/// Defaults for `type_name`, or an empty bag when the type is unknown
pub fn get_defaults_or_empty(type_name: &str) -> PropBag {
    get_defaults(type_name).unwrap_or_default()
}

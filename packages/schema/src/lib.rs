//! # Pagekit Schema
//!
//! Data model for dynamically composed pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: registry + page document model      │
//! │  - Closed set of component types            │
//! │  - Open property bags, typed record views   │
//! │  - Templates (ordered component lists)      │
//! └─────────────────────────────────────────────┘
//!            ↓                      ↓
//! ┌──────────────────────┐ ┌──────────────────────┐
//! │ editor: mutations    │ │ renderer: render tree│
//! └──────────────────────┘ └──────────────────────┘
//!            ↓
//! ┌─────────────────────────────────────────────┐
//! │ gateway: template persistence               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Bag is the source of truth**: typed records are views resolved from it
//! 2. **Resolution never fails**: missing or ill-typed keys take the default
//! 3. **Unknown types survive**: data from newer schemas round-trips untouched
//!
//! ## Usage
//!
//! ```rust
//! use pagekit_schema::{ComponentInstance, ComponentType, Template, TemplateCategory};
//!
//! let mut page = Template::new("Spring Sale", TemplateCategory::Homepage);
//! page.components.push(ComponentInstance::new(ComponentType::Hero));
//!
//! let json = serde_json::to_string(&page).unwrap();
//! let loaded: Template = serde_json::from_str(&json).unwrap();
//! assert_eq!(loaded, page);
//! ```

mod component_type;
mod errors;
mod instance;
pub mod props;
pub mod registry;
mod template;
pub mod validation;
mod value;
mod viewport;

pub use component_type::{ComponentKind, ComponentType, Surface};
pub use errors::RegistryError;
pub use instance::{generate_component_id, ComponentInstance};
pub use props::ComponentProps;
pub use registry::{get_defaults, get_defaults_or_empty, list_available, ComponentSpec};
pub use template::{PageDocument, Template, TemplateCategory, COPY_MARKER};
pub use validation::{is_safe_link, validate_template, ValidationIssue, ValidationLevel};
pub use value::{FromProp, IntoProp, PropBag, PropValue};
pub use viewport::Viewport;

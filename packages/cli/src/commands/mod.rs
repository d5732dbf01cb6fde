pub mod render;
pub mod templates;
pub mod types;
pub mod validate;

pub use render::{render, RenderArgs};
pub use templates::{templates, TemplatesArgs};
pub use types::{types, TypesArgs};
pub use validate::{validate, ValidateArgs};

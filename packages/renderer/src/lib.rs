//! # Pagekit Renderer
//!
//! Pure transformation from page documents to render trees.
//!
//! ## Architecture
//!
//! ```text
//! ComponentInstance ──resolve──▶ ComponentProps ──section fn──▶ VNode
//!        │                                                       │
//!        └── unknown type ──────────────▶ VNode::Placeholder ────┤
//!                                                                ▼
//!                                     RenderedPage ──▶ render_html ──▶ String
//! ```
//!
//! Rendering is a function of (component, [`RenderContext`]). The context
//! carries the clock, viewport, editor selection, decorative seed and host
//! catalog data, so two renders with equal inputs are equal.
//!
//! ## Usage
//!
//! ```rust
//! use pagekit_renderer::{render_html, HtmlOptions, RenderContext, Renderer};
//! use pagekit_schema::{ComponentInstance, ComponentType};
//!
//! let components = vec![ComponentInstance::new(ComponentType::Hero)];
//! let page = Renderer::new(RenderContext::new()).render_page(&components);
//!
//! assert_eq!(page.collect_links(), vec!["/products"]);
//! let html = render_html(&page, &HtmlOptions::compact());
//! assert!(html.contains("pk-hero"));
//! ```

pub mod context;
pub mod decor;
pub mod html;
pub mod renderer;
mod sections;
pub mod vdom;

pub use context::{Catalog, CategoryCard, ProductCard, RenderContext, RenderMode};
pub use decor::DecorSource;
pub use html::{node_to_html, render_html, HtmlOptions};
pub use renderer::{render, Renderer};
pub use sections::{effective_columns, MAX_COLUMNS};
pub use vdom::{RenderedPage, VNode};

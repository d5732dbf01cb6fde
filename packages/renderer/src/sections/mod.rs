//! Per-type section renderers.
//!
//! Every function receives an already-resolved typed record, so missing or
//! ill-typed properties have been replaced by defaults before rendering
//! starts. The returned node is the section root; the caller adds identity
//! attributes and style overrides.

mod catalog;
mod content;
mod marketing;
mod social;

use crate::context::RenderContext;
use crate::vdom::VNode;
use pagekit_schema::props::TextAlign;
use pagekit_schema::{is_safe_link, ComponentProps, ComponentType, Viewport};

/// Hard upper bound on grid columns regardless of requested value
pub const MAX_COLUMNS: usize = 4;

/// Per-render inputs for a single section
pub(crate) struct Section<'a> {
    pub id: &'a str,
    pub ctx: &'a RenderContext,
}

pub(crate) fn render_section(props: &ComponentProps, section: &Section<'_>) -> VNode {
    match props {
        ComponentProps::Hero(p) => marketing::hero(p, section),
        ComponentProps::Banner(p) => marketing::banner(p, section),
        ComponentProps::Newsletter(p) => marketing::newsletter(p, section),
        ComponentProps::Countdown(p) => marketing::countdown(p, section),
        ComponentProps::Categories(p) => catalog::categories(p, section),
        ComponentProps::Products(p) => catalog::products(p, section),
        ComponentProps::Text(p) => content::text(p, section),
        ComponentProps::Image(p) => content::image(p, section),
        ComponentProps::Button(p) => content::button(p, section),
        ComponentProps::Spacer(p) => content::spacer(p, section),
        ComponentProps::Container(p) => content::container(p, section),
        ComponentProps::Testimonials(p) => social::testimonials(p, section),
        ComponentProps::Features(p) => social::features(p, section),
        ComponentProps::Gallery(p) => social::gallery(p, section),
        ComponentProps::Contact(p) => social::contact(p, section),
        ComponentProps::Faq(p) => social::faq(p, section),
    }
}

/// Column count after clamping to `[1, MAX_COLUMNS]` and the viewport width
pub fn effective_columns(requested: i64, viewport: Viewport) -> usize {
    let clamped = requested.clamp(1, MAX_COLUMNS as i64) as usize;
    clamped.min(viewport.max_columns())
}

pub(crate) fn section_root(component_type: ComponentType) -> VNode {
    VNode::element("section")
        .with_class("pk-section")
        .with_class(format!("pk-{}", component_type))
}

pub(crate) fn heading(tag: &str, content: &str) -> Option<VNode> {
    if content.trim().is_empty() {
        None
    } else {
        Some(VNode::element(tag).with_text(content))
    }
}

pub(crate) fn grid(columns: usize, gap: f64) -> VNode {
    VNode::element("div")
        .with_class("pk-grid")
        .with_style("display", "grid")
        .with_style(
            "grid-template-columns",
            format!("repeat({}, minmax(0, 1fr))", columns),
        )
        .with_style("gap", px(gap))
        .with_attr("data-columns", columns.to_string())
}

/// Link target fit for an `href`; script and other schemes become `#`
pub(crate) fn safe_href(link: &str) -> String {
    if is_safe_link(link) {
        link.trim().to_string()
    } else {
        "#".to_string()
    }
}

/// Anchor that asks the host router to navigate when activated
pub(crate) fn cta_link(label: &str, href: &str) -> VNode {
    let href = safe_href(href);
    VNode::element("a")
        .with_class("pk-cta")
        .with_attr("href", &href)
        .with_attr("data-navigate", &href)
        .with_text(label)
}

pub(crate) fn px(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{:.1}px", value)
    }
}

pub(crate) fn align(text_align: TextAlign) -> &'static str {
    text_align.as_str()
}

pub(crate) fn stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

pub(crate) fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Blank-line separated paragraphs
pub(crate) fn paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

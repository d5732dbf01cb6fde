//! Turns page documents into render trees.

use crate::context::RenderContext;
use crate::sections::{render_section, Section};
use crate::vdom::{RenderedPage, VNode};
use pagekit_schema::{ComponentInstance, PageDocument, PropBag, PropValue};
use tracing::{debug, warn};

/// CSS properties whose numeric values carry no unit
const UNITLESS: &[&str] = &["opacity", "z-index", "font-weight", "line-height", "flex", "order"];

/// Page renderer bound to one [`RenderContext`]
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    ctx: RenderContext,
}

impl Renderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Render every component in order; one root node per component
    pub fn render_page(&self, components: &[ComponentInstance]) -> RenderedPage {
        let mut page = RenderedPage::new(self.ctx.viewport);
        for component in components {
            page.add_node(self.render(component));
        }
        debug!(
            components = components.len(),
            viewport = self.ctx.viewport.as_str(),
            "rendered page"
        );
        page
    }

    pub fn render_template(&self, template: &PageDocument) -> RenderedPage {
        self.render_page(&template.components)
    }

    /// Render a single component. Never fails: unknown types become placeholders.
    pub fn render(&self, component: &ComponentInstance) -> VNode {
        let props = match component.resolved_props() {
            Ok(props) => props,
            Err(err) => {
                warn!(component_id = %component.id, "{}", err);
                return VNode::placeholder(component.kind.as_str(), &component.id);
            }
        };

        let section = Section {
            id: &component.id,
            ctx: &self.ctx,
        };
        let mut root = render_section(&props, &section)
            .with_attr("data-component-id", &component.id)
            .with_attr("data-component-type", component.kind.as_str());

        if self.ctx.is_selected(&component.id) {
            root = root.with_attr("data-selected", "true");
        }
        if let Some(style) = &component.style {
            root = apply_style_overrides(root, style);
        }
        root
    }
}

/// Render one component with the given context
pub fn render(component: &ComponentInstance, ctx: &RenderContext) -> VNode {
    Renderer::new(ctx.clone()).render(component)
}

/// `backgroundColor` -> `background-color`
pub fn css_property(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn css_value(property: &str, value: &PropValue) -> Option<String> {
    match value {
        PropValue::Text(text) => Some(text.clone()),
        PropValue::Number(n) if UNITLESS.contains(&property) => Some(value_to_plain(*n)),
        PropValue::Number(n) => Some(format!("{}px", value_to_plain(*n))),
        PropValue::Bool(_) | PropValue::Json(_) => None,
    }
}

fn value_to_plain(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn apply_style_overrides(mut node: VNode, style: &PropBag) -> VNode {
    for (key, value) in style.iter() {
        let property = css_property(key);
        match css_value(&property, value) {
            Some(css) => node = node.with_style(property, css),
            None => debug!(key = %key, "ignoring non-scalar style override"),
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderMode;
    use pagekit_schema::{ComponentKind, ComponentType};

    #[test]
    fn test_css_property() {
        assert_eq!(css_property("backgroundColor"), "background-color");
        assert_eq!(css_property("zIndex"), "z-index");
        assert_eq!(css_property("margin"), "margin");
    }

    #[test]
    fn test_style_overrides() {
        let component = ComponentInstance::new(ComponentType::Spacer).with_style(
            PropBag::new()
                .with("marginTop", 12)
                .with("opacity", 0.5)
                .with("borderColor", "#000"),
        );
        let node = Renderer::default().render(&component);

        assert_eq!(node.style("margin-top"), Some("12px"));
        assert_eq!(node.style("opacity"), Some("0.5"));
        assert_eq!(node.style("border-color"), Some("#000"));
    }

    #[test]
    fn test_identity_attributes() {
        let component = ComponentInstance::new(ComponentType::Hero).with_id("hero-1");
        let node = Renderer::default().render(&component);

        assert_eq!(node.tag(), Some("section"));
        assert_eq!(node.attr("data-component-id"), Some("hero-1"));
        assert_eq!(node.attr("data-component-type"), Some("hero"));
        assert!(node.has_class("pk-section"));
        assert!(node.has_class("pk-hero"));
        assert_eq!(node.attr("data-selected"), None);
    }

    #[test]
    fn test_selected_section_is_marked() {
        let ctx = RenderContext::new().with_mode(RenderMode::Editor {
            selected: Some("b".to_string()),
        });
        let renderer = Renderer::new(ctx);
        let a = ComponentInstance::new(ComponentType::Text).with_id("a");
        let b = ComponentInstance::new(ComponentType::Text).with_id("b");

        assert_eq!(renderer.render(&a).attr("data-selected"), None);
        assert_eq!(renderer.render(&b).attr("data-selected"), Some("true"));
    }

    #[test]
    fn test_unknown_type_placeholder() {
        let component = ComponentInstance {
            id: "x-1".to_string(),
            kind: ComponentKind::Unknown("carousel".to_string()),
            props: PropBag::new(),
            style: None,
        };
        let node = render(&component, &RenderContext::new());
        match node {
            VNode::Placeholder {
                component_type,
                component_id,
                ..
            } => {
                assert_eq!(component_type, "carousel");
                assert_eq!(component_id, "x-1");
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }
}

use super::{align, cta_link, paragraphs, px, safe_href, section_root, Section};
use crate::vdom::VNode;
use pagekit_schema::props::{
    ButtonProps, ButtonSize, ButtonVariant, ContainerProps, ImageProps, SpacerProps, TextProps,
};
use pagekit_schema::ComponentType;

pub(crate) fn text(p: &TextProps, _section: &Section<'_>) -> VNode {
    section_root(ComponentType::Text)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("font-size", px(p.font_size))
        .with_style("text-align", align(p.text_align))
        .with_style("padding", "24px")
        .with_children(
            paragraphs(&p.content)
                .into_iter()
                .map(|para| VNode::element("p").with_text(para)),
        )
}

pub(crate) fn image(p: &ImageProps, _section: &Section<'_>) -> VNode {
    let img = VNode::element("img")
        .with_attr("src", &p.src)
        .with_attr("alt", &p.alt)
        .with_attr("loading", "lazy")
        .with_style("width", "100%")
        .with_style("height", px(p.height))
        .with_style("object-fit", p.object_fit.as_str())
        .with_style("border-radius", px(p.border_radius));

    let body = if p.link.trim().is_empty() {
        img
    } else {
        let href = safe_href(&p.link);
        VNode::element("a")
            .with_attr("href", &href)
            .with_attr("data-navigate", &href)
            .with_child(img)
    };

    section_root(ComponentType::Image).with_child(body)
}

fn button_padding(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Small => "6px 12px",
        ButtonSize::Medium => "10px 20px",
        ButtonSize::Large => "14px 28px",
    }
}

pub(crate) fn button(p: &ButtonProps, _section: &Section<'_>) -> VNode {
    let control = if p.link.trim().is_empty() {
        VNode::element("button")
            .with_attr("type", "button")
            .with_text(&p.text)
    } else {
        cta_link(&p.text, &p.link)
    };

    let control = match p.variant {
        ButtonVariant::Primary => control
            .with_style("background-color", &p.background_color)
            .with_style("color", &p.text_color)
            .with_style("border", "none"),
        ButtonVariant::Secondary => control
            .with_style("background-color", "#e5e7eb")
            .with_style("color", "#111827")
            .with_style("border", "none"),
        ButtonVariant::Outline => control
            .with_style("background-color", "transparent")
            .with_style("color", &p.background_color)
            .with_style("border", format!("2px solid {}", p.background_color)),
    };

    let control = control
        .with_class(format!("pk-button-{}", p.variant.as_str()))
        .with_style("padding", button_padding(p.size))
        .with_style("border-radius", "6px")
        .with_style("display", "inline-block");

    section_root(ComponentType::Button)
        .with_style("text-align", align(p.text_align))
        .with_style("padding", "16px")
        .with_child(control)
}

pub(crate) fn spacer(p: &SpacerProps, _section: &Section<'_>) -> VNode {
    section_root(ComponentType::Spacer)
        .with_attr("aria-hidden", "true")
        .with_style("height", px(p.height))
        .with_style("background-color", &p.background_color)
}

pub(crate) fn container(p: &ContainerProps, _section: &Section<'_>) -> VNode {
    let blocks = paragraphs(&p.content);
    let inner = VNode::element("div")
        .with_class("pk-container-inner")
        .with_style("max-width", px(p.max_width))
        .with_style("margin", "0 auto")
        .with_style("padding", px(p.padding))
        .with_style("border-radius", px(p.border_radius))
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("text-align", align(p.text_align));

    let inner = if blocks.is_empty() {
        inner.with_child(VNode::comment("Empty container"))
    } else {
        inner.with_children(blocks.into_iter().map(|b| VNode::element("p").with_text(b)))
    };

    section_root(ComponentType::Container).with_child(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderContext;

    #[test]
    fn test_text_splits_paragraphs() {
        let ctx = RenderContext::new();
        let props = TextProps {
            content: "First\n\nSecond".to_string(),
            ..TextProps::default()
        };
        let node = text(&props, &Section { id: "t", ctx: &ctx });
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.style("font-size"), Some("16px"));
    }

    #[test]
    fn test_button_without_link_is_plain_button() {
        let ctx = RenderContext::new();
        let props = ButtonProps {
            link: String::new(),
            ..ButtonProps::default()
        };
        let node = button(&props, &Section { id: "b", ctx: &ctx });
        assert_eq!(node.children()[0].tag(), Some("button"));
        assert!(node.find_all(&|n| n.attr("data-navigate").is_some()).is_empty());
    }

    #[test]
    fn test_outline_button_uses_border() {
        let ctx = RenderContext::new();
        let props = ButtonProps {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Large,
            ..ButtonProps::default()
        };
        let node = button(&props, &Section { id: "b", ctx: &ctx });
        let control = &node.children()[0];
        assert_eq!(control.style("border"), Some("2px solid #2563eb"));
        assert_eq!(control.style("padding"), Some("14px 28px"));
    }

    #[test]
    fn test_empty_container_renders_comment() {
        let ctx = RenderContext::new();
        let node = container(&ContainerProps::default(), &Section { id: "c", ctx: &ctx });
        let inner = &node.children()[0];
        assert!(matches!(inner.children()[0], VNode::Comment { .. }));
    }

    #[test]
    fn test_linked_image_navigates() {
        let ctx = RenderContext::new();
        let props = ImageProps {
            link: "/sale".to_string(),
            ..ImageProps::default()
        };
        let node = image(&props, &Section { id: "i", ctx: &ctx });
        assert_eq!(node.children()[0].attr("data-navigate"), Some("/sale"));
    }
}

use super::{effective_columns, grid, heading, px, section_root, stars, Section};
use crate::vdom::VNode;
use pagekit_schema::props::{
    split_entries, split_list, ContactProps, FaqProps, FeaturesProps, GalleryProps,
    TestimonialsProps,
};
use pagekit_schema::ComponentType;

const GALLERY_PLACEHOLDERS: usize = 6;

pub(crate) fn testimonials(p: &TestimonialsProps, section: &Section<'_>) -> VNode {
    let entries = split_entries(&p.items);
    let root = section_root(ComponentType::Testimonials)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title));

    if entries.is_empty() {
        return root.with_child(VNode::comment("No testimonials"));
    }

    let columns = effective_columns(p.columns, section.ctx.viewport);
    let cards = entries.into_iter().enumerate().map(|(slot, (author, quote))| {
        VNode::element("blockquote")
            .with_class("pk-testimonial")
            .with_child(
                VNode::element("div")
                    .with_class("pk-rating")
                    .with_text(stars(section.ctx.decor.rating(section.id, slot))),
            )
            .with_child(VNode::element("p").with_text(format!("\u{201c}{}\u{201d}", quote)))
            .with_child(VNode::element("cite").with_text(author))
    });

    root.with_child(grid(columns, 24.0).with_children(cards))
}

pub(crate) fn features(p: &FeaturesProps, section: &Section<'_>) -> VNode {
    let columns = effective_columns(p.columns, section.ctx.viewport);
    let cards = split_entries(&p.items).into_iter().map(|(title, description)| {
        VNode::element("div")
            .with_class("pk-feature")
            .with_child(VNode::element("h3").with_text(title))
            .with_children(heading("p", &description))
    });

    section_root(ComponentType::Features)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("padding", "48px 24px")
        .with_style("text-align", "center")
        .with_children(heading("h2", &p.title))
        .with_child(grid(columns, 24.0).with_children(cards))
}

pub(crate) fn gallery(p: &GalleryProps, section: &Section<'_>) -> VNode {
    let columns = effective_columns(p.columns, section.ctx.viewport);
    let mut images = split_list(&p.images);
    if images.is_empty() {
        images = (1..=GALLERY_PLACEHOLDERS)
            .map(|n| format!("https://placehold.co/400x400?text=Image+{}", n))
            .collect();
    }

    let tiles = images.into_iter().enumerate().map(|(i, src)| {
        VNode::element("img")
            .with_attr("src", src)
            .with_attr("alt", format!("Gallery image {}", i + 1))
            .with_attr("loading", "lazy")
            .with_style("width", "100%")
            .with_style("aspect-ratio", "1 / 1")
            .with_style("object-fit", "cover")
    });

    section_root(ComponentType::Gallery)
        .with_style("background-color", &p.background_color)
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_child(grid(columns, p.gap).with_children(tiles))
}

pub(crate) fn contact(p: &ContactProps, _section: &Section<'_>) -> VNode {
    let mut details = VNode::element("div").with_class("pk-contact-details");
    if !p.email.trim().is_empty() {
        details = details.with_child(
            VNode::element("a")
                .with_attr("href", format!("mailto:{}", p.email.trim()))
                .with_text(p.email.trim()),
        );
    }
    if !p.phone.trim().is_empty() {
        let dial: String = p
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        details = details.with_child(
            VNode::element("a")
                .with_attr("href", format!("tel:{}", dial))
                .with_text(p.phone.trim()),
        );
    }
    details = details.with_children(heading("address", &p.address));

    let mut root = section_root(ComponentType::Contact)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_child(details);

    if p.show_form {
        root = root.with_child(
            VNode::element("form")
                .with_class("pk-contact-form")
                .with_style("display", "grid")
                .with_style("gap", px(12.0))
                .with_child(
                    VNode::element("input")
                        .with_attr("type", "text")
                        .with_attr("name", "name")
                        .with_attr("placeholder", "Your name"),
                )
                .with_child(
                    VNode::element("input")
                        .with_attr("type", "email")
                        .with_attr("name", "email")
                        .with_attr("placeholder", "Your email"),
                )
                .with_child(
                    VNode::element("textarea")
                        .with_attr("name", "message")
                        .with_attr("rows", "4")
                        .with_attr("placeholder", "Your message"),
                )
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "submit")
                        .with_text("Send Message"),
                ),
        );
    }

    root
}

pub(crate) fn faq(p: &FaqProps, _section: &Section<'_>) -> VNode {
    let entries = split_entries(&p.items).into_iter().map(|(question, answer)| {
        VNode::element("details")
            .with_class("pk-faq-item")
            .with_child(VNode::element("summary").with_text(question))
            .with_children(heading("p", &answer))
    });

    section_root(ComponentType::Faq)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_children(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderContext;

    #[test]
    fn test_gallery_placeholders() {
        let ctx = RenderContext::new();
        let node = gallery(&GalleryProps::default(), &Section { id: "g", ctx: &ctx });
        let imgs = node.find_all(&|n| n.tag() == Some("img"));
        assert_eq!(imgs.len(), GALLERY_PLACEHOLDERS);
        assert_eq!(
            imgs[0].attr("src"),
            Some("https://placehold.co/400x400?text=Image+1")
        );
    }

    #[test]
    fn test_faq_entries() {
        let ctx = RenderContext::new();
        let props = FaqProps {
            items: "Q1|A1\nQ2|A2".to_string(),
            ..FaqProps::default()
        };
        let node = faq(&props, &Section { id: "f", ctx: &ctx });
        assert_eq!(node.find_all(&|n| n.tag() == Some("details")).len(), 2);
    }

    #[test]
    fn test_empty_testimonials_render_comment() {
        let ctx = RenderContext::new();
        let props = TestimonialsProps {
            items: String::new(),
            ..TestimonialsProps::default()
        };
        let node = testimonials(&props, &Section { id: "t", ctx: &ctx });
        assert!(node.find_all(&|n| n.has_class("pk-testimonial")).is_empty());
    }

    #[test]
    fn test_contact_links_and_form_toggle() {
        let ctx = RenderContext::new();
        let props = ContactProps {
            show_form: false,
            ..ContactProps::default()
        };
        let node = contact(&props, &Section { id: "c", ctx: &ctx });
        assert!(node.find_all(&|n| n.tag() == Some("form")).is_empty());
        let tel = node.find_all(&|n| n.attr("href").map_or(false, |h| h.starts_with("tel:")));
        assert_eq!(tel[0].attr("href"), Some("tel:+15551234567"));
    }
}

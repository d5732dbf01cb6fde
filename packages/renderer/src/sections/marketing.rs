use super::{align, cta_link, heading, px, section_root, Section};
use crate::vdom::VNode;
use chrono::{DateTime, Duration, Utc};
use pagekit_schema::props::{BannerProps, CountdownProps, HeroProps, NewsletterProps, TextAlign};
use pagekit_schema::ComponentType;

pub(crate) fn hero(p: &HeroProps, _section: &Section<'_>) -> VNode {
    let justify = match p.text_align {
        TextAlign::Left => "flex-start",
        TextAlign::Center => "center",
        TextAlign::Right => "flex-end",
    };

    let mut root = section_root(ComponentType::Hero)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("min-height", px(p.height))
        .with_style("display", "flex")
        .with_style("align-items", "center")
        .with_style("justify-content", justify)
        .with_style("text-align", align(p.text_align))
        .with_style("padding", "64px 24px");

    if !p.background_image.trim().is_empty() {
        root = root
            .with_style("background-image", format!("url('{}')", p.background_image))
            .with_style("background-size", "cover")
            .with_style("background-position", "center");
    }

    let mut content = VNode::element("div")
        .with_class("pk-hero-content")
        .with_style("max-width", "800px");
    content = content.with_children(heading("h1", &p.title));
    content = content.with_children(heading("p", &p.subtitle));

    if !p.button_text.trim().is_empty() {
        content = content.with_child(
            cta_link(&p.button_text, &p.button_link)
                .with_style("background-color", &p.text_color)
                .with_style("color", &p.background_color)
                .with_style("padding", "12px 32px")
                .with_style("border-radius", "6px")
                .with_style("display", "inline-block"),
        );
    }

    root.with_child(content)
}

pub(crate) fn banner(p: &BannerProps, _section: &Section<'_>) -> VNode {
    let message = if p.link.trim().is_empty() {
        VNode::element("p").with_text(&p.text)
    } else {
        VNode::element("p").with_child(cta_link(&p.text, &p.link).with_style("color", "inherit"))
    };

    section_root(ComponentType::Banner)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("text-align", align(p.text_align))
        .with_style("padding", "10px 16px")
        .with_child(message)
}

pub(crate) fn newsletter(p: &NewsletterProps, _section: &Section<'_>) -> VNode {
    let form = VNode::element("form")
        .with_class("pk-newsletter-form")
        .with_style("display", "flex")
        .with_style("gap", "8px")
        .with_style("justify-content", "center")
        .with_child(
            VNode::element("input")
                .with_attr("type", "email")
                .with_attr("name", "email")
                .with_attr("placeholder", &p.placeholder),
        )
        .with_child(
            VNode::element("button")
                .with_attr("type", "submit")
                .with_text(&p.button_text),
        );

    section_root(ComponentType::Newsletter)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("text-align", "center")
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_children(heading("p", &p.subtitle))
        .with_child(form)
}

/// Time left until `end_date`, clamped at zero. `None` when no valid date is set.
fn remaining(end_date: &str, now: DateTime<Utc>) -> Option<Duration> {
    let end = DateTime::parse_from_rfc3339(end_date.trim()).ok()?;
    let left = end.with_timezone(&Utc) - now;
    Some(left.max(Duration::zero()))
}

pub(crate) fn countdown(p: &CountdownProps, section: &Section<'_>) -> VNode {
    let left = remaining(&p.end_date, section.ctx.now);
    let total = left.map(|d| d.num_seconds()).unwrap_or(0);

    let units = [
        (total / 86_400, "Days"),
        ((total % 86_400) / 3_600, "Hours"),
        ((total % 3_600) / 60, "Minutes"),
        (total % 60, "Seconds"),
    ];

    let timer = VNode::element("div")
        .with_class("pk-countdown-timer")
        .with_style("display", "flex")
        .with_style("gap", "16px")
        .with_style("justify-content", "center")
        .with_children(units.iter().map(|(value, label)| {
            VNode::element("div")
                .with_class("pk-countdown-unit")
                .with_child(
                    VNode::element("span")
                        .with_class("pk-countdown-value")
                        .with_text(format!("{:02}", value)),
                )
                .with_child(
                    VNode::element("span")
                        .with_class("pk-countdown-label")
                        .with_text(*label),
                )
        }));

    let mut root = section_root(ComponentType::Countdown)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("text-align", "center")
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_children(heading("p", &p.subtitle))
        .with_child(timer);

    if !p.end_date.trim().is_empty() {
        root = root.with_attr("data-end-date", p.end_date.trim());
    }
    if total == 0 {
        root = root.with_child(
            VNode::element("p")
                .with_class("pk-countdown-ended")
                .with_text("This offer has ended"),
        );
    }

    root
}

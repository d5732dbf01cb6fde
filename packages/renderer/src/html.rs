//! HTML serialization of render trees.

use crate::vdom::{RenderedPage, VNode};
use std::collections::BTreeMap;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print with one node per line
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Wrap output in `<!DOCTYPE html>` with a head
    pub full_document: bool,
    /// Document title when `full_document` is set
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            full_document: false,
            title: "Page".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    pub fn document(title: impl Into<String>) -> Self {
        Self {
            full_document: true,
            title: title.into(),
            ..Self::default()
        }
    }
}

struct Writer<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Writer<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn node(&mut self, node: &VNode) {
        match node {
            VNode::Element {
                tag,
                attributes,
                styles,
                children,
            } => self.element(tag, attributes, styles, children),
            VNode::Text { content } => {
                let escaped = escape_html(content);
                self.add_line(&escaped);
            }
            VNode::Comment { content } => {
                let line = format!("<!-- {} -->", content.replace("--", "- -"));
                self.add_line(&line);
            }
            VNode::Placeholder {
                component_type,
                component_id,
                message,
            } => {
                let line = format!(
                    "<div class=\"pk-unknown\" data-component-id=\"{}\" data-component-type=\"{}\">{}</div>",
                    escape_html(component_id),
                    escape_html(component_type),
                    escape_html(message)
                );
                self.add_line(&line);
            }
        }
    }

    fn element(
        &mut self,
        tag: &str,
        attributes: &BTreeMap<String, String>,
        styles: &BTreeMap<String, String>,
        children: &[VNode],
    ) {
        let mut open = format!("<{}", tag);
        for (key, value) in attributes {
            open.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
        }
        if !styles.is_empty() {
            let css = styles
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            open.push_str(&format!(" style=\"{}\"", escape_html(&css)));
        }

        if is_void(tag) {
            open.push_str(" />");
            self.add_line(&open);
            return;
        }
        open.push('>');

        // Single text child stays on one line
        if let [VNode::Text { content }] = children {
            let line = format!("{}{}</{}>", open, escape_html(content), tag);
            self.add_line(&line);
            return;
        }

        if children.is_empty() {
            let line = format!("{}</{}>", open, tag);
            self.add_line(&line);
            return;
        }

        self.add_line(&open);
        self.indent();
        for child in children {
            self.node(child);
        }
        self.dedent();
        self.add_line(&format!("</{}>", tag));
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Serialize a rendered page
pub fn render_html(page: &RenderedPage, options: &HtmlOptions) -> String {
    let mut w = Writer::new(options);

    if options.full_document {
        w.add_line("<!DOCTYPE html>");
        w.add_line("<html lang=\"en\">");
        w.indent();
        w.add_line("<head>");
        w.indent();
        w.add_line("<meta charset=\"utf-8\" />");
        w.add_line(&format!(
            "<meta name=\"viewport\" content=\"width={}\" />",
            page.viewport.width_px()
        ));
        w.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
        w.dedent();
        w.add_line("</head>");
        w.add_line("<body>");
        w.indent();
    }

    w.add_line(&format!(
        "<main class=\"pk-page\" data-viewport=\"{}\">",
        page.viewport.as_str()
    ));
    w.indent();
    for node in &page.nodes {
        w.node(node);
    }
    w.dedent();
    w.add_line("</main>");

    if options.full_document {
        w.dedent();
        w.add_line("</body>");
        w.dedent();
        w.add_line("</html>");
    }

    w.finish()
}

/// Serialize a single node
pub fn node_to_html(node: &VNode, options: &HtmlOptions) -> String {
    let mut w = Writer::new(options);
    w.node(node);
    w.finish()
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source" | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::Viewport;

    #[test]
    fn test_escapes_text_and_attributes() {
        let node = VNode::element("p")
            .with_attr("title", "a \"quote\"")
            .with_text("<script>alert(1)</script>");
        let html = node_to_html(&node, &HtmlOptions::compact());

        assert_eq!(
            html,
            "<p title=\"a &quot;quote&quot;\">&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_void_elements() {
        let node = VNode::element("img").with_attr("src", "a.png");
        assert_eq!(
            node_to_html(&node, &HtmlOptions::compact()),
            "<img src=\"a.png\" />"
        );
    }

    #[test]
    fn test_styles_are_inlined() {
        let node = VNode::element("div")
            .with_style("color", "red")
            .with_style("padding", "4px");
        assert_eq!(
            node_to_html(&node, &HtmlOptions::compact()),
            "<div style=\"color: red; padding: 4px\"></div>"
        );
    }

    #[test]
    fn test_pretty_nesting() {
        let node = VNode::element("ul")
            .with_child(VNode::element("li").with_text("One"))
            .with_child(VNode::element("li").with_text("Two"));
        let html = node_to_html(&node, &HtmlOptions::default());
        assert_eq!(html, "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>\n");
    }

    #[test]
    fn test_full_document() {
        let mut page = RenderedPage::new(Viewport::Mobile);
        page.add_node(VNode::placeholder("carousel", "c-1"));
        let html = render_html(&page, &HtmlOptions::document("Home"));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("content=\"width=375\""));
        assert!(html.contains("data-viewport=\"mobile\""));
        assert!(html.contains("Unknown component: carousel"));
    }
}

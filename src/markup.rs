//! Typed HTML fragments.
//!
//! Card renderers build [`Node`] trees instead of concatenating strings;
//! escaping happens in exactly one place, when a tree is rendered.

use std::fmt::Write;

/// One HTML node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with attributes and children.
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    /// Text content, escaped on render.
    Text(String),
    /// Pre-escaped markup (embedded CSS/JS blocks only).
    Raw(String),
}

impl Node {
    /// Render this tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Raw(html) => out.push_str(html),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                if children.is_empty() && is_void(tag) {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }

    /// Add an attribute (builder style).
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { ref mut attrs, .. } = self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Add a class attribute.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child (builder style).
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.push(node);
        }
        self
    }

    /// Append children from an iterator.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element {
            ref mut children, ..
        } = self
        {
            children.extend(nodes);
        }
        self
    }
}

/// New element node.
pub fn el(tag: &'static str) -> Node {
    Node::Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// New text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Escape text for element content and double-quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Guard JSON embedded in a `<script>` block so a value can never close the
/// tag early.
pub fn escape_json_for_script(s: &str) -> String {
    s.replace("</script>", "<\\/script>")
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "br" | "hr" | "img" | "input" | "meta" | "link")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_and_attrs() {
        let node = el("div")
            .class("a<b")
            .child(text("Tom & \"Jerry\" <script>"));
        assert_eq!(
            node.to_html(),
            "<div class=\"a&lt;b\">Tom &amp; &quot;Jerry&quot; &lt;script&gt;</div>"
        );
    }

    #[test]
    fn test_nested_structure() {
        let node = el("ul").children((1..=2).map(|i| el("li").child(text(format!("item {i}")))));
        assert_eq!(node.to_html(), "<ul><li>item 1</li><li>item 2</li></ul>");
    }

    #[test]
    fn test_void_elements_self_close() {
        assert_eq!(el("br").to_html(), "<br/>");
        assert_eq!(el("div").to_html(), "<div></div>");
    }

    #[test]
    fn test_escape_json_for_script() {
        assert_eq!(
            escape_json_for_script("</script>alert(1)"),
            "<\\/script>alert(1)"
        );
        assert_eq!(escape_json_for_script("normal"), "normal");
    }
}

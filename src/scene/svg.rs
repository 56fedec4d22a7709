use std::borrow::Cow;

use crate::scene::node::{Element, Node};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serialize a scene rooted at `root` as a standalone SVG document.
///
/// No whitespace is inserted between elements and no trailing newline is written, so the output
/// is a pure function of the tree.
pub fn write_document(root: &Element) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(XML_DECLARATION);
    write_element(&mut out, root);
    out
}

pub fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.name);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    if el.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &el.children {
        match child {
            Node::Element(c) => write_element(out, c),
            Node::Text(t) => out.push_str(&escape(t)),
        }
    }
    out.push_str("</");
    out.push_str(el.name);
    out.push('>');
}

/// Escape markup-significant characters for text content and attribute values.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

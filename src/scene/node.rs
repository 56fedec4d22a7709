use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl Node {
    fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

/// A vector-graphics element with attributes kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    pub fn fill(self, color: &str) -> Self {
        self.attr("fill", color)
    }

    pub fn opacity(self, value: &str) -> Self {
        self.attr("opacity", value)
    }

    pub fn stroke(self, stroke: Stroke<'_>) -> Self {
        self.attr("stroke", stroke.color)
            .attr("stroke-width", stroke.width)
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("fill", "none")
    }

    pub fn translate(self, x: impl Display, y: impl Display) -> Self {
        self.attr("transform", format_args!("translate({x} {y})"))
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Depth-first search (self included) for elements named `name`.
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_named(self, name, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get("id") == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|el| el.find_by_id(id))
    }
}

fn collect_named<'a>(el: &'a Element, name: &str, out: &mut Vec<&'a Element>) {
    if el.name == name {
        out.push(el);
    }
    for child in el.elements() {
        collect_named(child, name, out);
    }
}

/// Round-capped, unfilled outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: u32,
}

impl<'a> Stroke<'a> {
    pub fn bold(color: &'a str) -> Self {
        Self { color, width: 12 }
    }

    pub fn thin(color: &'a str) -> Self {
        Self { color, width: 8 }
    }
}

pub fn group() -> Element {
    Element::new("g")
}

pub fn circle(cx: i32, cy: i32, r: i32) -> Element {
    Element::new("circle")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("r", r)
}

pub fn ellipse(cx: i32, cy: i32, rx: i32, ry: i32) -> Element {
    Element::new("ellipse")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("rx", rx)
        .attr("ry", ry)
}

pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Element {
    Element::new("line")
        .attr("x1", x1)
        .attr("y1", y1)
        .attr("x2", x2)
        .attr("y2", y2)
}

pub fn rect(x: i32, y: i32, width: i32, height: i32, rx: i32) -> Element {
    Element::new("rect")
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
        .attr("rx", rx)
}

pub fn path(d: &str) -> Element {
    Element::new("path").attr("d", d)
}

pub fn polyline(points: &str) -> Element {
    Element::new("polyline").attr("points", points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let el = circle(1, 2, 3).fill("#000").opacity("0.5");
        let keys: Vec<_> = el.attrs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["cx", "cy", "r", "fill", "opacity"]);
    }

    #[test]
    fn stroke_presets_expand_to_outline_attributes() {
        let el = line(0, 0, 1, 1).stroke(Stroke::thin("#123456"));
        assert_eq!(el.get("stroke"), Some("#123456"));
        assert_eq!(el.get("stroke-width"), Some("8"));
        assert_eq!(el.get("fill"), Some("none"));
        assert_eq!(Stroke::bold("#fff").width, 12);
    }

    #[test]
    fn find_walks_nested_groups() {
        let scene = group()
            .child(group().child(circle(0, 0, 1)).child(Element::new("title").attr("id", "t")))
            .child(circle(5, 5, 2));
        assert_eq!(scene.find_all("circle").len(), 2);
        assert_eq!(scene.find_by_id("t").map(|e| e.name), Some("title"));
        assert!(scene.find_by_id("missing").is_none());
    }

    #[test]
    fn translate_formats_space_separated() {
        let g = group().translate(-3, 7);
        assert_eq!(g.get("transform"), Some("translate(-3 7)"));
    }
}

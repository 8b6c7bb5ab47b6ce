//! Visual tree produced by every component.
//!
//! Components return `Node`s rather than strings so the same tree can be
//! serialized to HTML, dumped as JSON, or queried directly in tests.

use indexmap::IndexMap;
use serde::Serialize;

use crate::escape::{escape_attr, escape_text};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: [&str; 5] = ["br", "hr", "img", "link", "meta"];

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// An element with attributes and children
    Element(Element),
    /// A run of text
    Text(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name
    pub tag: &'static str,
    /// Attributes in insertion order
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<&'static str, String>,
    /// Child nodes in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Starts a new element.
#[must_use]
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: IndexMap::new(),
        children: Vec::new(),
    }
}

/// Creates a text node.
#[must_use]
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Appends a class to the `class` attribute.
    #[must_use]
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        self.attrs
            .entry("class")
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(class);
            })
            .or_insert_with(|| class.to_string());
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child when `node` is `Some`.
    #[must_use]
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns `true` if the `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    /// Serializes the tree to HTML.
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(&escape_text(t)),
            Self::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                for (name, value) in &e.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&e.tag) {
                    return;
                }
                for child in &e.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(e.tag);
                out.push('>');
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Counts text nodes equal to `needle`.
    #[must_use]
    pub fn count_text(&self, needle: &str) -> usize {
        match self {
            Self::Text(t) => usize::from(t == needle),
            Self::Element(e) => e.children.iter().map(|c| c.count_text(needle)).sum(),
        }
    }

    /// Collects elements matching `predicate`, in document order.
    #[must_use]
    pub fn find_all(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(predicate, &mut found);
        found
    }

    fn walk<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Self::Element(e) = self {
            if predicate(e) {
                found.push(e);
            }
            for child in &e.children {
                child.walk(predicate, found);
            }
        }
    }

    /// Collects elements carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|e| e.has_class(class))
    }
}

impl Element {
    /// Wraps this element as a node and collects matches below it.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        for child in &self.children {
            found.extend(child.find_by_class(class));
        }
        found
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Counts descendant text nodes equal to `needle`.
    #[must_use]
    pub fn count_text(&self, needle: &str) -> usize {
        self.children.iter().map(|c| c.count_text(needle)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node: Node = el("div")
            .class("card")
            .child(el("h3").text("Title"))
            .child(el("p").text("Body"))
            .into();
        assert_eq!(
            node.render_html(),
            r#"<div class="card"><h3>Title</h3><p>Body</p></div>"#
        );
    }

    #[test]
    fn test_class_appends() {
        let e = el("div").class("a").class("b");
        assert_eq!(e.get_attr("class"), Some("a b"));
        assert!(e.has_class("a"));
        assert!(e.has_class("b"));
        assert!(!e.has_class("c"));
    }

    #[test]
    fn test_render_escapes() {
        let node: Node = el("a")
            .attr("href", "/x?a=1&b=\"2\"")
            .text("Q&A <now>")
            .into();
        assert_eq!(
            node.render_html(),
            r#"<a href="/x?a=1&amp;b=&quot;2&quot;">Q&amp;A &lt;now&gt;</a>"#
        );
    }

    #[test]
    fn test_void_element() {
        let node: Node = el("meta").attr("charset", "utf-8").into();
        assert_eq!(node.render_html(), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_text_queries() {
        let node: Node = el("ul")
            .child(el("li").text("x"))
            .child(el("li").text("y"))
            .child(el("li").text("x"))
            .into();
        assert_eq!(node.text_content(), "xyx");
        assert_eq!(node.count_text("x"), 2);
        assert_eq!(node.count_text("z"), 0);
    }

    #[test]
    fn test_find_by_class() {
        let node: Node = el("div")
            .child(el("p").class("hit").text("1"))
            .child(el("div").child(el("p").class("hit").text("2")))
            .into();
        let hits = node.find_by_class("hit");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].text_content(), "2");
    }

    #[test]
    fn test_child_opt() {
        let with: Node = el("div").child_opt(Some(text("a"))).into();
        let without: Node = el("div").child_opt(None::<Node>).into();
        assert_eq!(with.text_content(), "a");
        assert_eq!(without.text_content(), "");
    }

    #[test]
    fn test_json_shape() {
        let node: Node = el("p").class("x").text("hi").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["tag"], "p");
        assert_eq!(json["attrs"]["class"], "x");
        assert_eq!(json["children"][0], "hi");
    }
}

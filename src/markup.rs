//! Abstract SVG node trees and their serialization to markup text.
//!
//! Icon libraries that ship a path tree instead of ready-made markup are
//! stored as [`SvgNode`]s. [`serialize`] walks the tree recursively and lets
//! an [`AttributeRewriter`] override attribute values on the way out, which
//! is how the renderer injects the requested color and size.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// ============================================================================
// SvgNode
// ============================================================================

/// An element in an abstract SVG tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgNode {
    pub tag: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SvgChild>,
}

/// A child of an [`SvgNode`]: raw text or a nested element.
///
/// In JSON a plain string is text and an object is an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SvgChild {
    Text(String),
    Element(SvgNode),
}

impl SvgNode {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element.
    pub fn child(mut self, node: SvgNode) -> Self {
        self.children.push(SvgChild::Element(node));
        self
    }

    /// Appends a raw text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgChild::Text(text.into()));
        self
    }

    /// Returns the value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates over element children, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &SvgNode> {
        self.children.iter().filter_map(|child| match child {
            SvgChild::Element(node) => Some(node),
            SvgChild::Text(_) => None,
        })
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Hook for rewriting attributes while a tree is serialized.
///
/// `depth` is 0 for the root element.
pub trait AttributeRewriter {
    /// Returns the value to write for `name`, or `None` to drop the attribute.
    fn rewrite<'a>(&self, depth: usize, name: &str, value: &'a str) -> Option<Cow<'a, str>> {
        let _ = (depth, name);
        Some(Cow::Borrowed(value))
    }

    /// Attributes appended after the element's own attributes.
    fn extra(&self, depth: usize) -> Vec<(&'static str, String)> {
        let _ = depth;
        Vec::new()
    }
}

/// Writes every attribute exactly as stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl AttributeRewriter for Verbatim {}

/// Serializes a node tree to markup text.
///
/// Text children are copied through untouched; attribute values are escaped.
pub fn serialize(node: &SvgNode, rewriter: &impl AttributeRewriter) -> String {
    let mut out = String::new();
    write_node(&mut out, node, rewriter, 0);
    out
}

/// Appends the markup for `node` to `out`.
pub fn write_node(out: &mut String, node: &SvgNode, rewriter: &impl AttributeRewriter, depth: usize) {
    out.push('<');
    out.push_str(&node.tag);

    for (name, value) in &node.attributes {
        if let Some(value) = rewriter.rewrite(depth, name, value) {
            push_attribute(out, name, &value);
        }
    }
    for (name, value) in rewriter.extra(depth) {
        push_attribute(out, name, &value);
    }

    out.push('>');
    for child in &node.children {
        match child {
            SvgChild::Text(text) => out.push_str(text),
            SvgChild::Element(element) => write_node(out, element, rewriter, depth + 1),
        }
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

/// Appends ` name="value"` with the value escaped.
pub fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

/// Escapes the characters that cannot appear inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SvgNode {
        SvgNode::new("svg")
            .attr("viewBox", "0 0 10 10")
            .child(SvgNode::new("title").text("Flask"))
            .child(SvgNode::new("path").attr("d", "M0 0L10 10").attr("fill", "currentColor"))
    }

    #[test]
    fn verbatim_serialization() {
        let markup = serialize(&sample_tree(), &Verbatim);
        assert_eq!(
            markup,
            r#"<svg viewBox="0 0 10 10"><title>Flask</title><path d="M0 0L10 10" fill="currentColor"></path></svg>"#
        );
    }

    struct DropFillAddId;

    impl AttributeRewriter for DropFillAddId {
        fn rewrite<'a>(&self, _depth: usize, name: &str, value: &'a str) -> Option<Cow<'a, str>> {
            (name != "fill").then_some(Cow::Borrowed(value))
        }

        fn extra(&self, depth: usize) -> Vec<(&'static str, String)> {
            vec![("data-depth", depth.to_string())]
        }
    }

    #[test]
    fn rewriter_sees_depth() {
        let markup = serialize(&sample_tree(), &DropFillAddId);
        assert!(markup.starts_with(r#"<svg viewBox="0 0 10 10" data-depth="0">"#));
        assert!(markup.contains(r#"<path d="M0 0L10 10" data-depth="1">"#));
        assert!(!markup.contains("fill="));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node = SvgNode::new("g").attr("data-label", r#"a "b" & <c>"#);
        let markup = serialize(&node, &Verbatim);
        assert_eq!(
            markup,
            r#"<g data-label="a &quot;b&quot; &amp; &lt;c&gt;"></g>"#
        );
    }

    #[test]
    fn json_children_are_untagged() {
        let json = r#"{
            "tag": "svg",
            "attributes": { "viewBox": "0 0 24 24" },
            "children": ["hello", { "tag": "circle", "attributes": { "r": "4" } }]
        }"#;
        let node: SvgNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.get("viewBox"), Some("0 0 24 24"));
        assert_eq!(node.children[0], SvgChild::Text("hello".into()));
        assert_eq!(node.elements().count(), 1);
        assert_eq!(node.elements().next().unwrap().get("r"), Some("4"));
    }
}

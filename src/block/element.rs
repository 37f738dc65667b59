//! Built elements.

use indexmap::IndexMap;
use serde::Serialize;

use crate::style::StyleRecord;

/// A node in a built element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A resolved element: what a block renders into.
///
/// Elements are plain data. Render them with
/// [`HtmlRenderer`](crate::HtmlRenderer) or hand the parts to another UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    tag: String,
    class_name: String,
    style: StyleRecord,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no class, style, attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_name: String::new(),
            style: StyleRecord::new(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_style(mut self, style: StyleRecord) -> Self {
        self.style = style;
        self
    }

    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn style(&self) -> &StyleRecord {
        &self.style
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns true if every class in `class` is present in the class string.
    pub fn has_class(&self, class: &str) -> bool {
        let present: Vec<&str> = self.class_name.split_whitespace().collect();
        class
            .split_whitespace()
            .all(|wanted| present.contains(&wanted))
    }
}

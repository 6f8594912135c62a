use std::fmt;

use crate::error::StructuralError;

/// Handle to a node stored in a document's arena.
///
/// Keys are minted by the owning document and are only meaningful there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) usize);

impl NodeKey {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Tags that never hold children and render without a closing tag.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// ASCII case-insensitive membership test against [`VOID_ELEMENTS`].
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

#[derive(Debug)]
pub enum Node {
    Element(Element),
    /// Escaped on render.
    Text { text: String },
    /// Emitted verbatim; the caller vouches for the markup.
    Raw { markup: String },
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } | Node::Raw { .. } => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text { .. } | Node::Raw { .. } => None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Text { .. } => "text",
            Node::Raw { .. } => "raw",
        }
    }
}

#[derive(Debug)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeKey>,
    parent: Option<NodeKey>,
    is_void: bool,
}

impl Element {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeKey>) -> Self {
        let name = name.into();
        let is_void = is_void_element(&name);
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
            is_void,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in first-insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Non-owning link to the element this one was created under.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }

    /// Set an attribute. An existing key keeps its position and takes the
    /// new value.
    pub(crate) fn set_attribute(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let name = name.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub(crate) fn check_can_adopt(&self) -> Result<(), StructuralError> {
        if self.is_void {
            return Err(StructuralError::VoidElementChild {
                tag: self.name.clone(),
            });
        }
        Ok(())
    }

    pub(crate) fn push_child(&mut self, child: NodeKey) {
        debug_assert!(!self.is_void, "void <{}> received a child", self.name);
        self.children.push(child);
    }
}

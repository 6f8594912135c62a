//! The document under construction and its scoped building API.

use std::fmt;

use tools::text::{dedent, indent};

use crate::arena::NodeArena;
use crate::config::DocumentConfig;
use crate::error::StructuralError;
use crate::render::Lines;
use crate::scope::{Scope, ScopeStack};
use crate::style::{StyleCache, StyleTemplate};
use crate::types::{Element, Node, NodeKey};

pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// An HTML document built by entering element scopes and creating content
/// inside whichever element is currently entered.
///
/// A fresh document already holds `<html>` with `<head>` (containing an
/// empty `<style>` that collects deduplicated rules) and `<body>`. With no
/// scope entered, new content lands directly in `<html>`.
#[derive(Debug)]
pub struct Document {
    arena: NodeArena,
    pub(crate) scopes: ScopeStack,
    styles: StyleCache,
    config: DocumentConfig,
    root: NodeKey,
    head: NodeKey,
    body: NodeKey,
    auto_style: NodeKey,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    pub fn with_indent(indent_width: usize) -> Self {
        Self::with_config(DocumentConfig::with_indent_width(indent_width))
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::Element(Element::new("html", None)));
        let head = arena.push(Node::Element(Element::new("head", Some(root))));
        let body = arena.push(Node::Element(Element::new("body", Some(root))));
        let auto_style = arena.push(Node::Element(Element::new("style", Some(head))));
        arena.link(root, head);
        arena.link(root, body);
        arena.link(head, auto_style);
        Self {
            arena,
            scopes: ScopeStack::default(),
            styles: StyleCache::default(),
            config,
            root,
            head,
            body,
            auto_style,
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// The `<html>` element.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn head(&self) -> NodeKey {
        self.head
    }

    pub fn body(&self) -> NodeKey {
        self.body
    }

    /// The `<style>` element inside `<head>` that receives generated rules.
    pub fn auto_style(&self) -> NodeKey {
        self.auto_style
    }

    /// # Panics
    ///
    /// Panics if `key` was not created by this document.
    pub fn node(&self, key: NodeKey) -> &Node {
        self.arena.get(key)
    }

    pub fn element(&self, key: NodeKey) -> Option<&Element> {
        self.node(key).as_element()
    }

    /// The element `key` was created under, if `key` is an element.
    pub fn parent_of(&self, key: NodeKey) -> Option<NodeKey> {
        self.element(key).and_then(Element::parent)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Where new content goes: the innermost entered element, or `<html>`
    /// when no scope is entered.
    pub fn current_parent(&self) -> NodeKey {
        self.scopes.current().unwrap_or(self.root)
    }

    /// Number of scopes currently entered.
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Enter `key`'s scope until the returned guard is dropped.
    pub fn enter(&mut self, key: NodeKey) -> Scope<'_> {
        Scope::new(self, key)
    }

    /// Run `f` inside `key`'s scope.
    pub fn within<R>(&mut self, key: NodeKey, f: impl FnOnce(&mut Document) -> R) -> R {
        let mut scope = self.enter(key);
        f(&mut scope)
    }

    /// Create an empty `<name>` under the current parent.
    pub fn create_element(&mut self, name: &str) -> Result<NodeKey, StructuralError> {
        self.insert_element(name, Vec::new(), None)
    }

    /// Create `<name>` holding a single text child.
    pub fn create_text_element(
        &mut self,
        name: &str,
        text: impl Into<String>,
    ) -> Result<NodeKey, StructuralError> {
        self.insert_element(name, Vec::new(), Some(text.into()))
    }

    /// Create `<name>` with attributes and optional text under the current
    /// parent. Repeated attribute names keep their first position and last
    /// value.
    ///
    /// Fails without touching the tree when the current parent cannot hold
    /// children, or when `text` is given for a void element.
    pub fn create_element_with<I, K, V>(
        &mut self,
        name: &str,
        attributes: I,
        text: Option<&str>,
    ) -> Result<NodeKey, StructuralError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        let attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        self.insert_element(name, attributes, text.map(str::to_string))
    }

    fn insert_element(
        &mut self,
        name: &str,
        attributes: Vec<(String, String)>,
        text: Option<String>,
    ) -> Result<NodeKey, StructuralError> {
        let parent = self.current_parent();
        let mut element = Element::new(name, Some(parent));
        for (k, v) in attributes {
            element.set_attribute(k, v);
        }
        if text.is_some() {
            element.check_can_adopt()?;
        }
        let key = self.arena.add_child(parent, Node::Element(element))?;
        log::trace!(target: "html.document", "append <{name}> as {key:?} under {parent:?}");
        if let Some(text) = text {
            self.arena.add_child(key, Node::Text { text })?;
        }
        Ok(key)
    }

    /// Append escaped text to the current parent.
    pub fn add_text(&mut self, text: impl Into<String>) -> Result<NodeKey, StructuralError> {
        let parent = self.current_parent();
        let key = self.arena.add_child(parent, Node::Text { text: text.into() })?;
        log::trace!(target: "html.document", "append text {key:?} under {parent:?}");
        Ok(key)
    }

    /// Append markup to the current parent verbatim, without escaping.
    pub fn add_raw(&mut self, markup: impl Into<String>) -> Result<NodeKey, StructuralError> {
        let parent = self.current_parent();
        let key = self.arena.add_child(
            parent,
            Node::Raw {
                markup: markup.into(),
            },
        )?;
        log::trace!(target: "html.document", "append raw {key:?} under {parent:?}");
        Ok(key)
    }

    /// Set an attribute on the current parent. An existing attribute keeps
    /// its position and takes the new value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl fmt::Display,
    ) -> Result<(), StructuralError> {
        let parent = self.current_parent();
        let node = self.arena.get_mut(parent);
        let kind = node.kind();
        match node.as_element_mut() {
            Some(element) => {
                element.set_attribute(name, value);
                Ok(())
            }
            None => Err(StructuralError::LeafAttribute { kind }),
        }
    }

    /// Class name for one style rule, generating the rule into the
    /// automatic `<style>` element the first time its key is seen.
    pub fn style(&mut self, template: StyleTemplate<'_>) -> Result<String, StructuralError> {
        let (key, rule) = template.into_parts();
        if let Some(class_name) = self.styles.get(&key) {
            return Ok(class_name.to_string());
        }
        let class_name = self.styles.assign(key);
        let auto_style = self.auto_style;
        let mut scope = self.enter(auto_style);
        let css = dedent(&rule(&class_name));
        scope.add_raw(css.trim())?;
        Ok(class_name)
    }

    /// Space-separated class names for several style rules, in request
    /// order, ready for a `class` attribute.
    pub fn resolve_style_classes<'a, I>(&mut self, templates: I) -> Result<String, StructuralError>
    where
        I: IntoIterator<Item = StyleTemplate<'a>>,
    {
        let mut classes = Vec::new();
        for template in templates {
            classes.push(self.style(template)?);
        }
        Ok(classes.join(" "))
    }

    /// Number of distinct style rules generated so far.
    pub fn style_class_count(&self) -> usize {
        self.styles.len()
    }

    /// `(depth, line)` pairs for the whole tree, starting at `<html>`.
    pub fn lines(&self) -> Lines<'_> {
        self.render_lines(self.root)
    }

    /// `(depth, line)` pairs for the subtree rooted at `key`.
    pub fn render_lines(&self, key: NodeKey) -> Lines<'_> {
        Lines::new(&self.arena, key)
    }

    /// The complete document text, doctype first.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DOCTYPE)?;
        let width = self.config.indent_width;
        let mut prefix = String::new();
        for (depth, line) in self.lines() {
            prefix.clear();
            prefix.extend(std::iter::repeat_n(' ', depth * width));
            f.write_str("\n")?;
            f.write_str(&indent(&line, &prefix))?;
        }
        Ok(())
    }
}

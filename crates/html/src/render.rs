//! Line-oriented rendering of a subtree.
//!
//! A subtree renders to `(depth, line)` pairs, where `depth` counts nesting
//! levels below the starting node. Indentation is applied by the caller, so
//! the same pairs serve any indent width.

use std::borrow::Cow;

use crate::arena::NodeArena;
use crate::entities::escape_html;
use crate::types::{Element, Node, NodeKey};

#[derive(Clone, Copy, Debug)]
enum Step {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    key: NodeKey,
    depth: usize,
    step: Step,
}

/// Lazy `(depth, line)` iterator over one subtree.
///
/// Each call to a render entry point starts a fresh iterator; nothing is
/// cached on the tree, so a document can be rendered any number of times.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    arena: &'a NodeArena,
    stack: Vec<Frame>,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(arena: &'a NodeArena, root: NodeKey) -> Self {
        Self {
            arena,
            stack: vec![Frame {
                key: root,
                depth: 0,
                step: Step::Open,
            }],
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let frame = self.stack.pop()?;
        let node = arena.get(frame.key);
        let line = match (node, frame.step) {
            (Node::Text { text }, _) => escape_html(text),
            (Node::Raw { markup }, _) => Cow::Borrowed(markup.as_str()),
            (Node::Element(element), Step::Open) => {
                if !element.is_void() {
                    self.stack.push(Frame {
                        step: Step::Close,
                        ..frame
                    });
                    // Reverse push so children pop in insertion order.
                    for &child in element.children().iter().rev() {
                        self.stack.push(Frame {
                            key: child,
                            depth: frame.depth + 1,
                            step: Step::Open,
                        });
                    }
                }
                Cow::Owned(open_tag(element))
            }
            (Node::Element(element), Step::Close) => Cow::Owned(close_tag(element)),
        };
        Some((frame.depth, line))
    }
}

/// `<name a="v">`, with attribute values escaped and no trailing space when
/// there are no attributes.
pub(crate) fn open_tag(element: &Element) -> String {
    let mut out = String::with_capacity(element.name().len() + 2);
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
    out.push('>');
    out
}

pub(crate) fn close_tag(element: &Element) -> String {
    format!("</{}>", element.name())
}

//! Stack of entered elements and the guard that keeps it balanced.

use std::ops::{Deref, DerefMut};

use crate::document::Document;
use crate::types::NodeKey;

/// Insertion points entered so far, innermost last.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScopeStack {
    items: Vec<NodeKey>,
}

impl ScopeStack {
    pub(crate) fn push(&mut self, key: NodeKey) {
        self.items.push(key);
    }

    pub(crate) fn current(&self) -> Option<NodeKey> {
        self.items.last().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every entry above `depth` and return the lowest one removed.
    pub(crate) fn unwind_to(&mut self, depth: usize) -> Option<NodeKey> {
        let removed = self.items.get(depth).copied();
        self.items.truncate(depth);
        removed
    }
}

/// An entered element. While the guard lives, creation calls made through it
/// target that element; dropping it, on any path including unwinding,
/// restores the previous insertion point.
///
/// The guard mutably borrows its document, so inner scopes must end before
/// outer ones.
pub struct Scope<'d> {
    doc: &'d mut Document,
    key: NodeKey,
    depth: usize,
}

impl<'d> Scope<'d> {
    pub(crate) fn new(doc: &'d mut Document, key: NodeKey) -> Self {
        let depth = doc.scopes.len();
        doc.scopes.push(key);
        log::trace!(target: "html.document", "enter {key:?} at depth {}", depth + 1);
        Self { doc, key, depth }
    }

    /// The element this scope entered.
    pub fn key(&self) -> NodeKey {
        self.key
    }
}

impl Deref for Scope<'_> {
    type Target = Document;

    fn deref(&self) -> &Document {
        &*self.doc
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Document {
        &mut *self.doc
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        let removed = self.doc.scopes.unwind_to(self.depth);
        debug_assert_eq!(removed, Some(self.key), "scope stack out of balance");
        log::trace!(target: "html.document", "exit {:?} to depth {}", self.key, self.depth);
    }
}

//! Errors raised while building a document tree.

/// A mutation tried to give children to a node that cannot hold any.
///
/// Raised synchronously by the violating call; the tree is left exactly as it
/// was before that call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// Void elements (`<br>`, `<meta>`, ...) never have children.
    #[error("<{tag}> is a void element and cannot have children")]
    VoidElementChild { tag: String },
    /// Text and raw leaves never have children.
    #[error("{kind} nodes cannot have children")]
    LeafChild { kind: &'static str },
    /// Only elements carry attributes.
    #[error("{kind} nodes cannot have attributes")]
    LeafAttribute { kind: &'static str },
}

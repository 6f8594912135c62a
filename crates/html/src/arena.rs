use crate::error::StructuralError;
use crate::types::{Node, NodeKey};

/// Flat storage for every node of one document.
///
/// Children are referenced by key, never owned directly, so parent links can
/// stay plain indices without forming ownership cycles.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node without attaching it anywhere.
    pub(crate) fn push(&mut self, node: Node) -> NodeKey {
        let key = NodeKey(self.nodes.len());
        self.nodes.push(node);
        key
    }

    pub(crate) fn get(&self, key: NodeKey) -> &Node {
        &self.nodes[key.index()]
    }

    pub(crate) fn get_mut(&mut self, key: NodeKey) -> &mut Node {
        &mut self.nodes[key.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Fail unless `parent` is an element that may hold children.
    pub(crate) fn check_can_adopt(&self, parent: NodeKey) -> Result<(), StructuralError> {
        match self.get(parent) {
            Node::Element(element) => element.check_can_adopt(),
            leaf => Err(StructuralError::LeafChild { kind: leaf.kind() }),
        }
    }

    /// Store `child` and append it to `parent`'s children.
    ///
    /// Nothing is stored when `parent` cannot hold children.
    pub(crate) fn add_child(
        &mut self,
        parent: NodeKey,
        child: Node,
    ) -> Result<NodeKey, StructuralError> {
        self.check_can_adopt(parent)?;
        let child_key = self.push(child);
        self.link(parent, child_key);
        Ok(child_key)
    }

    /// Append an already stored node to an element known to accept it.
    pub(crate) fn link(&mut self, parent: NodeKey, child: NodeKey) {
        match self.get_mut(parent).as_element_mut() {
            Some(element) => element.push_child(child),
            None => unreachable!("only elements are linked as parents"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;

    fn element(name: &str) -> Node {
        Node::Element(Element::new(name, None))
    }

    #[test]
    fn add_child_links_in_order() {
        let mut arena = NodeArena::new();
        let root = arena.push(element("ul"));
        let a = arena.add_child(root, element("li")).expect("li");
        let b = arena
            .add_child(
                root,
                Node::Text {
                    text: "x".to_string(),
                },
            )
            .expect("text");
        let children = arena.get(root).as_element().expect("element").children();
        assert_eq!(children, &[a, b]);
    }

    #[test]
    fn void_parent_rejects_child_and_stores_nothing() {
        let mut arena = NodeArena::new();
        let br = arena.push(element("br"));
        let before = arena.len();
        let err = arena.add_child(br, element("span")).expect_err("void parent");
        assert_eq!(
            err,
            StructuralError::VoidElementChild {
                tag: "br".to_string()
            }
        );
        assert_eq!(arena.len(), before);
    }

    #[test]
    fn leaf_parent_rejects_child() {
        let mut arena = NodeArena::new();
        let raw = arena.push(Node::Raw {
            markup: "<b>".to_string(),
        });
        let err = arena.add_child(raw, element("i")).expect_err("leaf parent");
        assert_eq!(err, StructuralError::LeafChild { kind: "raw" });
    }

    #[test]
    fn build_stress_deep_nesting() {
        let depth: usize = 10_000;
        let mut arena = NodeArena::new();
        let mut parent = arena.push(element("div"));
        for _ in 0..depth {
            parent = arena.add_child(parent, element("div")).expect("div");
        }
        assert_eq!(arena.len(), depth + 1);
    }
}

//! The structural tree built by the parser.
//!
//! Nodes live in an arena owned by `Tree` and refer to each other by
//! `NodeId`. A node owns its children through its `children` list; the
//! `parent` link is only a way back up for the parser's cursor.

/// Index of a node inside its `Tree`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The grammar role a node plays inside its parent container.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Scope {
    /// An object property name still waiting for its value.
    Key,
    /// A complete value.
    Value,
}

/// The grammar element a node stands for.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NodeKind<'a> {
    /// The implicit top-level container holding the document's value.
    Root,
    /// A `{ ... }` object.
    Object,
    /// A `[ ... ]` array.
    Array,
    /// A string, without its quotes and with escapes left as written.
    String(&'a str),
    /// A number.
    Number(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// A `,` separating two values.
    Comma,
    /// A `:` between an object key and its value.
    Colon,
}

impl NodeKind<'_> {
    /// Whether nodes of this kind can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Root | NodeKind::Object | NodeKind::Array)
    }
}

/// One grammar element in the tree.
#[derive(Debug, PartialEq, Clone)]
pub struct Node<'a> {
    pub kind: NodeKind<'a>,
    /// Children in input order. Empty for everything but containers.
    pub children: Vec<NodeId>,
    /// The enclosing container; `None` only for the root.
    pub parent: Option<NodeId>,
    /// `None` for commas, colons and the root.
    pub scope: Option<Scope>,
}

/// An arena of nodes with the root at index 0.
#[derive(Debug, PartialEq, Clone)]
pub struct Tree<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Tree<'a> {
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new() -> Self {
        Tree {
            nodes: vec![Node {
                kind: NodeKind::Root,
                children: Vec::new(),
                parent: None,
                scope: None,
            }],
        }
    }

    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> &Node<'a> {
        self.node(Self::ROOT)
    }

    /// The single value held by the root, if parsing produced one.
    pub fn value(&self) -> Option<NodeId> {
        self.root().children.first().copied()
    }

    /// The last child of `id`, if it has any.
    pub fn last_child(&self, id: NodeId) -> Option<&Node<'a>> {
        self.node(id).children.last().map(|&child| self.node(child))
    }

    /// Iterates over the children of `id` in input order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node<'a>> + '_ {
        self.node(id).children.iter().map(move |&child| self.node(child))
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Appends a new node as the last child of `parent` and returns its id.
    pub(crate) fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind<'a>,
        scope: Option<Scope>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
            parent: Some(parent),
            scope,
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = Tree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root().kind, NodeKind::Root);
        assert_eq!(tree.root().parent, None);
        assert_eq!(tree.value(), None);
    }

    #[test]
    fn test_push_links_parent_and_child() {
        let mut tree = Tree::new();
        let array = tree.push(Tree::ROOT, NodeKind::Array, Some(Scope::Value));
        let first = tree.push(array, NodeKind::Number(1.0), Some(Scope::Value));
        tree.push(array, NodeKind::Comma, None);

        assert_eq!(tree.value(), Some(array));
        assert_eq!(tree.node(first).parent, Some(array));
        assert_eq!(tree.node(array).parent, Some(Tree::ROOT));
        assert_eq!(tree.last_child(array).map(|n| n.kind), Some(NodeKind::Comma));
        let kinds: Vec<_> = tree.children(array).map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Number(1.0), NodeKind::Comma]);
        assert!(tree.node(array).kind.is_container());
        assert!(!tree.node(first).kind.is_container());
    }
}

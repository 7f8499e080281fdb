use crate::listing::{EntryKind, ListingEntry};
use std::fmt;

/// Unique identifier for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Shape of a tree node.
///
/// Only directories can hold children; files and unknown kinds are leaves
/// with no child list at all, so the no-children invariant cannot be
/// violated by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Directory; holds child node IDs in insertion order
    Branch { children: Vec<NodeId> },
    /// File or unknown kind; cannot be expanded
    Leaf,
}

/// One entry in the listing tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Unique identifier
    pub id: NodeId,
    /// The entry descriptor this node wraps
    pub entry: ListingEntry,
    /// Parent node ID (None for children of the synthetic root)
    pub parent: Option<NodeId>,
    /// Branch or leaf shape, derived from the entry kind
    pub kind: NodeKind,
}

impl TreeNode {
    /// Create a new tree node; children start empty
    pub fn new(id: NodeId, entry: ListingEntry, parent: Option<NodeId>) -> Self {
        let kind = if entry.kind == EntryKind::Directory {
            NodeKind::Branch {
                children: Vec::new(),
            }
        } else {
            NodeKind::Leaf
        };

        Self {
            id,
            entry,
            parent,
            kind,
        }
    }

    /// Check if this node is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Branch { .. })
    }

    /// Check if this node is a leaf (file or unknown kind)
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Child IDs in insertion order; empty for leaves
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Branch { children } => children,
            NodeKind::Leaf => &[],
        }
    }

    /// Append a child ID. Returns false (and appends nothing) on a leaf.
    pub fn push_child(&mut self, child: NodeId) -> bool {
        match &mut self.kind {
            NodeKind::Branch { children } => {
                children.push(child);
                true
            }
            NodeKind::Leaf => false,
        }
    }
}

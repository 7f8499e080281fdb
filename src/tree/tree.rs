use super::node::{NodeId, TreeNode};
use crate::listing::ListingEntry;
use std::collections::HashMap;

/// One-level tree of listing entries under a synthetic root.
///
/// The root is the tree value itself: it carries no name or kind and exists
/// only to hold the top-level children returned by the endpoint. Nodes are
/// only ever appended; nothing is removed or updated after population.
#[derive(Debug, Default)]
pub struct ListingTree {
    /// All nodes in the tree, indexed by ID
    nodes: HashMap<NodeId, TreeNode>,
    /// Direct children of the synthetic root, in insertion order
    root_children: Vec<NodeId>,
    /// Next node ID to allocate
    next_id: usize,
}

impl ListingTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Wrap each descriptor into a node and append it under the root,
    /// preserving response order.
    pub fn populate(&mut self, entries: Vec<ListingEntry>) {
        for entry in entries {
            self.append_root_child(entry);
        }
    }

    /// Append one entry as a direct child of the synthetic root.
    pub fn append_root_child(&mut self, entry: ListingEntry) -> NodeId {
        let id = self.alloc_id();
        self.nodes.insert(id, TreeNode::new(id, entry, None));
        self.root_children.push(id);
        id
    }

    /// Append one entry under an existing directory node.
    ///
    /// Returns None when the parent does not exist or is a leaf.
    pub fn append_child(&mut self, parent: NodeId, entry: ListingEntry) -> Option<NodeId> {
        if !self.get_node(parent)?.is_dir() {
            return None;
        }

        let id = self.alloc_id();
        self.nodes.insert(id, TreeNode::new(id, entry, Some(parent)));
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.push_child(id);
        }
        Some(id)
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// IDs of the root's direct children, in insertion order
    pub fn root_children(&self) -> &[NodeId] {
        &self.root_children
    }

    /// Iterate the root's direct children as nodes, in insertion order
    pub fn root_entries(&self) -> impl Iterator<Item = &TreeNode> {
        self.root_children.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Total number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

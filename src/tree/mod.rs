// Listing tree module
//
// One-level tree of listing entries under a synthetic root. Directories
// are branches, everything else is a leaf; there is no lazy loading and
// no expansion.

pub mod node;
pub mod tree;

pub use node::{NodeId, NodeKind, TreeNode};
pub use tree::ListingTree;

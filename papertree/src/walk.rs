//! Depth-first traversal over mounted nodes.

use crate::node::{NodeId, TreeNode};

/// Pre-order iterator yielding `(depth, node)`, starting with the root at
/// depth 0. Only mounted nodes are visited, so closed subtrees are skipped.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<(u16, &'a TreeNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (u16, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the first child is visited next.
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

pub fn pre_order(root: &TreeNode) -> PreOrder<'_> {
    PreOrder {
        stack: vec![(0, root)],
    }
}

/// All mounted nodes below `root`, pre-order, excluding `root` itself.
pub fn descendants(root: &TreeNode) -> impl Iterator<Item = &TreeNode> {
    pre_order(root).skip(1).map(|(_, node)| node)
}

/// Id of the mounted parent of `id`. `None` for the root or unknown ids.
pub fn parent_of(root: &TreeNode, id: NodeId) -> Option<NodeId> {
    pre_order(root)
        .map(|(_, node)| node)
        .find(|node| node.children().iter().any(|child| child.id() == id))
        .map(TreeNode::id)
}

/// Depth of `id` below `root`.
pub fn depth_of(root: &TreeNode, id: NodeId) -> Option<u16> {
    pre_order(root)
        .find(|(_, node)| node.id() == id)
        .map(|(depth, _)| depth)
}

use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::fixtures::BinaryNode;

/// Placeholder for the absent side of a node that has exactly one child.
pub const MISSING_CHILD: &str = "∅";

/// Conversion of a tree fixture into a printable `termtree` tree.
pub trait TreeNodeConvert {
    /// Render with absent siblings shown, so left and right stay distinguishable.
    fn to_tree_string(&self) -> Tree<String> {
        self.to_tree_string_with(true)
    }

    fn to_tree_string_with(&self, render_missing: bool) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for BinaryNode<T> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string_with(&self, render_missing: bool) -> Tree<String> {
        let root = self.value.to_string();
        if self.is_leaf() {
            return Tree::new(root);
        }

        // Left leaf first, then right
        let leaves: Vec<_> = [&self.left, &self.right]
            .into_iter()
            .filter_map(|child| match child {
                Some(node) => Some(node.to_tree_string_with(render_missing)),
                None if render_missing => Some(Tree::new(MISSING_CHILD.to_string())),
                None => None,
            })
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

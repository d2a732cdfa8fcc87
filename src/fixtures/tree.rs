//! Binary tree fixtures
//!
//! Each node exclusively owns its children through `Option<Box<_>>`; there are
//! no parent links, so cycles cannot be built.

/// Binary tree node owning its left and right subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: BinaryNode<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: BinaryNode<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn children(&self) -> impl Iterator<Item = &BinaryNode<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().map(BinaryNode::node_count).sum::<usize>()
    }

    /// Number of levels; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(BinaryNode::depth).max().unwrap_or(0)
    }
}

/// ```text
///         20
///       /    \
///     10      50
///    /  \    /  \
///   5   15  30  100
///    \     /  \
///     7   29  45
/// ```
pub fn tree1() -> BinaryNode<i32> {
    BinaryNode::leaf(20)
        .with_left(
            BinaryNode::leaf(10)
                .with_left(BinaryNode::leaf(5).with_right(BinaryNode::leaf(7)))
                .with_right(BinaryNode::leaf(15)),
        )
        .with_right(
            BinaryNode::leaf(50)
                .with_left(
                    BinaryNode::leaf(30)
                        .with_left(BinaryNode::leaf(29))
                        .with_right(BinaryNode::leaf(45)),
                )
                .with_right(BinaryNode::leaf(100)),
        )
}

/// ```text
///         20
///       /    \
///     10      50
///    /  \    /
///   5   15  30
///    \     /  \
///     7   29  45
///        /      \
///       21      49
/// ```
pub fn tree2() -> BinaryNode<i32> {
    BinaryNode::leaf(20)
        .with_left(
            BinaryNode::leaf(10)
                .with_left(BinaryNode::leaf(5).with_right(BinaryNode::leaf(7)))
                .with_right(BinaryNode::leaf(15)),
        )
        .with_right(
            BinaryNode::leaf(50).with_left(
                BinaryNode::leaf(30)
                    .with_left(BinaryNode::leaf(29).with_left(BinaryNode::leaf(21)))
                    .with_right(BinaryNode::leaf(45).with_right(BinaryNode::leaf(49))),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_shape() {
        let n = BinaryNode::leaf('a');
        assert!(n.is_leaf());
        assert_eq!(n.node_count(), 1);
        assert_eq!(n.depth(), 1);
    }

    #[test]
    fn test_children_left_before_right() {
        let n = BinaryNode::leaf(1)
            .with_right(BinaryNode::leaf(3))
            .with_left(BinaryNode::leaf(2));
        let values: Vec<_> = n.children().map(|c| c.value).collect();
        assert_eq!(values, vec![2, 3]);
    }
}

use unicode_width::UnicodeWidthStr;

use crate::BinaryTree;

/// Which spine of the tree to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Leftmost,
    Rightmost,
}

/// Walk the leftmost or rightmost spine starting at `root` and sum up the columns it needs.
///
/// Every label on the spine adds its width.
/// Descending to a left child additionally adds one column for the `/` connector.
#[must_use]
pub fn estimate_offset<T>(root: &T, direction: Direction) -> usize
where
    T: BinaryTree + ?Sized,
{
    let mut offset = 0;
    let mut current = root;
    loop {
        offset += current.label().width();
        let next = match direction {
            Direction::Leftmost => current.left(),
            Direction::Rightmost => current.right(),
        };
        let Some(next) = next else {
            return offset;
        };
        if direction == Direction::Leftmost {
            offset += 1;
        }
        current = next;
    }
}

/// Starting column of the root label: the larger estimate of both spines.
///
/// Both sides are considered even when one of the subtrees does not exist.
#[must_use]
pub fn anchor_column<T>(root: &T) -> usize
where
    T: BinaryTree + ?Sized,
{
    estimate_offset(root, Direction::Leftmost).max(estimate_offset(root, Direction::Rightmost))
}

#[cfg(test)]
use crate::TreeNode;

#[test]
fn single_node_is_its_label_width() {
    let tree = TreeNode::leaf("root");
    assert_eq!(estimate_offset(&tree, Direction::Leftmost), 4);
    assert_eq!(estimate_offset(&tree, Direction::Rightmost), 4);
    assert_eq!(anchor_column(&tree), 4);
}

#[test]
fn left_spine_counts_connectors() {
    let tree = TreeNode::example();
    assert_eq!(estimate_offset(&tree, Direction::Leftmost), 5);
    assert_eq!(estimate_offset(&tree, Direction::Rightmost), 3);
    assert_eq!(anchor_column(&tree), 5);
}

#[test]
fn right_only_tree_still_estimates_both_sides() {
    let tree = TreeNode::leaf("abc").with_right(TreeNode::leaf("d").with_right(TreeNode::leaf("ef")));
    assert_eq!(estimate_offset(&tree, Direction::Leftmost), 3);
    assert_eq!(estimate_offset(&tree, Direction::Rightmost), 6);
    assert_eq!(anchor_column(&tree), 6);
}

#[test]
fn spine_ignores_inner_branches() {
    let tree = TreeNode::leaf(10).with_left(TreeNode::leaf(5).with_right(TreeNode::leaf(7)));
    assert_eq!(estimate_offset(&tree, Direction::Leftmost), 4);
}

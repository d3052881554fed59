use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::{BinaryTree, Error, LabelPolicy, Result};

/// A tree node together with the horizontal space its subtree needs.
///
/// Every node gets a slot of `max(label width, 1)` columns.
/// Slots are assigned in in-order sequence, so the left subtree always ends before a node and the right subtree always starts after it.
/// This keeps subtrees of different nodes apart in every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extent {
    label: String,
    slot: usize,
    left_span: usize,
    right_span: usize,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl Extent {
    /// Measure `root` and all its descendants.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLabel`] when a label violates the `policy`
    /// - [`Error::TooDeep`] when the tree has more than `max_depth` levels
    pub fn measure<T>(root: &T, policy: LabelPolicy, max_depth: usize) -> Result<Self>
    where
        T: BinaryTree + ?Sized,
    {
        Self::measure_level(root, policy, max_depth, 1)
    }

    fn measure_level<T>(node: &T, policy: LabelPolicy, max_depth: usize, depth: usize) -> Result<Self>
    where
        T: BinaryTree + ?Sized,
    {
        if depth > max_depth {
            return Err(Error::TooDeep { limit: max_depth });
        }

        let label = policy.apply(&node.label())?.into_owned();
        let slot = label.width().max(1);

        let left = node
            .left()
            .map(|child| Self::measure_level(child, policy, max_depth, depth + 1))
            .transpose()?;
        let right = node
            .right()
            .map(|child| Self::measure_level(child, policy, max_depth, depth + 1))
            .transpose()?;

        Ok(Self {
            label,
            slot,
            left_span: left.as_ref().map_or(0, Self::span),
            right_span: right.as_ref().map_or(0, Self::span),
            left: left.map(Box::new),
            right: right.map(Box::new),
        })
    }

    /// Columns reserved for the label of this node.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Columns needed by the left subtree.
    #[must_use]
    pub const fn left_span(&self) -> usize {
        self.left_span
    }

    /// Columns needed by the right subtree.
    #[must_use]
    pub const fn right_span(&self) -> usize {
        self.right_span
    }

    /// Columns needed by the whole subtree including this node.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.left_span + self.slot + self.right_span
    }
}

impl BinaryTree for Extent {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

#[cfg(test)]
use crate::TreeNode;

#[test]
fn example_spans() {
    let extent = Extent::measure(&TreeNode::example(), LabelPolicy::Reject, 10).unwrap();
    assert_eq!(extent.slot(), 1);
    assert_eq!(extent.left_span(), 3);
    assert_eq!(extent.right_span(), 3);
    assert_eq!(extent.span(), 7);
}

#[test]
fn empty_label_still_gets_a_column() {
    let extent = Extent::measure(&TreeNode::leaf(""), LabelPolicy::Reject, 10).unwrap();
    assert_eq!(extent.label(), "");
    assert_eq!(extent.slot(), 1);
}

#[test]
fn wide_characters_count_as_two_columns() {
    let extent = Extent::measure(&TreeNode::leaf("木木"), LabelPolicy::Reject, 10).unwrap();
    assert_eq!(extent.slot(), 4);
}

#[test]
fn escaped_label_is_measured_after_escaping() {
    let extent = Extent::measure(&TreeNode::leaf("a\nb"), LabelPolicy::Escape, 10).unwrap();
    assert_eq!(extent.label(), "a\\nb");
    assert_eq!(extent.slot(), 4);
}

#[test]
fn depth_limit_is_enforced() {
    let tree = TreeNode::example();
    assert!(Extent::measure(&tree, LabelPolicy::Reject, 3).is_ok());
    let error = Extent::measure(&tree, LabelPolicy::Reject, 2).unwrap_err();
    assert!(matches!(error, Error::TooDeep { limit: 2 }));
}

#[test]
fn invalid_label_deep_in_the_tree_is_found() {
    let tree = TreeNode::leaf("root").with_left(TreeNode::leaf("bad\r"));
    let error = Extent::measure(&tree, LabelPolicy::Reject, 10).unwrap_err();
    assert!(matches!(error, Error::InvalidLabel { character: '\r', .. }));
}

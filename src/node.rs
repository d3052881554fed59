use std::borrow::Cow;
use std::fmt;

/// Read-only view on a binary tree which can be laid out.
///
/// Implement it for your own tree type to render it without converting it into a [`TreeNode`] first.
/// The tree is only borrowed while rendering and never modified.
///
/// # Example
///
/// ```
/// # use std::borrow::Cow;
/// # use tui_binary_tree::BinaryTree;
/// struct Expr {
///     op: char,
///     lhs: Option<Box<Expr>>,
///     rhs: Option<Box<Expr>>,
/// }
///
/// impl BinaryTree for Expr {
///     fn label(&self) -> Cow<'_, str> {
///         Cow::Owned(self.op.to_string())
///     }
///
///     fn left(&self) -> Option<&Self> {
///         self.lhs.as_deref()
///     }
///
///     fn right(&self) -> Option<&Self> {
///         self.rhs.as_deref()
///     }
/// }
/// ```
pub trait BinaryTree {
    /// Text shown for this node. Must not contain newlines or other control characters.
    fn label(&self) -> Cow<'_, str>;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }

    /// Number of levels, a single node has a height of 1.
    ///
    /// Walks the tree with an explicit stack, so it also works on trees too deep to render.
    fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }
}

/// Owned binary tree whose labels are the [`Display`](fmt::Display) output of its values.
///
/// # Example
///
/// ```
/// # use tui_binary_tree::TreeNode;
/// let tree = TreeNode::new(4, Some(TreeNode::leaf(1)), Some(TreeNode::leaf(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl<T> TreeNode<T> {
    /// Create a new `TreeNode` without children.
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub fn new(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replace the left child.
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Replace the right child.
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> BinaryTree for TreeNode<T> {
    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(self.value.to_string())
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

#[cfg(test)]
impl TreeNode<u8> {
    /// `4` with the children `1` (`2`, `3`) and `5` (`6`, `7`).
    pub fn example() -> Self {
        Self::new(
            4,
            Some(Self::new(1, Some(Self::leaf(2)), Some(Self::leaf(3)))),
            Some(Self::new(5, Some(Self::leaf(6)), Some(Self::leaf(7)))),
        )
    }
}

#[test]
fn leaf_has_height_one() {
    let leaf = TreeNode::leaf("a");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.height(), 1);
}

#[test]
fn height_follows_the_deeper_side() {
    let tree = TreeNode::leaf(1).with_right(TreeNode::leaf(2).with_left(TreeNode::leaf(3)));
    assert_eq!(tree.height(), 3);
    assert_eq!(TreeNode::example().height(), 3);
}

#[test]
fn label_uses_display() {
    let tree = TreeNode::new(4.5, None, Some(TreeNode::leaf(-1.0)));
    assert_eq!(tree.label(), "4.5");
    assert_eq!(tree.right().map(BinaryTree::label).as_deref(), Some("-1"));
    assert!(tree.left().is_none());
}

/// Left-leaning chain which drops its nodes in a loop.
#[cfg(test)]
struct Chain {
    next: Option<Box<Chain>>,
}

#[cfg(test)]
impl Chain {
    fn with_length(length: usize) -> Self {
        let mut chain = Self { next: None };
        for _ in 1..length {
            chain = Self {
                next: Some(Box::new(chain)),
            };
        }
        chain
    }
}

#[cfg(test)]
impl Drop for Chain {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

#[cfg(test)]
impl BinaryTree for Chain {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("c")
    }

    fn left(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        None
    }
}

#[test]
fn height_of_a_very_deep_tree() {
    let chain = Chain::with_length(1_000_000);
    assert_eq!(chain.height(), 1_000_000);

    let error = crate::render(Some(&chain)).unwrap_err();
    assert!(matches!(
        error,
        crate::Error::TooDeep {
            limit: crate::TreePrinter::DEFAULT_MAX_DEPTH
        }
    ));
}

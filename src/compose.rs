use tracing::trace;

use crate::canvas::{Canvas, Fragment};
use crate::{BinaryTree, Error, Extent, Result};

/// Which child of its parent a node is. The root counts as [`Side::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Places labels and connector glyphs of a measured tree onto a [`Canvas`].
#[derive(Debug)]
pub struct Compositor<'canvas> {
    canvas: &'canvas mut Canvas,
    left_connector: char,
    right_connector: char,
}

impl<'canvas> Compositor<'canvas> {
    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn new(canvas: &'canvas mut Canvas, left_connector: char, right_connector: char) -> Self {
        Self {
            canvas,
            left_connector,
            right_connector,
        }
    }

    /// Lay out `node` and its subtree with the label in `row`.
    ///
    /// For [`Side::Right`] `column` is where the label starts.
    /// For [`Side::Left`] it is the center of the label.
    ///
    /// # Errors
    ///
    /// - [`Error::ColumnOutOfRange`] when `column` leaves no room for the left subtree
    /// - [`Error::Overlap`] when two fragments would share a column, [`Extent::measure`] spans never cause this
    pub fn layout(
        &mut self,
        node: Option<&Extent>,
        column: usize,
        row: usize,
        side: Side,
    ) -> Result<()> {
        let Some(node) = node else {
            return Ok(());
        };

        let slot = node.slot();
        let required = match side {
            Side::Right => node.left_span(),
            Side::Left => node.left_span() + slot / 2,
        };
        if column < required {
            return Err(Error::ColumnOutOfRange { column, required });
        }
        let start = match side {
            Side::Right => column,
            Side::Left => column - slot / 2,
        };
        trace!(label = %node.label(), row, start, "place node");
        self.canvas
            .claim(row, start, Fragment::label(node.label(), slot))?;

        if node.is_leaf() {
            return Ok(());
        }

        if let Some(left) = node.left() {
            self.canvas
                .claim(row + 1, start - 1, Fragment::connector(self.left_connector))?;
            // The whole left subtree ends right before this label.
            let left_start = start - left.right_span() - left.slot();
            self.layout(Some(left), left_start + left.slot() / 2, row + 2, Side::Left)?;
        }

        if let Some(right) = node.right() {
            let connector = start + slot;
            self.canvas
                .claim(row + 1, connector, Fragment::connector(self.right_connector))?;
            self.layout(Some(right), connector + right.left_span(), row + 2, Side::Right)?;
        }

        Ok(())
    }
}

#[cfg(test)]
use crate::{LabelPolicy, TreeNode};

#[cfg(test)]
fn compose<T: BinaryTree>(tree: &T) -> Canvas {
    let extent = Extent::measure(tree, LabelPolicy::Reject, 64).unwrap();
    let mut canvas = Canvas::default();
    Compositor::new(&mut canvas, '/', '\\')
        .layout(Some(&extent), extent.left_span(), 0, Side::Right)
        .unwrap();
    canvas
}

#[test]
fn nothing_to_lay_out() {
    let mut canvas = Canvas::default();
    Compositor::new(&mut canvas, '/', '\\')
        .layout(None, 3, 0, Side::Right)
        .unwrap();
    assert_eq!(canvas.rows().count(), 0);
}

#[test]
fn right_side_column_left_of_the_left_subtree_is_refused() {
    let tree = TreeNode::leaf("root").with_left(TreeNode::leaf("l"));
    let extent = Extent::measure(&tree, LabelPolicy::Reject, 8).unwrap();
    let mut canvas = Canvas::default();
    let error = Compositor::new(&mut canvas, '/', '\\')
        .layout(Some(&extent), 0, 0, Side::Right)
        .unwrap_err();
    assert!(matches!(
        error,
        Error::ColumnOutOfRange {
            column: 0,
            required: 1
        }
    ));
    assert_eq!(canvas.rows().count(), 0);
}

#[test]
fn left_side_column_needs_room_for_half_the_label() {
    let tree = TreeNode::leaf("wide").with_left(TreeNode::leaf("l"));
    let extent = Extent::measure(&tree, LabelPolicy::Reject, 8).unwrap();
    let mut canvas = Canvas::default();
    let error = Compositor::new(&mut canvas, '/', '\\')
        .layout(Some(&extent), 2, 0, Side::Left)
        .unwrap_err();
    assert!(matches!(
        error,
        Error::ColumnOutOfRange {
            column: 2,
            required: 3
        }
    ));

    Compositor::new(&mut canvas, '/', '\\')
        .layout(Some(&extent), 3, 0, Side::Left)
        .unwrap();
    assert_eq!(canvas.serialize(), [" wide", "/", "l"]);
}

#[test]
fn leaf_has_no_connector_row() {
    let canvas = compose(&TreeNode::leaf("leaf"));
    assert_eq!(canvas.serialize(), ["leaf"]);
    assert!(canvas.row(1).is_none());
}

#[test]
fn example_layout() {
    let canvas = compose(&TreeNode::example());
    assert_eq!(
        canvas.serialize(),
        ["   4", "  / \\", " 1   5", "/ \\ / \\", "2 3 6 7"]
    );
}

#[test]
fn connectors_hug_the_parent_label() {
    let tree = TreeNode::new(10, Some(TreeNode::leaf(5)), Some(TreeNode::leaf(20)));
    let canvas = compose(&tree);
    assert_eq!(canvas.serialize(), [" 10", "/  \\", "5  20"]);
}

#[test]
fn left_child_is_centered_below_its_connector() {
    let tree = TreeNode::leaf("root").with_left(TreeNode::leaf("abc"));
    let canvas = compose(&tree);
    assert_eq!(canvas.serialize(), ["   root", "  /", "abc"]);
}

#[test]
fn custom_connectors() {
    let extent = Extent::measure(&TreeNode::example(), LabelPolicy::Reject, 64).unwrap();
    let mut canvas = Canvas::default();
    Compositor::new(&mut canvas, '╱', '╲')
        .layout(Some(&extent), extent.left_span(), 0, Side::Right)
        .unwrap();
    assert_eq!(canvas.serialize()[1], "  ╱ ╲");
}

use std::fmt;
use std::io::Write;

use tracing::{debug, instrument};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::canvas::Canvas;
use crate::compose::{Compositor, Side};
use crate::estimate::anchor_column;
use crate::{BinaryTree, Error, Extent, LabelPolicy, Result};

/// How much blank space is kept left of the tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    /// Start the leftmost fragment at column 0.
    #[default]
    Trim,
    /// Keep the margin resulting from the estimated root anchor.
    Keep,
}

/// Renders [`BinaryTree`]s as lines of ASCII art.
///
/// # Example
///
/// ```
/// # use tui_binary_tree::{TreeNode, TreePrinter};
/// let tree = TreeNode::new(4, Some(TreeNode::leaf(1)), Some(TreeNode::leaf(5)));
/// let rendering = TreePrinter::new().render(Some(&tree))?;
/// assert_eq!(rendering.to_string(), " 4\n/ \\\n1 5");
/// # Ok::<(), tui_binary_tree::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePrinter {
    /// Glyph between a node and its left child
    left_connector: char,
    /// Glyph between a node and its right child
    right_connector: char,
    margin: Margin,
    label_policy: LabelPolicy,
    /// Trees with more levels are refused instead of exhausting the stack
    max_depth: usize,
}

impl TreePrinter {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            left_connector: '/',
            right_connector: '\\',
            margin: Margin::Trim,
            label_policy: LabelPolicy::Reject,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Glyphs drawn between a node and its children. Both have to be one column wide.
    #[must_use]
    pub const fn connectors(mut self, left: char, right: char) -> Self {
        self.left_connector = left;
        self.right_connector = right;
        self
    }

    #[must_use]
    pub const fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Lay out the tree below `root`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRoot`] when there is no `root`
    /// - [`Error::InvalidConnector`] when a connector glyph is not one column wide
    /// - [`Error::InvalidLabel`] when a label contains control characters and the [`LabelPolicy`] rejects them
    /// - [`Error::TooDeep`] when the tree has more levels than [`max_depth`](Self::max_depth)
    #[instrument(level = "debug", skip_all)]
    pub fn render<T>(&self, root: Option<&T>) -> Result<Rendering>
    where
        T: BinaryTree + ?Sized,
    {
        let root = root.ok_or(Error::MissingRoot)?;
        for glyph in [self.left_connector, self.right_connector] {
            if glyph.width() != Some(1) {
                return Err(Error::InvalidConnector(glyph));
            }
        }

        let extent = Extent::measure(root, self.label_policy, self.max_depth)?;
        let anchor = anchor_column(&extent);
        let origin = anchor.max(extent.left_span());

        let mut canvas = Canvas::default();
        Compositor::new(&mut canvas, self.left_connector, self.right_connector).layout(
            Some(&extent),
            origin,
            0,
            Side::Right,
        )?;
        if self.margin == Margin::Trim {
            canvas.trim_leading();
        }

        let lines = canvas.serialize();
        debug!(anchor, origin, rows = lines.len(), "rendered tree");
        Ok(Rendering { lines })
    }

    /// Render the tree below `root` and print it to stdout.
    ///
    /// Nothing is printed when rendering fails.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render) and [`Error::Io`] when stdout can not be written.
    pub fn print<T>(&self, root: Option<&T>) -> Result<()>
    where
        T: BinaryTree + ?Sized,
    {
        let rendering = self.render(root)?;
        rendering.write_to(&mut std::io::stdout().lock())
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `root` with the default [`TreePrinter`].
///
/// # Errors
///
/// See [`TreePrinter::render`].
pub fn render<T>(root: Option<&T>) -> Result<Rendering>
where
    T: BinaryTree + ?Sized,
{
    TreePrinter::new().render(root)
}

/// Lines of a rendered tree, top row first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rendering {
    lines: Vec<String>,
}

impl Rendering {
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Display width of the widest line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or_default()
    }

    /// Write every line followed by a newline.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::Io`] when the `writer` fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
use crate::TreeNode;

#[test]
fn missing_root_is_invalid_input() {
    let error = render::<TreeNode<u8>>(None).unwrap_err();
    assert!(matches!(error, Error::MissingRoot));
}

#[test]
fn missing_root_prints_nothing() {
    let error = TreePrinter::new().print::<TreeNode<u8>>(None).unwrap_err();
    assert!(matches!(error, Error::MissingRoot));
}

#[test]
fn single_node_is_its_label() {
    let rendering = render(Some(&TreeNode::leaf("lonely"))).unwrap();
    assert_eq!(rendering.lines(), ["lonely"]);
    assert_eq!(rendering.width(), 6);
    assert_eq!(rendering.height(), 1);
}

#[test]
fn keep_margin_shifts_by_the_estimated_anchor() {
    let tree = TreeNode::example();
    let rendering = TreePrinter::new()
        .margin(Margin::Keep)
        .render(Some(&tree))
        .unwrap();
    assert_eq!(
        rendering.into_lines(),
        ["     4", "    / \\", "   1   5", "  / \\ / \\", "  2 3 6 7"]
    );
}

#[test]
fn keep_margin_single_node() {
    let rendering = TreePrinter::new()
        .margin(Margin::Keep)
        .render(Some(&TreeNode::leaf("root")))
        .unwrap();
    assert_eq!(rendering.lines(), ["    root"]);
}

#[test]
fn wide_connector_is_rejected() {
    let error = TreePrinter::new()
        .connectors('木', '\\')
        .render(Some(&TreeNode::example()))
        .unwrap_err();
    assert!(matches!(error, Error::InvalidConnector('木')));
}

#[test]
fn escape_policy_keeps_rows_intact() {
    let tree = TreeNode::leaf("a\nb").with_right(TreeNode::leaf("c"));
    let rendering = TreePrinter::new()
        .label_policy(LabelPolicy::Escape)
        .render(Some(&tree))
        .unwrap();
    assert_eq!(rendering.lines(), ["a\\nb", "    \\", "    c"]);
}

#[test]
fn write_to_appends_newlines() {
    let rendering = render(Some(&TreeNode::example())).unwrap();
    let mut output = Vec::new();
    rendering.write_to(&mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "   4\n  / \\\n 1   5\n/ \\ / \\\n2 3 6 7\n"
    );
}

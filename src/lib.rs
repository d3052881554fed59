#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

/*!
ASCII art of binary trees for the terminal.

Any tree implementing [`BinaryTree`] (or the bundled [`TreeNode`]) is laid out by a [`TreePrinter`] into a [`Rendering`]:
every label sits in its own columns, left subtrees left of their parent, right subtrees right of it, with `/` and `\` connecting them.

```
# use tui_binary_tree::{render, TreeNode};
let tree = TreeNode::new(
    4,
    Some(TreeNode::new(1, Some(TreeNode::leaf(2)), Some(TreeNode::leaf(3)))),
    Some(TreeNode::new(5, Some(TreeNode::leaf(6)), Some(TreeNode::leaf(7)))),
);
let rendering = render(Some(&tree))?;
assert_eq!(
    rendering.lines(),
    ["   4", "  / \\", " 1   5", "/ \\ / \\", "2 3 6 7"]
);
# Ok::<(), tui_binary_tree::Error>(())
```

The [`Rendering`] can be printed directly or shown inside a ratatui application with the [`TreeView`] widget.
*/

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

mod canvas;
mod compose;
mod error;
mod estimate;
mod extent;
#[cfg(feature = "json")]
pub mod json;
mod label;
mod node;
mod printer;

pub use crate::canvas::{Canvas, Fragment, FragmentKind, Row};
pub use crate::compose::{Compositor, Side};
pub use crate::error::{Error, Result};
pub use crate::estimate::{anchor_column, estimate_offset, Direction};
pub use crate::extent::Extent;
pub use crate::label::LabelPolicy;
pub use crate::node::{BinaryTree, TreeNode};
pub use crate::printer::{render, Margin, Rendering, TreePrinter};

/// Widget showing a [`Rendering`].
///
/// # Example
///
/// ```
/// # use tui_binary_tree::{render, TreeNode, TreeView};
/// # use ratatui::backend::TestBackend;
/// # use ratatui::Terminal;
/// # use ratatui::widgets::Block;
/// # let mut terminal = Terminal::new(TestBackend::new(32, 32)).unwrap();
/// let tree = TreeNode::new("root", Some(TreeNode::leaf("left")), None);
/// let rendering = render(Some(&tree)).expect("labels are valid");
///
/// terminal.draw(|frame| {
///     let area = frame.size();
///
///     let widget = TreeView::new(&rendering).block(Block::bordered().title("Binary Tree"));
///
///     frame.render_widget(widget, area);
/// })?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeView<'a> {
    rendering: &'a Rendering,

    block: Option<Block<'a>>,
    /// Style used as a base style for the widget
    style: Style,
    /// Number of lines skipped from the top
    offset: usize,
}

impl<'a> TreeView<'a> {
    #[must_use]
    pub const fn new(rendering: &'a Rendering) -> Self {
        Self {
            rendering,
            block: None,
            style: Style::new(),
            offset: 0,
        }
    }

    #[allow(clippy::missing_const_for_fn)]
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Skip the first `offset` lines, for example to scroll through a tall tree.
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for TreeView<'_> {
    fn render(self, full_area: Rect, buf: &mut Buffer) {
        buf.set_style(full_area, self.style);

        // Get the inner area inside a possible block, otherwise use the full area
        let area = self.block.map_or(full_area, |block| {
            let inner_area = block.inner(full_area);
            block.render(full_area, buf);
            inner_area
        });

        if area.width < 1 || area.height < 1 {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        for (y, line) in self
            .rendering
            .lines()
            .iter()
            .skip(self.offset)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_stringn(
                area.x,
                area.y + y as u16,
                line,
                area.width as usize,
                self.style,
            );
        }
    }
}

#[cfg(test)]
fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn widget_renders_all_lines() {
    let rendering = render(Some(&TreeNode::example())).unwrap();
    let area = Rect::new(0, 0, 9, 6);
    let mut buffer = Buffer::empty(area);
    TreeView::new(&rendering).render(area, &mut buffer);
    assert_eq!(
        buffer_lines(&buffer),
        [
            "   4     ",
            "  / \\    ",
            " 1   5   ",
            "/ \\ / \\  ",
            "2 3 6 7  ",
            "         ",
        ]
    );
}

#[test]
fn widget_clips_and_scrolls() {
    let rendering = render(Some(&TreeNode::example())).unwrap();
    let area = Rect::new(0, 0, 4, 2);
    let mut buffer = Buffer::empty(area);
    TreeView::new(&rendering)
        .offset(2)
        .render(area, &mut buffer);
    assert_eq!(buffer_lines(&buffer), [" 1  ", "/ \\ "]);
}

#[test]
fn widget_draws_inside_block() {
    let rendering = render(Some(&TreeNode::leaf("x"))).unwrap();
    let area = Rect::new(0, 0, 3, 3);
    let mut buffer = Buffer::empty(area);
    TreeView::new(&rendering)
        .block(Block::bordered())
        .render(area, &mut buffer);
    assert_eq!(buffer_lines(&buffer), ["┌─┐", "│x│", "└─┘"]);
}

#[test]
fn widget_without_space_draws_nothing() {
    let rendering = render(Some(&TreeNode::leaf("x"))).unwrap();
    let area = Rect::new(0, 0, 2, 2);
    let mut buffer = Buffer::empty(area);
    TreeView::new(&rendering)
        .block(Block::bordered())
        .render(area, &mut buffer);
    assert_eq!(buffer_lines(&buffer), ["┌┐", "└┘"]);
}

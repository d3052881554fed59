use std::collections::BTreeMap;

use unicode_width::UnicodeWidthStr;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Label,
    Connector,
}

/// Text placed at a column of a [`Row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    columns: usize,
    kind: FragmentKind,
}

impl Fragment {
    /// A node label reserving `columns` columns.
    #[must_use]
    pub fn label(text: impl Into<String>, columns: usize) -> Self {
        Self {
            text: text.into(),
            columns: columns.max(1),
            kind: FragmentKind::Label,
        }
    }

    /// A single column connector glyph like `/` or `\`.
    #[must_use]
    pub fn connector(glyph: char) -> Self {
        Self {
            text: glyph.to_string(),
            columns: 1,
            kind: FragmentKind::Connector,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of columns claimed, at least 1.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }
}

/// One line of output: fragments keyed by their start column.
///
/// Fragments never overlap.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    fragments: BTreeMap<usize, Fragment>,
}

impl Row {
    /// Place `fragment` starting at `column`.
    ///
    /// Returns the fragment back when any of its columns is already claimed.
    fn claim(&mut self, column: usize, fragment: Fragment) -> Result<(), Fragment> {
        let end = column + fragment.columns;
        let before_ends = self
            .fragments
            .range(..=column)
            .next_back()
            .map(|(start, existing)| start + existing.columns);
        let after_starts = self.fragments.range(column..).next().map(|(start, _)| *start);
        if before_ends.is_some_and(|before_end| before_end > column)
            || after_starts.is_some_and(|after_start| after_start < end)
        {
            return Err(fragment);
        }
        self.fragments.insert(column, fragment);
        Ok(())
    }

    /// Fragments in column order.
    pub fn fragments(&self) -> impl Iterator<Item = (usize, &Fragment)> {
        self.fragments.iter().map(|(column, fragment)| (*column, fragment))
    }

    /// Highest column a fragment starts at.
    #[must_use]
    pub fn max_column(&self) -> Option<usize> {
        self.fragments.keys().next_back().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Write the row as text, padding unclaimed columns with spaces.
    ///
    /// Nothing is emitted after the last fragment.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut line = String::new();
        let mut cursor = 0;
        for (&column, fragment) in &self.fragments {
            line.extend(std::iter::repeat(' ').take(column.saturating_sub(cursor)));
            line.push_str(&fragment.text);
            cursor = column + fragment.text.width();
        }
        line
    }

    fn shift_left(&mut self, columns: usize) {
        self.fragments = std::mem::take(&mut self.fragments)
            .into_iter()
            .map(|(column, fragment)| (column - columns, fragment))
            .collect();
    }
}

/// Rows of a rendering in progress, indexed from the top starting at 0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: BTreeMap<usize, Row>,
}

impl Canvas {
    /// Place `fragment` into `row` at `column`, creating the row when needed.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::Overlap`] when the fragment would cover an already claimed column.
    pub fn claim(&mut self, row: usize, column: usize, fragment: Fragment) -> Result<()> {
        self.rows
            .entry(row)
            .or_default()
            .claim(column, fragment)
            .map_err(|fragment| Error::Overlap {
                row,
                column,
                fragment: fragment.text,
            })
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Populated rows in top to bottom order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows
            .iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(index, row)| (*index, row))
    }

    /// Leftmost claimed column over all rows.
    #[must_use]
    pub fn min_column(&self) -> Option<usize> {
        self.rows
            .values()
            .filter_map(|row| row.fragments.keys().next().copied())
            .min()
    }

    /// Remove the blank columns every row starts with.
    pub fn trim_leading(&mut self) {
        let Some(margin) = self.min_column().filter(|margin| *margin > 0) else {
            return;
        };
        for row in self.rows.values_mut() {
            row.shift_left(margin);
        }
    }

    /// Serialize all populated rows, skipping gaps between row indices.
    #[must_use]
    pub fn serialize(&self) -> Vec<String> {
        self.rows().map(|(_, row)| row.serialize()).collect()
    }
}

#[test]
fn serialize_pads_between_fragments() {
    let mut canvas = Canvas::default();
    canvas.claim(0, 2, Fragment::label("ab", 2)).unwrap();
    canvas.claim(0, 6, Fragment::connector('\\')).unwrap();
    canvas.claim(0, 0, Fragment::connector('/')).unwrap();
    assert_eq!(canvas.serialize(), ["/ ab  \\"]);
}

#[test]
fn overlapping_fragment_is_rejected() {
    let mut canvas = Canvas::default();
    canvas.claim(3, 4, Fragment::label("abc", 3)).unwrap();
    for column in 2..=6 {
        let result = canvas.claim(3, column, Fragment::label("xyz", 3));
        assert!(
            matches!(result, Err(Error::Overlap { row: 3, column: c, .. }) if c == column),
            "column {column} should overlap"
        );
    }
    canvas.claim(3, 1, Fragment::label("xyz", 3)).unwrap();
    canvas.claim(3, 7, Fragment::connector('\\')).unwrap();
    assert_eq!(canvas.serialize(), [" xyzabc\\"]);
}

#[test]
fn empty_label_reserves_a_column_without_trailing_space() {
    let mut canvas = Canvas::default();
    canvas.claim(0, 0, Fragment::label("a", 1)).unwrap();
    canvas.claim(0, 1, Fragment::label("", 1)).unwrap();
    assert!(canvas.claim(0, 1, Fragment::connector('/')).is_err());
    assert_eq!(canvas.serialize(), ["a"]);
}

#[test]
fn rows_with_gaps_are_skipped() {
    let mut canvas = Canvas::default();
    canvas.claim(0, 0, Fragment::label("top", 3)).unwrap();
    canvas.claim(4, 1, Fragment::label("bottom", 6)).unwrap();
    assert_eq!(canvas.rows().map(|(index, _)| index).collect::<Vec<_>>(), [0, 4]);
    assert_eq!(canvas.serialize(), ["top", " bottom"]);
    assert_eq!(canvas.row(4).and_then(Row::max_column), Some(1));
    assert!(canvas.row(2).is_none());
}

#[test]
fn trim_leading_shifts_every_row() {
    let mut canvas = Canvas::default();
    canvas.claim(0, 5, Fragment::label("x", 1)).unwrap();
    canvas.claim(1, 3, Fragment::connector('/')).unwrap();
    canvas.claim(2, 4, Fragment::label("y", 1)).unwrap();
    assert_eq!(canvas.min_column(), Some(3));
    canvas.trim_leading();
    assert_eq!(canvas.serialize(), ["  x", "/", " y"]);
}

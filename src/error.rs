use thiserror::Error;

/// Everything that can go wrong while turning a tree into text.
#[derive(Debug, Error)]
pub enum Error {
    /// The renderer was called without a root node.
    #[error("invalid input: cannot render a tree without a root node")]
    MissingRoot,

    #[error("label {label:?} contains the control character {character:?}")]
    InvalidLabel { label: String, character: char },

    #[error("connector glyph {0:?} has to be exactly one column wide")]
    InvalidConnector(char),

    /// The tree has more levels than the printer is willing to recurse into.
    #[error("tree is deeper than the supported limit of {limit} levels")]
    TooDeep { limit: usize },

    /// A node was placed too far left for its left subtree to fit.
    #[error("column {column} is out of range, the subtree needs at least column {required}")]
    ColumnOutOfRange { column: usize, required: usize },

    #[error("fragment {fragment:?} at row {row}, column {column} overlaps an existing fragment")]
    Overlap {
        row: usize,
        column: usize,
        fragment: String,
    },

    #[error("failed to write the rendering: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("invalid json tree: {0}")]
    InvalidJson(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for the CSV model and parser.
//!
//! Every fallible operation in this crate returns [`Result`], whose error is
//! one of three kinds:
//!
//! - **Invalid arguments**: a forbidden delimiter, an unknown column name, or
//!   a parser without a line ending
//! - **Out of bounds**: a row index past the end of the model
//! - **Parse errors**: a record whose cell count differs from the first
//!   record, reported with the 0-based line number
//!
//! Malformed quoting is never an error; the tokenizer absorbs it.
//!
//! ## Examples
//!
//! ```rust
//! use csv_model::{from_str, Error};
//!
//! let result = from_str("a;b\n1;2;3");
//! assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
//! ```

use thiserror::Error;

/// All errors that can occur while building, querying or parsing a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A row index was outside `0..len`.
    #[error("Row index {index} out of bounds for model with {len} rows")]
    OutOfBounds { index: usize, len: usize },

    /// A record did not match the shape of the first record.
    #[error("Parse error at line {line}, column {column}: {msg}")]
    Parse {
        line: usize,
        column: usize,
        msg: String,
    },
}

impl Error {
    /// Creates an invalid argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::Error;
    ///
    /// let err = Error::invalid_argument("unknown column: x");
    /// assert!(err.to_string().contains("unknown column"));
    /// ```
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Creates an out of bounds error for `index` against a model of `len` rows.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::OutOfBounds { index, len }
    }

    /// Creates a parse error for the given 0-based line.
    ///
    /// The column is always reported as `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::Error;
    ///
    /// let err = Error::parse(3, "column count mismatch");
    /// assert_eq!(err.line(), Some(3));
    /// assert_eq!(err.column(), Some(0));
    /// ```
    pub fn parse<T: Into<String>>(line: usize, msg: T) -> Self {
        Error::Parse {
            line,
            column: 0,
            msg: msg.into(),
        }
    }

    /// Line of a parse error, `None` for other kinds.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Column of a parse error, `None` for other kinds.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Parse { column, .. } => Some(*column),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Configuration for models and the parser.
//!
//! This module provides:
//!
//! - [`LineEnding`]: the record terminator used when splitting and writing
//! - [`ParserOptions`]: delimiter, line ending, trimming and quoting behaviour
//!   of the [`Parser`](crate::Parser)
//! - the [`DEFAULT_DELIMITER`] and [`QUOTE`] characters
//!
//! ## Examples
//!
//! ```rust
//! use csv_model::{LineEnding, Parser, ParserOptions};
//!
//! let options = ParserOptions::new()
//!     .with_delimiter(',')
//!     .with_line_ending(LineEnding::Windows)
//!     .with_trim_cells(false);
//!
//! let parser = Parser::with_options(options);
//! let model = parser.parse("a,b\r\n1,2\r\n", true).unwrap();
//! assert_eq!(model.get_cell_value("b", 0).unwrap(), Some("2"));
//! ```

use serde::{Deserialize, Serialize};

/// Delimiter used by new models and parsers.
pub const DEFAULT_DELIMITER: char = ';';

/// The quote character. It opens and closes quoted runs and can never be a delimiter.
pub const QUOTE: char = '"';

/// Line ending used by new models and parsers.
pub const DEFAULT_LINE_ENDING: LineEnding = LineEnding::Unix;

/// Record terminator.
///
/// `Mac` is kept as an alias of `Unix`; both are written as `"\n"`.
///
/// # Examples
///
/// ```rust
/// use csv_model::LineEnding;
///
/// assert_eq!(LineEnding::Unix.as_str(), "\n");
/// assert_eq!(LineEnding::Mac.as_str(), "\n");
/// assert_eq!(LineEnding::MacPreOsx.as_str(), "\r");
/// assert_eq!(LineEnding::Windows.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Unix,
    Mac,
    MacPreOsx,
    Windows,
}

impl LineEnding {
    /// Returns the byte sequence written after every record.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Unix | LineEnding::Mac => "\n",
            LineEnding::MacPreOsx => "\r",
            LineEnding::Windows => "\r\n",
        }
    }
}

/// Configuration for the [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use csv_model::{LineEnding, ParserOptions};
///
/// let options = ParserOptions::new();
/// assert_eq!(options.delimiter, ';');
/// assert_eq!(options.line_ending, Some(LineEnding::Unix));
/// assert!(options.trim_cells);
/// assert!(options.quote_aware);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub delimiter: char,
    /// `None` makes every parse fail with an invalid argument error.
    pub line_ending: Option<LineEnding>,
    pub trim_cells: bool,
    /// Split records with the quote-aware tokenizer. When `false` records are
    /// split on every delimiter and trailing empty cells are dropped.
    pub quote_aware: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            delimiter: DEFAULT_DELIMITER,
            line_ending: Some(DEFAULT_LINE_ENDING),
            trim_cells: true,
            quote_aware: true,
        }
    }
}

impl ParserOptions {
    /// Creates default options (`;` delimiter, Unix line ending, trimming on, quote aware).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell delimiter.
    ///
    /// The quote character is accepted here but rejected when parsing.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the line ending used to split the input into records.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::{LineEnding, ParserOptions};
    ///
    /// let options = ParserOptions::new().with_line_ending(LineEnding::MacPreOsx);
    /// assert_eq!(options.line_ending, Some(LineEnding::MacPreOsx));
    ///
    /// let options = ParserOptions::new().with_line_ending(None);
    /// assert_eq!(options.line_ending, None);
    /// ```
    #[must_use]
    pub fn with_line_ending<L: Into<Option<LineEnding>>>(mut self, line_ending: L) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Enables or disables trimming of leading and trailing whitespace in every cell.
    #[must_use]
    pub fn with_trim_cells(mut self, trim_cells: bool) -> Self {
        self.trim_cells = trim_cells;
        self
    }

    /// Chooses between the quote-aware tokenizer and a plain delimiter split.
    #[must_use]
    pub fn with_quote_aware(mut self, quote_aware: bool) -> Self {
        self.quote_aware = quote_aware;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line_ending_is_unix() {
        assert_eq!(LineEnding::default(), LineEnding::Unix);
        assert_eq!(DEFAULT_LINE_ENDING.as_str(), "\n");
    }

    #[test]
    fn test_builder_chain() {
        let options = ParserOptions::new()
            .with_delimiter('|')
            .with_line_ending(LineEnding::Windows)
            .with_trim_cells(false)
            .with_quote_aware(false);

        assert_eq!(options.delimiter, '|');
        assert_eq!(options.line_ending, Some(LineEnding::Windows));
        assert!(!options.trim_cells);
        assert!(!options.quote_aware);
    }
}

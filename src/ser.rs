//! Serialization of records to delimited text.
//!
//! This module provides [`escape_cell`], which decides whether a single cell
//! must be quoted, and the [`Serializer`], which writes whole records.
//!
//! ## Quoting policy
//!
//! A cell is wrapped in `"` only when it contains the active delimiter.
//! Nothing else triggers quoting and quotes inside a cell are written as-is:
//!
//! ```rust
//! use csv_model::escape_cell;
//!
//! assert_eq!(escape_cell("a;b", ';'), "\"a;b\"");
//! assert_eq!(escape_cell("a,b", ';'), "a,b");
//! assert_eq!(escape_cell("say \"hi\"", ';'), "say \"hi\"");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! Most users call [`Model::to_csv_string`](crate::Model::to_csv_string).
//! The serializer can also be driven directly:
//!
//! ```rust
//! use csv_model::{LineEnding, Serializer};
//!
//! let mut serializer = Serializer::new(',', LineEnding::Windows);
//! serializer.write_record(["id", "name"]);
//! serializer.write_record(["1", "Smith, John"]);
//!
//! assert_eq!(serializer.into_inner(), "id,name\r\n1,\"Smith, John\"\r\n");
//! ```

use crate::options::{LineEnding, QUOTE};
use std::borrow::Cow;

/// Returns `cell` wrapped in quotes when it contains `delimiter`, unchanged otherwise.
#[inline]
pub fn escape_cell(cell: &str, delimiter: char) -> Cow<'_, str> {
    if cell.contains(delimiter) {
        let mut quoted = String::with_capacity(cell.len() + 2);
        quoted.push(QUOTE);
        quoted.push_str(cell);
        quoted.push(QUOTE);
        Cow::Owned(quoted)
    } else {
        Cow::Borrowed(cell)
    }
}

/// Writes records into an owned string buffer.
///
/// Every record is terminated by the configured line ending, including the last one.
pub struct Serializer {
    output: String,
    delimiter: char,
    line_ending: LineEnding,
}

impl Serializer {
    pub fn new(delimiter: char, line_ending: LineEnding) -> Self {
        Serializer {
            output: String::with_capacity(256),
            delimiter,
            line_ending,
        }
    }

    /// Writes one record: escaped cells joined by the delimiter, then the line ending.
    pub fn write_record<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, cell) in cells.into_iter().enumerate() {
            if i > 0 {
                self.output.push(self.delimiter);
            }
            self.output
                .push_str(&escape_cell(cell.as_ref(), self.delimiter));
        }
        self.output.push_str(self.line_ending.as_str());
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_only_on_delimiter() {
        assert!(matches!(escape_cell("plain", ';'), Cow::Borrowed("plain")));
        assert_eq!(escape_cell("has;delim", ';'), "\"has;delim\"");
        assert_eq!(escape_cell(" padded ", ';'), " padded ");
        assert_eq!(escape_cell("\"", ';'), "\"");
    }

    #[test]
    fn test_escape_empty_cell() {
        assert_eq!(escape_cell("", ';'), "");
    }

    #[test]
    fn test_write_records() {
        let mut serializer = Serializer::new(';', LineEnding::Unix);
        serializer.write_record(["a", "b;c"]);
        serializer.write_record(["", "d"]);
        assert_eq!(serializer.into_inner(), "a;\"b;c\"\n;d\n");
    }

    #[test]
    fn test_empty_record_is_just_a_line_ending() {
        let mut serializer = Serializer::new(';', LineEnding::MacPreOsx);
        serializer.write_record(Vec::<String>::new());
        assert_eq!(serializer.into_inner(), "\r");
    }
}

//! Parsing delimited text into a [`Model`].
//!
//! The [`Parser`] splits its input into records on the configured line
//! ending, skips blank records, splits every remaining record into cells and
//! loads them into a fresh model.
//!
//! ## Usage
//!
//! ```rust
//! use csv_model::Parser;
//!
//! let mut parser = Parser::new();
//! parser.set_delimiter(',');
//!
//! let csv = "alpha, beta, gamma, delta\n\
//!            a0,    b0,   c0,    d0\n\
//!            a1,    b1,   c1,    d1\n\
//!            a2,    b2,   c2,    d2\n";
//!
//! let model = parser.parse(csv, true)?;
//! assert_eq!(model.row_count(), 3);
//! assert_eq!(model.get_cell_value("gamma", 1)?, Some("c1"));
//! # Ok::<(), csv_model::Error>(())
//! ```
//!
//! ## Headers
//!
//! With `with_headline` the first non-blank record provides the column
//! names. Without it the columns are named `col0`, `col1`, … and the first
//! record becomes the first row.
//!
//! ## Errors
//!
//! Every non-blank record must have as many cells as the first one;
//! otherwise parsing stops with [`Error::Parse`] carrying the 0-based index
//! of the offending record (blank records are counted).

use crate::options::{LineEnding, ParserOptions, QUOTE};
use crate::tokenizer::LineSplitter;
use crate::{Error, Model, Result};
use std::str::FromStr;
use tracing::{debug, trace};

/// Builds [`Model`]s from delimited text.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: ParserOptions,
}

struct BuildContext {
    model: Model,
    first_line_cell_count: usize,
}

impl Parser {
    /// Creates a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn delimiter(&self) -> char {
        self.options.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: char) {
        self.options.delimiter = delimiter;
    }

    pub fn line_ending(&self) -> Option<LineEnding> {
        self.options.line_ending
    }

    /// Sets the record separator. Unlike on a model, `None` is kept as is
    /// and makes [`parse`](Self::parse) fail.
    pub fn set_line_ending<L: Into<Option<LineEnding>>>(&mut self, line_ending: L) {
        self.options.line_ending = line_ending.into();
    }

    pub fn is_cell_auto_trimming_enabled(&self) -> bool {
        self.options.trim_cells
    }

    pub fn set_cell_auto_trimming_enabled(&mut self, enabled: bool) {
        self.options.trim_cells = enabled;
    }

    pub fn is_quote_aware(&self) -> bool {
        self.options.quote_aware
    }

    pub fn set_quote_aware(&mut self, quote_aware: bool) {
        self.options.quote_aware = quote_aware;
    }

    /// Parses `text` into a new model.
    ///
    /// The returned model carries the parser's delimiter and line ending.
    /// Input without any non-blank record yields an empty model.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when no line ending is configured or the
    ///   delimiter is the quote character
    /// - [`Error::Parse`] when a record's cell count differs from the first record
    pub fn parse(&self, text: &str, with_headline: bool) -> Result<Model> {
        let line_ending = self
            .options
            .line_ending
            .ok_or_else(|| Error::invalid_argument("line ending may not be absent"))?;
        if self.options.delimiter == QUOTE {
            return Err(Error::invalid_argument(
                "a delimiter '\"' is not allowed because it is used to escape cells",
            ));
        }

        let splitter = LineSplitter::new(self.options.delimiter);
        let mut context: Option<BuildContext> = None;

        for (line_number, line) in text.split(line_ending.as_str()).enumerate() {
            if line.trim().is_empty() {
                trace!(line_number, "skipping blank record");
                continue;
            }
            let cells = self.split_record(&splitter, line);

            match context.as_mut() {
                None => {
                    context = Some(Self::start_model(line_number, cells, with_headline));
                }
                Some(context) => {
                    if cells.len() != context.first_line_cell_count {
                        debug!(
                            line_number,
                            expected = context.first_line_cell_count,
                            found = cells.len(),
                            "column count mismatch"
                        );
                        return Err(Error::parse(
                            line_number,
                            format!(
                                "In first line we have {} cells, but line {} has {}",
                                context.first_line_cell_count,
                                line_number,
                                cells.len()
                            ),
                        ));
                    }
                    context.model.add_row().fill(cells);
                }
            }
        }

        let mut model = context.map(|context| context.model).unwrap_or_default();
        model.set_delimiter(self.options.delimiter)?;
        model.set_line_ending(line_ending);
        debug!(
            rows = model.row_count(),
            columns = model.column_names().len(),
            "parsed model"
        );
        Ok(model)
    }

    fn split_record(&self, splitter: &LineSplitter, line: &str) -> Vec<String> {
        let mut cells = if self.options.quote_aware {
            splitter.split_line(line)
        } else {
            split_plain(line, self.options.delimiter)
        };
        if self.options.trim_cells {
            for cell in &mut cells {
                let trimmed = cell.trim();
                if trimmed.len() != cell.len() {
                    *cell = trimmed.to_string();
                }
            }
        }
        cells
    }

    fn start_model(line_number: usize, cells: Vec<String>, with_headline: bool) -> BuildContext {
        let first_line_cell_count = cells.len();
        let model = if with_headline {
            debug!(line_number, columns = first_line_cell_count, "using record as headline");
            Model::new(cells)
        } else {
            debug!(line_number, columns = first_line_cell_count, "using synthetic column names");
            let mut model = Model::new((0..first_line_cell_count).map(|i| format!("col{}", i)));
            model.add_row().fill(cells);
            model
        };
        BuildContext {
            model,
            first_line_cell_count,
        }
    }
}

/// Splits on every `delimiter`, ignoring quotes, and drops trailing empty cells.
fn split_plain(line: &str, delimiter: char) -> Vec<String> {
    let mut cells: Vec<String> = line.split(delimiter).map(str::to_string).collect();
    while cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}

impl FromStr for Model {
    type Err = Error;

    /// Parses with default options, treating the first record as headline.
    fn from_str(s: &str) -> Result<Self> {
        Parser::new().parse(s, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_synthetic_columns() {
        let mut parser = Parser::new();
        parser.set_delimiter(',');
        let model = parser
            .parse("a0,b0,c0,d0\na1,b1,c1,d1\na2,b2,c2,d2\n", false)
            .unwrap();

        assert_eq!(model.row_count(), 3);
        assert_eq!(model.column_names(), ["col0", "col1", "col2", "col3"]);
        assert_eq!(model.get_cell_value("col2", 1).unwrap(), Some("c1"));
    }

    #[test]
    fn test_empty_input() {
        let model = Parser::new().parse("", false).unwrap();
        assert_eq!(model.row_count(), 0);
        assert!(model.column_names().is_empty());
    }

    #[test]
    fn test_missing_line_ending_is_invalid() {
        let mut parser = Parser::new();
        parser.set_line_ending(None);
        assert!(matches!(
            parser.parse("a;b", true),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_quote_delimiter_is_invalid() {
        let mut parser = Parser::new();
        parser.set_delimiter('"');
        assert!(matches!(
            parser.parse("a;b", true),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mismatch_reports_line() {
        let err = Parser::new().parse("a;b\n1;2\n\n1;2;3\n", true).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.column(), Some(0));
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let model = Parser::new().parse("\n   \nx;y\n1;2\n", true).unwrap();
        assert_eq!(model.column_names(), ["x", "y"]);
        assert_eq!(model.row_count(), 1);
    }

    #[test]
    fn test_duplicate_headline_names_fill_first_column() {
        let model = Parser::new().parse("x;x\n1;2\n", true).unwrap();
        let row = model.get_row(0).unwrap();
        assert_eq!(row.cells().collect::<Vec<_>>(), vec![Some("2"), None]);
    }

    #[test]
    fn test_plain_split_ignores_quotes() {
        assert_eq!(split_plain("\"a;b\";c", ';'), vec!["\"a", "b\"", "c"]);
        assert_eq!(split_plain("a;;b;;", ';'), vec!["a", "", "b"]);
        assert!(split_plain(";;", ';').is_empty());
    }

    #[test]
    fn test_trimming_can_be_disabled() {
        let mut parser = Parser::new();
        parser.set_cell_auto_trimming_enabled(false);
        let model = parser.parse("a; b\n1 ; 2", true).unwrap();
        assert_eq!(model.column_names(), ["a", " b"]);
        assert_eq!(model.get_cell_value(" b", 0).unwrap(), Some(" 2"));
    }

    #[test]
    fn test_model_carries_parser_settings() {
        let parser = Parser::with_options(
            ParserOptions::new()
                .with_delimiter('|')
                .with_line_ending(LineEnding::Windows),
        );
        let model = parser.parse("a|b\r\n1|2\r\n", true).unwrap();
        assert_eq!(model.delimiter(), '|');
        assert_eq!(model.line_ending(), LineEnding::Windows);
        assert_eq!(model.to_csv_string(), "a|b\r\n1|2\r\n");
    }
}

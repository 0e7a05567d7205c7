//! # csv_model
//!
//! A small in-memory model for delimiter-separated text.
//!
//! ## Key Features
//!
//! - **Simple model**: ordered column names, ordered rows, cells addressed by
//!   column name
//! - **Quote-aware tokenizer**: delimiters inside `"…"` are data, `""` encodes
//!   a literal quote
//! - **Configurable**: any delimiter except `"`, four line endings, optional
//!   cell trimming
//! - **Serde support**: models serialize to and from any serde format
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ### Building and serializing a model
//!
//! ```rust
//! use csv_model::Model;
//!
//! let mut model = Model::new(["name", "city"]);
//! model.add_row().set("name", "Alice")?.set("city", "Berlin")?;
//! model.add_row().set("name", "Bob")?.set("city", "Paris; France")?;
//!
//! assert_eq!(
//!     model.to_csv_string(),
//!     "name;city\nAlice;Berlin\nBob;\"Paris; France\"\n"
//! );
//! # Ok::<(), csv_model::Error>(())
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use csv_model::from_str;
//!
//! let model = from_str("name;city\nAlice;Berlin\nBob;\"Paris; France\"\n")?;
//! assert_eq!(model.row_count(), 2);
//! assert_eq!(model.get_cell_value("city", 1)?, Some("Paris; France"));
//! # Ok::<(), csv_model::Error>(())
//! ```
//!
//! ### Custom parser options
//!
//! ```rust
//! use csv_model::{from_str_with_options, LineEnding, ParserOptions};
//!
//! let options = ParserOptions::new()
//!     .with_delimiter(',')
//!     .with_line_ending(LineEnding::Windows);
//!
//! let model = from_str_with_options("1,2\r\n3,4\r\n", &options, false)?;
//! assert_eq!(model.column_names(), ["col0", "col1"]);
//! assert_eq!(model.get_cell_value("col1", 1)?, Some("4"));
//! # Ok::<(), csv_model::Error>(())
//! ```
//!
//! ## Limitations
//!
//! - Records occupy exactly one line; cells cannot contain line endings.
//! - All values are text; there is no type inference.
//! - The serializer only quotes cells that contain the delimiter. Quotes
//!   inside a cell are written as-is.
//! - Unset and empty cells are indistinguishable after serialization.
//!
//! See [`format`] for the full description of the text format.

pub mod error;
pub mod format;
pub mod model;
pub mod options;
pub mod parser;
pub mod ser;
pub mod tokenizer;

pub use error::{Error, Result};
pub use model::{Model, Row};
pub use options::{LineEnding, ParserOptions, DEFAULT_DELIMITER, DEFAULT_LINE_ENDING, QUOTE};
pub use parser::Parser;
pub use ser::{escape_cell, Serializer};
pub use tokenizer::LineSplitter;

/// Parses `text` with default options, using the first record as headline.
///
/// # Errors
///
/// Returns [`Error::Parse`] when records have different cell counts.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Model> {
    Parser::new().parse(text, true)
}

/// Parses `text` with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for unusable options and
/// [`Error::Parse`] when records have different cell counts.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(
    text: &str,
    options: &ParserOptions,
    with_headline: bool,
) -> Result<Model> {
    Parser::with_options(options.clone()).parse(text, with_headline)
}

/// Serializes `model` with a header record.
///
/// ```rust
/// use csv_model::{to_string, Model};
///
/// let model = Model::new(["a", "b"]);
/// assert_eq!(to_string(&model), "a;b\n");
/// ```
#[must_use]
pub fn to_string(model: &Model) -> String {
    model.to_csv_string()
}

/// Serializes only the rows of `model`.
#[must_use]
pub fn to_string_without_header(model: &Model) -> String {
    model.to_csv_string_with_header(false)
}

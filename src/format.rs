//! Text Format
//!
//! This module documents the delimited text format read by
//! [`Parser`](crate::Parser) and written by
//! [`Model::to_csv_string`](crate::Model::to_csv_string).
//!
//! # Records
//!
//! The input is split into records on the configured [`LineEnding`]:
//!
//! | Line ending | Bytes       |
//! |-------------|-------------|
//! | `Unix`      | `0x0A`      |
//! | `Mac`       | `0x0A`      |
//! | `MacPreOsx` | `0x0D`      |
//! | `Windows`   | `0x0D 0x0A` |
//!
//! Every written record, including the last, ends with the line ending.
//! Records that are empty or contain only whitespace are skipped when
//! parsing. A record never spans more than one line.
//!
//! # Cells
//!
//! Cells are separated by a single delimiter character, `;` by default. The
//! quote character `"` can never be the delimiter.
//!
//! ## Quoting (reading)
//!
//! A `"` outside a quoted run opens one; the next `"` closes it. Inside a run
//! the delimiter is ordinary data. When a closing quote directly follows
//! another quote, one literal `"` is kept:
//!
//! ```text
//! "Hello;World";we are here     ->  [Hello;World] [we are here]
//! ""Hello"";World               ->  ["Hello"] [World]
//! a;;b                          ->  [a] [] [b]
//! a;b;                          ->  [a] [b]
//! ```
//!
//! Unbalanced quotes are not an error.
//!
//! ## Quoting (writing)
//!
//! A cell is wrapped in quotes only if it contains the delimiter. Quotes and
//! surrounding whitespace are written unchanged:
//!
//! ```text
//! Paris; France   ->  "Paris; France"
//! say "hi"        ->  say "hi"
//! ```
//!
//! # Header
//!
//! When parsing with a headline the first non-blank record holds the column
//! names. Without one, columns are named `col0`, `col1`, … and the first
//! record is data. All following records must have the same number of cells.
//!
//! # Trimming
//!
//! With trimming enabled (the default) leading and trailing whitespace is
//! removed from every cell, header cells included.
//!
//! # Round trips
//!
//! Parsing the serialized form of a model gives back the same column names
//! and cell values as long as:
//!
//! - no cell contains a line ending or a `"`
//! - no cell has leading or trailing whitespace (when trimming)
//! - no row ends in an empty or unset cell, and no row is entirely blank
//!
//! [`LineEnding`]: crate::LineEnding

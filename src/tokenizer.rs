//! Quote-aware splitting of a single record.
//!
//! [`LineSplitter`] walks a line once, character by character, and tracks
//! whether it is inside a quoted run:
//!
//! - outside a run, `"` opens a run and the delimiter ends the current cell
//! - inside a run, the delimiter is data and `"` closes the run
//! - a `"` that closes a run directly after another `"` also emits one
//!   literal quote, so `""Hello""` decodes to `"Hello"`
//!
//! Quotes are consumed, never kept. Malformed quoting is not an error; an
//! unterminated run simply swallows the remaining delimiters. A trailing
//! delimiter does not produce an empty last cell.
//!
//! ```rust
//! use csv_model::LineSplitter;
//!
//! let splitter = LineSplitter::new(';');
//! assert_eq!(
//!     splitter.split_line("\"Hello;World\";we are here"),
//!     vec!["Hello;World", "we are here"]
//! );
//! ```

use crate::options::QUOTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    Quoted,
}

/// Splits single lines into cells for one delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSplitter {
    delimiter: char,
}

impl LineSplitter {
    pub fn new(delimiter: char) -> Self {
        LineSplitter { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Splits `line` into its cells.
    ///
    /// `line` must not contain line ending characters. An empty line yields
    /// no cells.
    pub fn split_line(&self, line: &str) -> Vec<String> {
        let mut cells = Vec::with_capacity(line.len() / 2);
        let mut buffer = String::new();
        let mut state = State::Normal;
        let mut previous: Option<char> = None;

        for ch in line.chars() {
            if ch == QUOTE {
                state = match state {
                    State::Normal => State::Quoted,
                    State::Quoted => {
                        if previous == Some(QUOTE) {
                            buffer.push(QUOTE);
                        }
                        State::Normal
                    }
                };
            } else if ch == self.delimiter {
                match state {
                    State::Quoted => buffer.push(ch),
                    State::Normal => cells.push(std::mem::take(&mut buffer)),
                }
            } else {
                buffer.push(ch);
            }
            previous = Some(ch);
        }

        if !buffer.is_empty() {
            cells.push(buffer);
        }
        cells
    }
}

/// Splits `line` with a one-off [`LineSplitter`] for `delimiter`.
///
/// ```rust
/// use csv_model::tokenizer::split_line;
///
/// assert_eq!(split_line(';', "Hello;World"), vec!["Hello", "World"]);
/// ```
pub fn split_line(delimiter: char, line: &str) -> Vec<String> {
    LineSplitter::new(delimiter).split_line(line)
}

//! The in-memory tabular model.
//!
//! A [`Model`] owns an ordered, immutable list of column names and an ordered
//! list of [`Row`]s. Every row has exactly one slot per column; a slot is
//! either a string or unset (`None`).
//!
//! ## Examples
//!
//! ```rust
//! use csv_model::Model;
//!
//! let mut model = Model::new(["my-column1", "my-column2"]);
//! model
//!     .add_row()
//!     .set("my-column2", "row0-column2")?
//!     .set("my-column1", "row0-column1")?;
//!
//! assert_eq!(model.row_count(), 1);
//! assert_eq!(model.get_cell_value("my-column1", 0)?, Some("row0-column1"));
//! assert_eq!(
//!     model.to_csv_string(),
//!     "my-column1;my-column2\nrow0-column1;row0-column2\n"
//! );
//! # Ok::<(), csv_model::Error>(())
//! ```
//!
//! ## Column lookup
//!
//! Columns are looked up by exact string equality. Duplicate names are
//! allowed, in which case the first matching column wins.

use crate::options::{LineEnding, DEFAULT_DELIMITER, DEFAULT_LINE_ENDING, QUOTE};
use crate::ser::Serializer;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

fn find_column(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|column| column == name)
}

fn unknown_column(columns: &[String], name: &str) -> Error {
    Error::invalid_argument(format!(
        "The column '{}' is not known, accepted columns are: {:?}",
        name, columns
    ))
}

/// An ordered collection of rows sharing one list of column names.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    delimiter: char,
    line_ending: LineEnding,
    columns: Arc<[String]>,
    rows: Vec<Row>,
}

impl Default for Model {
    fn default() -> Self {
        Model::new(Vec::<String>::new())
    }
}

impl Model {
    /// Creates a model with the given column names and no rows.
    ///
    /// The column list cannot be changed afterwards.
    pub fn new<I, S>(column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Model {
            delimiter: DEFAULT_DELIMITER,
            line_ending: DEFAULT_LINE_ENDING,
            columns: column_names.into_iter().map(Into::<String>::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Sets the delimiter used by [`to_csv_string`](Self::to_csv_string).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for the quote character `"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::Model;
    ///
    /// let mut model = Model::default();
    /// assert!(model.set_delimiter('"').is_err());
    /// assert!(model.set_delimiter('#').is_ok());
    /// assert_eq!(model.delimiter(), '#');
    /// ```
    pub fn set_delimiter(&mut self, delimiter: char) -> Result<()> {
        if delimiter == QUOTE {
            return Err(Error::invalid_argument(
                "a delimiter '\"' is not allowed because it is used to escape cells",
            ));
        }
        self.delimiter = delimiter;
        Ok(())
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Sets the line ending; `None` restores the default (`LineEnding::Unix`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::{LineEnding, Model};
    ///
    /// let mut model = Model::default();
    /// model.set_line_ending(LineEnding::Windows);
    /// assert_eq!(model.line_ending(), LineEnding::Windows);
    ///
    /// model.set_line_ending(None);
    /// assert_eq!(model.line_ending(), LineEnding::Unix);
    /// ```
    pub fn set_line_ending<L: Into<Option<LineEnding>>>(&mut self, line_ending: L) {
        self.line_ending = line_ending.into().unwrap_or(DEFAULT_LINE_ENDING);
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Ordered column names.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Position of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        find_column(&self.columns, name)
    }

    /// Appends a row with every slot unset and returns it for filling.
    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::new(Arc::clone(&self.columns)));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= row_count()`.
    pub fn get_row(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, self.rows.len()))
    }

    /// Mutable variant of [`get_row`](Self::get_row).
    pub fn get_row_mut(&mut self, index: usize) -> Result<&mut Row> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))
    }

    /// Value of column `column_name` in row `index`, `None` when the slot is unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a bad row index and
    /// [`Error::InvalidArgument`] for an unknown column.
    pub fn get_cell_value(&self, column_name: &str, index: usize) -> Result<Option<&str>> {
        self.get_row(index)?.get_cell_value(column_name)
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    /// Serializes the model with a header record.
    pub fn to_csv_string(&self) -> String {
        self.to_csv_string_with_header(true)
    }

    /// Serializes the model, optionally preceded by a header record.
    ///
    /// Cells containing the delimiter are wrapped in quotes and unset slots
    /// are written as empty strings. A model without columns has no header
    /// record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::Model;
    ///
    /// let mut model = Model::new(["c1", "c2"]);
    /// model.add_row().set("c1", "a;b")?;
    ///
    /// assert_eq!(model.to_csv_string_with_header(false), "\"a;b\";\n");
    /// assert_eq!(Model::default().to_csv_string(), "");
    /// # Ok::<(), csv_model::Error>(())
    /// ```
    pub fn to_csv_string_with_header(&self, with_header: bool) -> String {
        let mut serializer = Serializer::new(self.delimiter, self.line_ending);
        if with_header && !self.columns.is_empty() {
            serializer.write_record(self.columns.iter());
        }
        for row in &self.rows {
            serializer.write_record(row.cells().map(|cell| cell.unwrap_or("")));
        }
        serializer.into_inner()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv_string())
    }
}

/// One record of a [`Model`].
///
/// A row always has as many slots as its model has columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    cells: Vec<Option<String>>,
}

impl Row {
    fn new(columns: Arc<[String]>) -> Self {
        let cells = vec![None; columns.len()];
        Row { columns, cells }
    }

    /// Stores each value under the name of the column at its position.
    ///
    /// With duplicate column names the first matching column receives the
    /// last value and later duplicates stay unset. Extra values are ignored.
    pub(crate) fn fill(&mut self, values: Vec<String>) {
        let columns = Arc::clone(&self.columns);
        for (position, (name, value)) in columns.iter().zip(values).enumerate() {
            let index = find_column(&columns, name).unwrap_or(position);
            self.cells[index] = Some(value);
        }
    }

    fn column_position(&self, column_name: &str) -> Result<usize> {
        find_column(&self.columns, column_name)
            .ok_or_else(|| unknown_column(&self.columns, column_name))
    }

    /// Stores `value` in column `column_name`, converting it with `ToString`.
    ///
    /// Returns the row again so calls can be chained with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the column does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_model::Model;
    ///
    /// let mut model = Model::new(["name", "age", "score"]);
    /// model.add_row().set("name", "Alice")?.set("age", 30)?.set("score", 1.5)?;
    ///
    /// assert_eq!(model.get_cell_value("age", 0)?, Some("30"));
    /// assert!(model.get_row_mut(0)?.set("missing", 1).is_err());
    /// # Ok::<(), csv_model::Error>(())
    /// ```
    pub fn set<V: ToString>(&mut self, column_name: &str, value: V) -> Result<&mut Self> {
        let index = self.column_position(column_name)?;
        self.cells[index] = Some(value.to_string());
        Ok(self)
    }

    /// Value of column `column_name`, `None` when the slot is unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the column does not exist.
    pub fn get_cell_value(&self, column_name: &str) -> Result<Option<&str>> {
        let index = self.column_position(column_name)?;
        Ok(self.cells[index].as_deref())
    }

    /// Number of slots, always equal to the model's column count.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Slots in column order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Option<&str>> + '_ {
        self.cells.iter().map(Option::as_deref)
    }

    /// Column name to value map in column order.
    ///
    /// For duplicate column names only the first column is included.
    pub fn to_map(&self) -> IndexMap<String, Option<String>> {
        let mut map = IndexMap::with_capacity(self.cells.len());
        for (name, cell) in self.columns.iter().zip(&self.cells) {
            map.entry(name.clone()).or_insert_with(|| cell.clone());
        }
        map
    }
}

#[derive(Serialize)]
struct ModelRef<'a> {
    delimiter: char,
    line_ending: LineEnding,
    columns: &'a [String],
    rows: Vec<&'a [Option<String>]>,
}

#[derive(Deserialize)]
struct ModelRepr {
    #[serde(default = "default_delimiter")]
    delimiter: char,
    #[serde(default)]
    line_ending: LineEnding,
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Option<String>>>,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ModelRef {
            delimiter: self.delimiter,
            line_ending: self.line_ending,
            columns: &self.columns,
            rows: self.rows.iter().map(|row| row.cells.as_slice()).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = ModelRepr::deserialize(deserializer)?;
        let mut model = Model::new(repr.columns);
        model.set_delimiter(repr.delimiter).map_err(D::Error::custom)?;
        model.set_line_ending(repr.line_ending);

        for (index, cells) in repr.rows.into_iter().enumerate() {
            if cells.len() != model.columns.len() {
                return Err(D::Error::custom(format!(
                    "row {} has {} cells but the model has {} columns",
                    index,
                    cells.len(),
                    model.columns.len()
                )));
            }
            model.add_row().cells = cells;
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> Model {
        let mut model = Model::new(["my-column1", "my-column2"]);
        for i in 0..3 {
            model
                .add_row()
                .set("my-column2", format!("row{}-column2", i))
                .unwrap()
                .set("my-column1", format!("row{}-column1", i))
                .unwrap();
        }
        model
    }

    #[test]
    fn test_row_width_matches_columns() {
        let mut model = Model::new(["a", "b", "c"]);
        assert_eq!(model.add_row().len(), 3);
        assert!(model.get_row(0).unwrap().cells().all(|cell| cell.is_none()));
    }

    #[test]
    fn test_get_row_out_of_bounds() {
        let model = three_rows();
        assert_eq!(model.get_row(3), Err(Error::out_of_bounds(3, 3)));
        assert!(matches!(
            model.get_cell_value("my-column1", 7),
            Err(Error::OutOfBounds { index: 7, len: 3 })
        ));
    }

    #[test]
    fn test_unknown_column() {
        let model = three_rows();
        assert!(matches!(
            model.get_cell_value("not-existing", 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_columns_first_wins() {
        let mut model = Model::new(["x", "x"]);
        model.add_row().set("x", "first").unwrap();
        let row = model.get_row(0).unwrap();
        assert_eq!(row.cells().collect::<Vec<_>>(), vec![Some("first"), None]);
        assert_eq!(model.column_index("x"), Some(0));

        let map = row.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["x"], Some("first".to_string()));
    }

    #[test]
    fn test_to_map_preserves_column_order() {
        let model = three_rows();
        let map = model.get_row(1).unwrap().to_map();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["my-column1", "my-column2"]);
    }

    #[test]
    fn test_get_row_mut_updates_value() {
        let mut model = three_rows();
        model
            .get_row_mut(1)
            .unwrap()
            .set("my-column1", "changed")
            .unwrap();
        assert_eq!(
            model.get_cell_value("my-column1", 1).unwrap(),
            Some("changed")
        );
    }

    #[test]
    fn test_unset_cells_serialize_as_empty() {
        let mut model = Model::new(["a", "b", "c"]);
        model.add_row().set("b", "x").unwrap();
        assert_eq!(model.to_csv_string_with_header(false), ";x;\n");
    }

    #[test]
    fn test_display_matches_to_csv_string() {
        let model = three_rows();
        assert_eq!(model.to_string(), model.to_csv_string());
    }

    #[test]
    fn test_header_only() {
        let model = Model::new(["my-column1", "my-column2"]);
        assert_eq!(model.to_csv_string(), "my-column1;my-column2\n");
        assert_eq!(model.to_csv_string_with_header(false), "");
    }
}

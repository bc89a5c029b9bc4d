//! In-memory table loaded from a CSV file

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed table from a single CSV file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Row data
    pub rows: Vec<Row>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Create a new empty table
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            source_path,
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Values of a column, top to bottom
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let col = self.find_column(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(col.index).unwrap_or_default())
                .collect(),
        )
    }

    /// Assign one value per row to the named column.
    ///
    /// An existing column keeps its position and has every value replaced.
    /// Otherwise the column is appended after the last one. Returns `true`
    /// when an existing column was overwritten.
    pub fn set_column<S: Into<String>>(&mut self, name: &str, values: Vec<S>) -> Result<bool> {
        if values.len() != self.row_count() {
            return Err(Error::ColumnLength {
                column: name.to_string(),
                expected: self.row_count(),
                found: values.len(),
            });
        }

        let (index, replaced) = match self.find_column(name) {
            Some(col) => (col.index, true),
            None => {
                let index = self.columns.len();
                self.columns.push(Column::new(name.to_string(), index));
                (index, false)
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if replaced {
                row.cells[index] = value.into();
            } else {
                row.cells.push(value.into());
            }
        }

        Ok(replaced)
    }
}

/// A column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header row
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// A row of data, one raw cell per column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

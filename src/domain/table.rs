//! Column-oriented table.
//!
//! A `Table` is an insertion-ordered set of named [`Column`]s. Columns are
//! expected to share one length but nothing enforces it: row reads default
//! short columns to `0.0`, and [`Table::validate`] is available for callers
//! that want the check.

use crate::domain::column::Column;
use crate::domain::error::FrameError;
use std::ops::{Bound, RangeBounds};
use tracing::warn;

/// Conventional row count for `head`/`tail` previews.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Anything that can be assigned as a column.
#[derive(Debug, Clone)]
pub enum ColumnValues {
    Values(Vec<f64>),
    /// Stored as a single-element column, not repeated to the table length.
    Scalar(f64),
}

impl From<Vec<f64>> for ColumnValues {
    fn from(values: Vec<f64>) -> Self {
        ColumnValues::Values(values)
    }
}

impl From<&[f64]> for ColumnValues {
    fn from(values: &[f64]) -> Self {
        ColumnValues::Values(values.to_vec())
    }
}

impl From<Column> for ColumnValues {
    fn from(column: Column) -> Self {
        ColumnValues::Values(column.into_values())
    }
}

impl From<f64> for ColumnValues {
    fn from(value: f64) -> Self {
        ColumnValues::Scalar(value)
    }
}

/// One row of a table: column name to the value at that position.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<(String, f64)>,
}

impl Row {
    /// Cell value, or `0.0` if the row has no such column.
    pub fn get(&self, name: &str) -> f64 {
        self.cells
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cells.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.cells.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, values)` pairs. A repeated name replaces
    /// the earlier column in place.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut table = Table::new();
        for (name, values) in columns {
            table.set_column(name, values);
        }
        if let Err(e) = table.validate() {
            warn!(error = %e, "table built with uneven columns");
        }
        table
    }

    fn from_column_vec(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Borrowing lookup.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// The named column, or an empty one if the table has no such column.
    pub fn get_column(&self, name: &str) -> Column {
        self.column(name)
            .cloned()
            .unwrap_or_else(|| Column::empty(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Assigns a column, replacing an existing one of the same name in place
    /// or appending a new one.
    pub fn set_column(&mut self, name: impl Into<String>, values: impl Into<ColumnValues>) {
        let name = name.into();
        let values = match values.into() {
            ColumnValues::Values(v) => v,
            ColumnValues::Scalar(x) => vec![x],
        };
        let column = Column::new(name.clone(), values);
        match self.columns.iter_mut().find(|c| c.name() == name) {
            Some(slot) => *slot = column,
            None => self.columns.push(column),
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Row count, taken from the first column; `0` with no columns.
    pub fn length(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// The row at `index`. Columns too short to reach `index` contribute `0.0`.
    pub fn row_at(&self, index: usize) -> Row {
        Row {
            cells: self
                .columns
                .iter()
                .map(|c| (c.name().to_string(), c.get(index)))
                .collect(),
        }
    }

    /// Every column sliced to the same positional range. An open end stops at
    /// the table length; explicit bounds are clamped per column, so columns
    /// longer than the first keep their rows.
    pub fn rows_in_range<R: RangeBounds<usize>>(&self, range: R) -> Table {
        let end = match range.end_bound() {
            Bound::Unbounded => Bound::Excluded(self.length()),
            bound => bound.cloned(),
        };
        let bounds = (range.start_bound().cloned(), end);
        Table::from_column_vec(self.columns.iter().map(|c| c.slice(bounds)).collect())
    }

    pub fn head(&self, n: usize) -> Table {
        Table::from_column_vec(self.columns.iter().map(|c| c.head(n)).collect())
    }

    pub fn tail(&self, n: usize) -> Table {
        Table::from_column_vec(self.columns.iter().map(|c| c.tail(n)).collect())
    }

    /// Checks that every column has the first column's length.
    pub fn validate(&self) -> Result<(), FrameError> {
        let expected = self.length();
        match self.columns.iter().find(|c| c.len() != expected) {
            Some(c) => Err(FrameError::UnevenColumns {
                column: c.name().to_string(),
                expected,
                actual: c.len(),
            }),
            None => Ok(()),
        }
    }

    /// Trims every column to the shortest column's length.
    pub fn truncate_to_shortest(&self) -> Table {
        let shortest = self.columns.iter().map(Column::len).min().unwrap_or(0);
        self.head(shortest)
    }
}

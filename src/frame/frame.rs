//! The in-memory table

use std::collections::BTreeSet;
use std::fmt;

use super::value::Value;

/// Error constructing a frame from external rows
#[derive(Debug)]
pub enum FrameError {
    /// A row's cell count does not match the column count
    ColumnCount {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ColumnCount { row, expected, got } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, got, expected
            ),
        }
    }
}

impl std::error::Error for FrameError {}

/// A named-column, row-oriented table
///
/// Rows are dense and 0-indexed; dropping or reordering rows produces a new
/// frame with a fresh dense sequence, so there is no separate index to
/// reset. All transforming methods take `&self` and return a new frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// An empty frame with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// A frame with the given columns and no rows
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a frame from externally supplied rows, checking cell counts
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, FrameError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(FrameError::ColumnCount {
                    row: i,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Internal constructor for pipeline stages that guarantee cell counts
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column index)
    pub fn value(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All values of one column, top to bottom
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |r| &r[col])
    }

    /// New frame keeping only rows the predicate accepts, in order
    pub fn filter_rows<F>(&self, mut keep: F) -> Frame
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// New frame with only the given columns, in the given order
    pub(crate) fn project(&self, indices: &[usize]) -> Frame {
        let columns = indices
            .iter()
            .map(|&i| self.columns[i].clone())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|r| indices.iter().map(|&i| r[i].clone()).collect())
            .collect();
        Frame { columns, rows }
    }

    /// New frame with duplicate rows removed, keeping first occurrences
    pub fn distinct(&self) -> Frame {
        let mut seen: BTreeSet<Vec<Value>> = BTreeSet::new();
        let rows = self
            .rows
            .iter()
            .filter(|r| seen.insert((*r).clone()))
            .cloned()
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// New frame with rows reordered by a stable sort on `cmp`
    pub fn sorted_by<F>(&self, mut cmp: F) -> Frame
    where
        F: FnMut(&[Value], &[Value]) -> std::cmp::Ordering,
    {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| cmp(a, b));
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Rename a column in place; no-op when `from` is absent
    pub(crate) fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(i) = self.column_index(from) {
            self.columns[i] = to.to_string();
        }
    }
}

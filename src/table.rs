//! In-memory transaction tables.
//!
//! A [`Table`] is an ordered list of rows over a fixed list of column names.
//! Each row is stamped with a [`RowId`] when the table is built; samplers only
//! ever hand back `RowId`s, so a sample can always be traced to its source row.

use std::collections::HashSet;
use std::fmt;

use crate::error::{DataError, Result, SampleError};

/// Stable identity of a row: its 0-based position in the table it was built
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(usize);

impl RowId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single cell.
///
/// Loaded files only produce `Text` and `Empty`; the source text is kept as-is
/// so writing a row back out reproduces it exactly. `Number` is for tables
/// built in code.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Empty,
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric reading of the cell, if it has one.
    ///
    /// Text counts as numeric when its trimmed content parses as a finite
    /// `f64`. NaN and infinities are never numeric.
    pub fn as_amount(&self) -> Option<f64> {
        let v = match self {
            Value::Empty => return None,
            Value::Number(n) => *n,
            Value::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Value::Empty
        } else {
            Value::Text(s.to_string())
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Value::Empty
        } else {
            Value::Text(s)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    cells: Vec<Value>,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    pub fn get(&self, column: usize) -> Option<&Value> {
        self.cells.get(column)
    }
}

/// An immutable table of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, assigning `RowId`s in input order.
    ///
    /// Column names must be non-empty and unique, and every row must have one
    /// cell per column.
    pub fn new<I, R>(columns: Vec<String>, rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: Into<Value>,
    {
        let mut seen = HashSet::with_capacity(columns.len());
        for (index, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DataError::EmptyColumnName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(DataError::DuplicateColumn(name.clone()));
            }
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, cells)| {
                let cells: Vec<Value> = cells.into_iter().map(Into::into).collect();
                if cells.len() != columns.len() {
                    return Err(DataError::RaggedRow {
                        row: i,
                        found: cells.len(),
                        expected: columns.len(),
                    });
                }
                Ok(Row {
                    id: RowId(i),
                    cells,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { columns, rows })
    }

    /// Rebuild a table from rows that already carry their ids.
    pub(crate) fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look a row up by identity.
    ///
    /// Ids are positions for tables built with [`Table::new`]; a materialised
    /// sample keeps its source ids, so fall back to a scan.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        match self.rows.get(id.0) {
            Some(row) if row.id == id => Some(row),
            _ => self.rows.iter().find(|r| r.id == id),
        }
    }

    /// Resolve `name` into a numeric accessor.
    ///
    /// This is the only place column names are looked up; samplers work on
    /// the returned amounts.
    pub fn amount_column(&self, name: &str) -> Result<AmountColumn<'_>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| SampleError::missing_column(name))?;

        let amounts = self
            .rows
            .iter()
            .map(|row| {
                let cell = &row.cells[index];
                cell.as_amount()
                    .ok_or_else(|| SampleError::non_numeric(name, row.id, &cell.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AmountColumn {
            table: self,
            name: name.to_string(),
            index,
            amounts,
        })
    }
}

/// A column validated as numeric, with one amount per row in table order.
#[derive(Debug, Clone)]
pub struct AmountColumn<'t> {
    table: &'t Table,
    name: String,
    index: usize,
    amounts: Vec<f64>,
}

impl<'t> AmountColumn<'t> {
    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// `(row id, amount)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, f64)> + '_ {
        self.table
            .rows
            .iter()
            .zip(self.amounts.iter())
            .map(|(row, &a)| (row.id, a))
    }

    pub fn get(&self, id: RowId) -> Option<f64> {
        match self.table.rows.get(id.0) {
            Some(row) if row.id == id => Some(self.amounts[id.0]),
            _ => self.iter().find(|(r, _)| *r == id).map(|(_, a)| a),
        }
    }
}

//! Sampler output.

use crate::table::{Row, RowId, Table};

/// Rows picked from a table, by identity.
///
/// Borrows the source table; ids are distinct and refer to rows of that table.
/// Order is whatever the producing sampler documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<'t> {
    table: &'t Table,
    ids: Vec<RowId>,
}

impl<'t> Sample<'t> {
    /// Callers must pass distinct ids taken from `table`.
    pub(crate) fn new(table: &'t Table, ids: Vec<RowId>) -> Self {
        debug_assert!(ids.iter().all(|id| table.row(*id).is_some()));
        Self { table, ids }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    /// Sampled rows, in sample order.
    pub fn rows(&self) -> impl Iterator<Item = &'t Row> + '_ {
        let table = self.table;
        self.ids.iter().filter_map(move |id| table.row(*id))
    }

    /// Copy the sampled rows into a standalone table.
    ///
    /// Rows keep their original `RowId`s.
    pub fn to_table(&self) -> Table {
        Table::from_rows(
            self.table.columns().to_vec(),
            self.rows().cloned().collect(),
        )
    }
}

//! The datastore seam used by the booking workflow.
//!
//! The workflow only needs three primitives: run a statement, fetch rows as
//! text, and count matching rows. [`Gateway`] captures exactly that, so the
//! same workflow code runs against a plain [`Connection`] or, through deref,
//! an open [`rusqlite::Transaction`].

use rusqlite::{types::ValueRef, Connection, ToSql};

use crate::error::{DatastoreResultExt, Result};

/// One result row, every column rendered as text.
pub type Record = Vec<String>;

/// SQL-executing collaborator consumed by [`crate::workflow`].
pub trait Gateway {
    /// Runs a statement without a result set and returns the affected row count.
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize>;

    /// Runs a query and returns every row.
    fn query(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Record>>;

    /// Runs a query and returns the number of rows it produced.
    fn query_count(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize>;

    /// Returns true if the query produced at least one row.
    fn exists(&self, sql: &str, params: &[&dyn ToSql]) -> Result<bool> {
        Ok(self.query_count(sql, params)? > 0)
    }
}

impl Gateway for Connection {
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        Connection::execute(self, sql, params).db_context("Failed to execute statement")
    }

    fn query(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Record>> {
        let mut stmt = self
            .prepare_cached(sql)
            .db_context("Failed to prepare query")?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params, |row| {
                (0..column_count)
                    .map(|idx| row.get_ref(idx).map(value_to_text))
                    .collect::<rusqlite::Result<Record>>()
            })
            .db_context("Failed to run query")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read query results")
    }

    fn query_count(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        let mut stmt = self
            .prepare_cached(sql)
            .db_context("Failed to prepare query")?;
        let mut rows = stmt.query(params).db_context("Failed to run query")?;

        let mut count = 0;
        while rows.next().db_context("Failed to read query results")?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}

fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

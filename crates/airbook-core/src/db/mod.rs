//! SQLite storage for the booking schema.
//!
//! This module owns the SQLite connection, applies the embedded schema, runs
//! the booking workflow inside write-locking transactions, and answers the
//! reporting queries.

use std::{path::Path, time::Duration};

use jiff::civil::Date;
use rusqlite::{types::Type, Connection};

use crate::error::{DatastoreResultExt, Result};

pub mod report_queries;
pub mod schema;
pub mod transactions;

/// How long a connection waits for another session's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads an ISO `YYYY-MM-DD` date column.
pub(crate) fn date_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

//! Async facade over the booking database.
//!
//! [`Agency`] is what presentation layers talk to. It resolves the database
//! location once (see [`AgencyBuilder`]) and then, for every call, opens a
//! connection and runs the blocking SQLite work on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Agency      │    │    Database     │    │    Workflow     │
//! │ (booking_ops,   │───▶│ (transactions,  │───▶│  (validation,   │
//! │  report_ops)    │    │  report_queries)│    │   allocation)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   async, per call       one SQLite conn       generic over Gateway
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use airbook_core::{params::UpsertAirline, AgencyBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agency = AgencyBuilder::new()
//!     .with_database_path(Some("airbook.db"))
//!     .build()
//!     .await?;
//!
//! let outcome = agency
//!     .upsert_airline(&UpsertAirline {
//!         name: "Delta".to_string(),
//!         founded: 1925,
//!         country: "USA".to_string(),
//!         hub: "ATL".to_string(),
//!     })
//!     .await?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{BookingError, Result},
};

pub mod booking_ops;
pub mod builder;
pub mod report_ops;

#[cfg(test)]
mod tests;

pub use builder::AgencyBuilder;

/// Main interface for booking operations and reports.
#[derive(Debug, Clone)]
pub struct Agency {
    pub(crate) db_path: PathBuf,
}

impl Agency {
    /// Creates an agency over the database at `db_path`.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file this agency operates on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Opens the database on the blocking pool and runs `operation` on it.
    async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| BookingError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

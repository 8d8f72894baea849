//! Builder for creating and configuring Agency instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Agency;
use crate::{
    db::Database,
    error::{BookingError, Result},
};

/// Builder for creating and configuring Agency instances.
#[derive(Debug, Clone)]
pub struct AgencyBuilder {
    database_path: Option<PathBuf>,
}

impl AgencyBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/airbook/airbook.db` or `~/.local/share/airbook/airbook.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured agency, creating the database and schema if
    /// they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::FileSystem` if the database directory cannot be created
    /// Returns `BookingError::Datastore` if database initialization fails
    pub async fn build(self) -> Result<Agency> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BookingError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(|e| BookingError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        debug!("Using database at {}", db_path.display());
        Ok(Agency::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("airbook")
            .place_data_file("airbook.db")
            .map_err(|e| BookingError::XdgDirectory(e.to_string()))
    }
}

impl Default for AgencyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

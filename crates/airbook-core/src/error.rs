//! Error types for the booking library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all booking operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Malformed or out-of-range field value
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// A passenger with this passport number is already registered
    #[error("Passport number {pass_num} is already registered")]
    DuplicatePassport { pass_num: String },
    /// No passenger carries this passport number
    #[error("No passenger with passport number {pass_num}")]
    PassengerNotFound { pass_num: String },
    /// No flight serves the requested route
    #[error("No flight from {origin} to {destination}")]
    RouteNotFound { origin: String, destination: String },
    /// No flight carries this flight number
    #[error("Flight {flight_num} not found")]
    FlightNotFound { flight_num: String },
    /// The passenger never booked the flight or has already rated it
    #[error("Passenger {pass_num} has not booked flight {flight_num} or has already rated it")]
    NotBookedOrAlreadyRated { pass_num: String, flight_num: String },
    /// Every candidate drawn within the retry budget collided
    #[error("Could not generate an unused value after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    /// Failure surfaced by the datastore
    #[error("Database error: {message}")]
    Datastore {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating datastore errors with optional context.
pub struct DatastoreErrorBuilder {
    message: String,
}

impl DatastoreErrorBuilder {
    /// Create a new datastore error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BookingError {
        BookingError::Datastore {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BookingError {
        BookingError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BookingError {
    /// Creates a builder for datastore errors.
    pub fn datastore(message: impl Into<String>) -> DatastoreErrorBuilder {
        DatastoreErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for errors raised before the datastore was touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, BookingError::Validation { .. })
    }
}

/// Specialized extension trait for datastore-related Results.
pub trait DatastoreResultExt<T> {
    /// Map datastore errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatastoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BookingError::datastore(message).with_source(e))
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

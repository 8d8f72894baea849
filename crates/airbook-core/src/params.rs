//! Request structures for AirBook operations.
//!
//! Each user action gets its own request struct. Presentation layers (the
//! CLI today) collect field values into these structs and hand them to the
//! [`crate::Agency`] or directly to [`crate::workflow`]; no session state is
//! shared between operations.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Requests  │    │    Workflow     │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (validation +  │
//! │                 │    │                 │    │   allocation)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Requests carry raw user input. Validation happens in the workflow so every
//! front end gets the same rules.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Default number of rows returned by ranking queries.
pub const DEFAULT_TOP_K: usize = 10;

/// Parameters for registering a new passenger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPassenger {
    /// Ten character passport number
    pub pass_num: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub country: String,
}

/// Parameters for booking a seat on the flight serving a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookFlight {
    /// Passport number of a registered passenger
    pub pass_num: String,
    pub origin: String,
    pub destination: String,
    pub departure: Date,
}

/// Parameters for rating a booked flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitRating {
    pub pass_num: String,
    pub flight_num: String,
    /// Score from 0 to 5
    pub score: u8,
    /// Optional free-text comment; empty when not given
    #[serde(default)]
    pub comment: String,
}

/// Parameters for inserting an airline or updating it by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertAirline {
    pub name: String,
    pub founded: u16,
    pub country: String,
    pub hub: String,
}

/// An origin/destination pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

/// Parameters for ranking queries that take only a row limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopK {
    /// Maximum number of rows to return
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for TopK {
    fn default() -> Self {
        Self { k: DEFAULT_TOP_K }
    }
}

/// Parameters for ranking the flights on a route by duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTopK {
    #[serde(flatten)]
    pub route: Route,
    #[serde(default = "default_k")]
    pub k: usize,
}

/// Parameters for looking up seat availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatQuery {
    pub flight_num: String,
    pub departure: Date,
}

fn default_k() -> usize {
    DEFAULT_TOP_K
}

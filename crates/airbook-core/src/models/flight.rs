//! Flight model definition.

use serde::{Deserialize, Serialize};

/// A scheduled flight. Flights are read-only to this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flight {
    /// Operating airline (`airId`)
    pub airline_id: u64,

    pub flight_num: String,

    pub origin: String,

    pub destination: String,

    /// Aircraft type
    pub plane: String,

    /// Seat capacity
    pub seats: u32,

    /// Flight time in hours
    pub duration: u32,
}

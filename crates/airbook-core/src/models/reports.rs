//! Row types returned by the reporting queries.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A destination and the number of flights serving it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationCount {
    pub destination: String,
    pub flights: u64,
}

/// A rated flight with its airline and average score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatedRoute {
    pub airline: String,
    pub flight_num: String,
    pub origin: String,
    pub destination: String,
    pub plane: String,
    pub average_score: f64,
}

/// A flight on a route together with its airline, for duration ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimedFlight {
    pub airline: String,
    pub flight_num: String,
    pub origin: String,
    pub destination: String,
    pub plane: String,
    pub duration: u32,
}

/// Seat usage of one flight on one departure date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatAvailability {
    pub flight_num: String,
    pub origin: String,
    pub destination: String,
    pub departure: Date,

    /// Bookings already made for this date
    pub booked: u32,

    /// Seat capacity of the flight
    pub seats: u32,
}

impl SeatAvailability {
    /// Seats still free; zero when the flight is overbooked.
    pub fn available(&self) -> u32 {
        self.seats.saturating_sub(self.booked)
    }
}

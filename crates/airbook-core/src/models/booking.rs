//! Booking model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A seat booked by a passenger on a flight for one departure date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    /// Ten letter confirmation code (`bookRef`)
    pub reference: String,

    pub departure: Date,

    pub flight_num: String,

    /// Booking passenger (`pID`)
    pub passenger_id: u64,
}

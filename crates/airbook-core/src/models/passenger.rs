//! Passenger model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A registered passenger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    /// Allocated key (`pID`)
    pub id: u64,

    /// Ten character passport number, unique across passengers
    pub pass_num: String,

    /// Capitalised "First Last" name
    pub full_name: String,

    pub birth_date: Date,

    pub country: String,
}

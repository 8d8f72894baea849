//! Rating model definition.

use serde::{Deserialize, Serialize};

/// A passenger's score for a flight they booked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rating {
    /// Allocated key (`rID`)
    pub id: u64,

    pub passenger_id: u64,

    pub flight_num: String,

    /// Score from 0 to 5
    pub score: u8,

    #[serde(default)]
    pub comment: String,
}

//! Airline model definition and upsert outcome.

use serde::{Deserialize, Serialize};

/// An airline operating flights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airline {
    /// Allocated key (`airId`)
    pub id: u64,

    /// Airline name, unique across airlines
    pub name: String,

    /// Year the airline was founded
    pub founded: u16,

    /// Country the airline operates from
    pub country: String,

    /// Hub airport
    pub hub: String,
}

/// Result of inserting or updating an airline by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "airline", rename_all = "lowercase")]
pub enum UpsertOutcome {
    /// No airline had this name; a new row was inserted with a fresh key
    Inserted(Airline),

    /// The existing row was updated in place
    Updated(Airline),
}

impl UpsertOutcome {
    /// The airline row as stored after the operation.
    pub fn airline(&self) -> &Airline {
        match self {
            UpsertOutcome::Inserted(airline) | UpsertOutcome::Updated(airline) => airline,
        }
    }

    pub fn was_inserted(&self) -> bool {
        matches!(self, UpsertOutcome::Inserted(_))
    }
}

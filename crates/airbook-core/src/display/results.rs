//! Result wrapper types for displaying created records.

use std::fmt;

use crate::models::{Booking, Passenger, Rating};

/// Wrapper type for displaying the result of create operations.
///
/// Prints a one-line confirmation naming the new key, then the full record.
///
/// # Examples
///
/// ```rust
/// use airbook_core::{display::CreateResult, models::Booking};
/// use jiff::civil::date;
///
/// let booking = Booking {
///     reference: "QWERTYUIOP".to_string(),
///     departure: date(2024, 6, 1),
///     flight_num: "DL100".to_string(),
///     passenger_id: 0,
/// };
/// let output = format!("{}", CreateResult::new(booking));
/// assert!(output.contains("Created booking with reference: QWERTYUIOP"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Passenger> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created passenger with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Booking> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created booking with reference: {}", self.resource.reference)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Rating> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created rating with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

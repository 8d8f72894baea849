//! Mutating booking operations for the Agency.
//!
//! Requests are validated on the caller's task; only valid requests are sent
//! to the blocking pool.

use super::Agency;
use crate::{
    error::Result,
    models::{Booking, Passenger, Rating, UpsertOutcome},
    params::{AddPassenger, BookFlight, SubmitRating, UpsertAirline},
    workflow,
};

impl Agency {
    /// Registers a new passenger and returns the stored row.
    ///
    /// # Errors
    ///
    /// - `BookingError::Validation` for malformed fields
    /// - `BookingError::DuplicatePassport` if the passport number is taken
    pub async fn add_passenger(&self, params: &AddPassenger) -> Result<Passenger> {
        let valid = workflow::validate_passenger(params)?;
        self.with_database(move |db| db.store_passenger(&valid)).await
    }

    /// Books the flight serving the requested route.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use airbook_core::{params::BookFlight, AgencyBuilder};
    /// # use jiff::civil::date;
    /// # async {
    /// let agency = AgencyBuilder::new().build().await?;
    /// let booking = agency
    ///     .book_flight(&BookFlight {
    ///         pass_num: "AB12345678".to_string(),
    ///         origin: "ATL".to_string(),
    ///         destination: "JFK".to_string(),
    ///         departure: date(2024, 6, 1),
    ///     })
    ///     .await?;
    /// println!("Confirmation code: {}", booking.reference);
    /// # Result::<(), airbook_core::BookingError>::Ok(())
    /// # };
    /// ```
    pub async fn book_flight(&self, params: &BookFlight) -> Result<Booking> {
        let valid = workflow::validate_booking(params)?;
        self.with_database(move |db| db.store_booking(&valid)).await
    }

    /// Rates a flight the passenger booked.
    pub async fn submit_rating(&self, params: &SubmitRating) -> Result<Rating> {
        let valid = workflow::validate_rating(params)?;
        self.with_database(move |db| db.store_rating(&valid)).await
    }

    /// Inserts an airline, or updates the existing one with the same name.
    pub async fn upsert_airline(&self, params: &UpsertAirline) -> Result<UpsertOutcome> {
        let valid = workflow::validate_airline(params)?;
        self.with_database(move |db| db.store_airline(&valid)).await
    }
}

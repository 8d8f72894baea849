//! Transactional wrappers around the booking workflow.
//!
//! Requests are validated first, without touching the database, so malformed
//! input fails fast even while another session holds the write lock. The
//! store step then runs in a `BEGIN IMMEDIATE` transaction. SQLite grants the
//! write lock before the first read, so a concurrent session cannot observe
//! the same free key or booking reference between our read and our insert.
//! A failed step drops the transaction uncommitted, which rolls it back.

use rusqlite::{Connection, TransactionBehavior};

use crate::{
    error::{DatastoreResultExt, Result},
    models::{Booking, Passenger, Rating, UpsertOutcome},
    params::{AddPassenger, BookFlight, SubmitRating, UpsertAirline},
    workflow::{self, ValidAirline, ValidBooking, ValidPassenger, ValidRating},
};

impl super::Database {
    /// Registers a passenger under the next free `pID`.
    pub fn add_passenger(&mut self, request: &AddPassenger) -> Result<Passenger> {
        let valid = workflow::validate_passenger(request)?;
        self.store_passenger(&valid)
    }

    /// Books the flight serving a route under a fresh booking reference.
    pub fn book_flight(&mut self, request: &BookFlight) -> Result<Booking> {
        let valid = workflow::validate_booking(request)?;
        self.store_booking(&valid)
    }

    /// Records a rating for a booked, not yet rated flight.
    pub fn submit_rating(&mut self, request: &SubmitRating) -> Result<Rating> {
        let valid = workflow::validate_rating(request)?;
        self.store_rating(&valid)
    }

    /// Inserts an airline or updates the one with the same name.
    pub fn upsert_airline(&mut self, request: &UpsertAirline) -> Result<UpsertOutcome> {
        let valid = workflow::validate_airline(request)?;
        self.store_airline(&valid)
    }

    /// Stores a passenger validated by [`workflow::validate_passenger`].
    pub fn store_passenger(&mut self, passenger: &ValidPassenger) -> Result<Passenger> {
        self.write(|gw| workflow::store_passenger(gw, passenger))
    }

    /// Stores a validated booking.
    pub fn store_booking(&mut self, booking: &ValidBooking) -> Result<Booking> {
        self.write(|gw| workflow::store_booking(gw, booking))
    }

    /// Stores a validated rating.
    pub fn store_rating(&mut self, rating: &ValidRating) -> Result<Rating> {
        self.write(|gw| workflow::store_rating(gw, rating))
    }

    /// Stores a validated airline.
    pub fn store_airline(&mut self, airline: &ValidAirline) -> Result<UpsertOutcome> {
        self.write(|gw| workflow::store_airline(gw, airline))
    }

    fn write<T, F>(&mut self, operation: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let output = operation(&tx)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(output)
    }
}

//! Data models for passengers, airlines, flights, bookings and ratings.
//!
//! Rows mirror the tables of the booking schema. Display implementations for
//! these models live in [`crate::display::models`] so presentation stays
//! separate from the data itself.
//!
//! # Examples
//!
//! ```rust
//! use airbook_core::models::Passenger;
//! use jiff::civil::date;
//!
//! let passenger = Passenger {
//!     id: 0,
//!     pass_num: "AB12345678".to_string(),
//!     full_name: "Jane Doe".to_string(),
//!     birth_date: date(1990, 4, 12),
//!     country: "Canada".to_string(),
//! };
//! println!("{}", passenger);
//! ```

pub mod airline;
pub mod booking;
pub mod flight;
pub mod passenger;
pub mod rating;
pub mod reports;

pub use airline::{Airline, UpsertOutcome};
pub use booking::Booking;
pub use flight::Flight;
pub use passenger::Passenger;
pub use rating::Rating;
pub use reports::{DestinationCount, RatedRoute, SeatAvailability, TimedFlight};

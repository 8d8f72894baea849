//! Core library for the AirBook booking tool.
//!
//! This crate manages an airline-booking schema (passengers, airlines,
//! flights, bookings and ratings) stored in SQLite. Its centre is the
//! booking workflow: registering passengers, booking flights, rating them and
//! maintaining airlines, each with race-free allocation of keys and booking
//! references.
//!
//! # Layers
//!
//! - [`allocator`] and [`reference`]: pure key and booking-reference
//!   generation
//! - [`validation`]: field rules checked before any datastore access
//! - [`gateway`]: the [`Gateway`] trait the workflow runs against
//! - [`workflow`]: the four mutating operations, generic over the gateway
//! - [`db`]: the SQLite [`Database`], transactions and report queries
//! - [`agency`]: the async [`Agency`] facade used by front ends
//! - [`models`], [`params`], [`display`]: rows, requests and markdown output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use airbook_core::{params::AddPassenger, AgencyBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agency = AgencyBuilder::new()
//!     .with_database_path(Some("airbook.db"))
//!     .build()
//!     .await?;
//!
//! let passenger = agency
//!     .add_passenger(&AddPassenger {
//!         pass_num: "AB12345678".to_string(),
//!         first_name: "jane".to_string(),
//!         last_name: "doe".to_string(),
//!         birth_date: date(1990, 4, 12),
//!         country: "Canada".to_string(),
//!     })
//!     .await?;
//! println!("Registered {} as passenger {}", passenger.full_name, passenger.id);
//! # Ok(())
//! # }
//! ```

pub mod agency;
pub mod allocator;
pub mod db;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod params;
pub mod reference;
pub mod validation;
pub mod workflow;

// Re-export commonly used types
pub use agency::{Agency, AgencyBuilder};
pub use db::Database;
pub use display::{
    Airports, CreateResult, Departures, Destinations, RatedRoutes, RouteFlights, TimedFlights,
};
pub use error::{BookingError, Result};
pub use gateway::{Gateway, Record};
pub use models::{
    Airline, Booking, DestinationCount, Flight, Passenger, RatedRoute, Rating, SeatAvailability,
    TimedFlight, UpsertOutcome,
};
pub use params::{
    AddPassenger, BookFlight, Route, RouteTopK, SeatQuery, SubmitRating, TopK, UpsertAirline,
};

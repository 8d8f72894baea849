//! Display formatting for models, reports and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! report collections and operation results are wrapped in newtypes so the
//! same rows can be formatted with the right heading and empty-state text.
//! Everything renders as markdown for the terminal renderer in the CLI.
//!
//! - [`collections`]: report wrappers (RouteFlights, Destinations, Airports, ...)
//! - [`results`]: creation results (CreateResult)
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use airbook_core::{display::Destinations, models::DestinationCount};
//!
//! let ranking = Destinations(vec![DestinationCount {
//!     destination: "JFK".to_string(),
//!     flights: 3,
//! }]);
//! let output = format!("{}", ranking);
//! assert!(output.contains("1. JFK (3 flights)"));
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::{
    Airports, Departures, Destinations, RatedRoutes, RouteFlights, TimedFlights,
};
pub use results::CreateResult;

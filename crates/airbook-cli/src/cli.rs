//! Command definitions and handlers for the AirBook CLI
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so the core request types stay free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Agency
//! ```
//!
//! [`Cli`] dispatches each command to the [`Agency`] and renders the
//! markdown-formatted result through the [`TerminalRenderer`].

use airbook_core::{
    params::{
        AddPassenger, BookFlight, Route, RouteTopK, SeatQuery, SubmitRating, TopK, UpsertAirline,
        DEFAULT_TOP_K,
    },
    Agency, CreateResult,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

/// Register a passenger
#[derive(Args)]
pub struct AddPassengerArgs {
    /// Passport number, exactly ten letters or digits
    pub pass_num: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Date of birth as YYYY-MM-DD
    #[arg(long, short = 'b', help = "Date of birth as YYYY-MM-DD")]
    pub birth_date: Date,
    /// Country of citizenship
    #[arg(long, short)]
    pub country: String,
}

impl From<AddPassengerArgs> for AddPassenger {
    fn from(val: AddPassengerArgs) -> Self {
        AddPassenger {
            pass_num: val.pass_num,
            first_name: val.first_name,
            last_name: val.last_name,
            birth_date: val.birth_date,
            country: val.country,
        }
    }
}

/// Book the flight serving a route
///
/// When several flights serve the route, the one with the lowest flight
/// number is booked.
#[derive(Args)]
pub struct BookArgs {
    /// Passport number of a registered passenger
    pub pass_num: String,
    /// Origin airport
    pub origin: String,
    /// Destination airport
    pub destination: String,
    /// Departure date as YYYY-MM-DD
    #[arg(long, short, help = "Departure date as YYYY-MM-DD")]
    pub departure: Date,
}

impl From<BookArgs> for BookFlight {
    fn from(val: BookArgs) -> Self {
        BookFlight {
            pass_num: val.pass_num,
            origin: val.origin,
            destination: val.destination,
            departure: val.departure,
        }
    }
}

/// Rate a booked flight
///
/// A passenger may rate each flight they booked exactly once.
#[derive(Args)]
pub struct RateArgs {
    /// Passport number of the rating passenger
    pub pass_num: String,
    /// Flight number being rated
    pub flight_num: String,
    /// Score from 0 to 5
    pub score: u8,
    /// Optional free-text comment
    #[arg(long, short, default_value = "")]
    pub comment: String,
}

impl From<RateArgs> for SubmitRating {
    fn from(val: RateArgs) -> Self {
        SubmitRating {
            pass_num: val.pass_num,
            flight_num: val.flight_num,
            score: val.score,
            comment: val.comment,
        }
    }
}

/// Insert an airline, or update the existing airline with the same name
#[derive(Args)]
pub struct UpsertAirlineArgs {
    /// Airline name
    pub name: String,
    /// Year the airline was founded (1900 or later)
    #[arg(long, short)]
    pub founded: u16,
    /// Home country
    #[arg(long, short)]
    pub country: String,
    /// Hub airport
    #[arg(long)]
    pub hub: String,
}

impl From<UpsertAirlineArgs> for UpsertAirline {
    fn from(val: UpsertAirlineArgs) -> Self {
        UpsertAirline {
            name: val.name,
            founded: val.founded,
            country: val.country,
            hub: val.hub,
        }
    }
}

/// A route between two airports
#[derive(Args)]
pub struct RouteArgs {
    /// Origin airport
    pub origin: String,
    /// Destination airport
    pub destination: String,
}

impl From<RouteArgs> for Route {
    fn from(val: RouteArgs) -> Self {
        Route {
            origin: val.origin,
            destination: val.destination,
        }
    }
}

/// List the flights on a route by duration, longest first
#[derive(Args)]
pub struct ByDurationArgs {
    #[command(flatten)]
    pub route: RouteArgs,
    /// Maximum number of flights to show
    #[arg(short, default_value_t = DEFAULT_TOP_K)]
    pub k: usize,
}

impl From<ByDurationArgs> for RouteTopK {
    fn from(val: ByDurationArgs) -> Self {
        RouteTopK {
            route: val.route.into(),
            k: val.k,
        }
    }
}

/// Show seat availability on a flight
#[derive(Args)]
pub struct SeatsArgs {
    /// Flight number
    pub flight_num: String,
    /// Departure date as YYYY-MM-DD; lists booked departures when omitted
    pub departure: Option<Date>,
}

/// List the airports reachable from an origin
#[derive(Args)]
pub struct DestinationsArgs {
    /// Origin airport
    pub origin: String,
}

/// Number of entries in a ranking
#[derive(Args)]
pub struct TopArgs {
    /// Maximum number of entries to show
    #[arg(short, default_value_t = DEFAULT_TOP_K)]
    pub k: usize,
}

impl From<TopArgs> for TopK {
    fn from(val: TopArgs) -> Self {
        TopK { k: val.k }
    }
}

/// Passenger management commands
#[derive(Subcommand)]
pub enum PassengerCommands {
    /// Register a new passenger
    #[command(alias = "a")]
    Add(AddPassengerArgs),
}

/// Airline management commands
#[derive(Subcommand)]
pub enum AirlineCommands {
    /// Insert or update an airline by name
    #[command(alias = "u")]
    Upsert(UpsertAirlineArgs),
}

/// Flight queries
#[derive(Subcommand)]
pub enum FlightCommands {
    /// List the flights from one airport to another
    #[command(aliases = ["l", "ls"])]
    List(RouteArgs),
    /// List the flights on a route, longest first
    #[command(alias = "d")]
    ByDuration(ByDurationArgs),
    /// Show booked and free seats for a departure
    #[command(alias = "s")]
    Seats(SeatsArgs),
    /// List the airports flights depart from
    #[command(alias = "o")]
    Origins,
    /// List the airports reachable from an origin
    #[command(alias = "to")]
    Destinations(DestinationsArgs),
}

/// Rankings
#[derive(Subcommand)]
pub enum TopCommands {
    /// Destinations served by the most flights
    #[command(alias = "d")]
    Destinations(TopArgs),
    /// Flights with the highest average rating
    #[command(alias = "r")]
    Routes(TopArgs),
}

/// Dispatches parsed commands to the agency and renders the results.
pub struct Cli {
    agency: Agency,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(agency: Agency, renderer: TerminalRenderer) -> Self {
        Self { agency, renderer }
    }

    pub async fn handle_passenger_command(&self, command: PassengerCommands) -> Result<()> {
        match command {
            PassengerCommands::Add(args) => {
                let passenger = self
                    .agency
                    .add_passenger(&args.into())
                    .await
                    .context("Failed to add passenger")?;
                self.render(CreateResult::new(passenger))
            }
        }
    }

    pub async fn handle_book(&self, args: BookArgs) -> Result<()> {
        let booking = self
            .agency
            .book_flight(&args.into())
            .await
            .context("Failed to book flight")?;
        self.render(CreateResult::new(booking))
    }

    pub async fn handle_rate(&self, args: RateArgs) -> Result<()> {
        let rating = self
            .agency
            .submit_rating(&args.into())
            .await
            .context("Failed to submit rating")?;
        self.render(CreateResult::new(rating))
    }

    pub async fn handle_airline_command(&self, command: AirlineCommands) -> Result<()> {
        match command {
            AirlineCommands::Upsert(args) => {
                let outcome = self
                    .agency
                    .upsert_airline(&args.into())
                    .await
                    .context("Failed to upsert airline")?;
                self.render(outcome)
            }
        }
    }

    pub async fn handle_flight_command(&self, command: FlightCommands) -> Result<()> {
        match command {
            FlightCommands::List(args) => {
                let flights = self
                    .agency
                    .list_flights(&args.into())
                    .await
                    .context("Failed to list flights")?;
                self.render(flights)
            }
            FlightCommands::ByDuration(args) => {
                let flights = self
                    .agency
                    .flights_by_duration(&args.into())
                    .await
                    .context("Failed to rank flights by duration")?;
                self.render(flights)
            }
            FlightCommands::Seats(SeatsArgs {
                flight_num,
                departure: Some(departure),
            }) => {
                let seats = self
                    .agency
                    .seat_availability(&SeatQuery {
                        flight_num,
                        departure,
                    })
                    .await
                    .context("Failed to query seat availability")?;
                self.render(seats)
            }
            FlightCommands::Seats(SeatsArgs {
                flight_num,
                departure: None,
            }) => {
                debug!("No departure given for {flight_num}, listing booked departures");
                let departures = self
                    .agency
                    .booked_departures(&flight_num)
                    .await
                    .context("Failed to list booked departures")?;
                self.render(departures)
            }
            FlightCommands::Origins => {
                let origins = self
                    .agency
                    .origins()
                    .await
                    .context("Failed to list origins")?;
                self.render(origins)
            }
            FlightCommands::Destinations(DestinationsArgs { origin }) => {
                let destinations = self
                    .agency
                    .destinations_from(&origin)
                    .await
                    .context("Failed to list destinations")?;
                self.render(destinations)
            }
        }
    }

    pub async fn handle_top_command(&self, command: TopCommands) -> Result<()> {
        match command {
            TopCommands::Destinations(args) => self.top_destinations(&args.into()).await,
            TopCommands::Routes(args) => {
                let routes = self
                    .agency
                    .top_rated_routes(&args.into())
                    .await
                    .context("Failed to rank routes")?;
                self.render(routes)
            }
        }
    }

    /// Shows the most served destinations; also the default command.
    pub async fn top_destinations(&self, params: &TopK) -> Result<()> {
        let destinations = self
            .agency
            .top_destinations(params)
            .await
            .context("Failed to rank destinations")?;
        self.render(destinations)
    }

    fn render(&self, output: impl std::fmt::Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_rate_args_into_params() {
        let params: SubmitRating = RateArgs {
            pass_num: "AB12345678".to_string(),
            flight_num: "DL100".to_string(),
            score: 4,
            comment: String::new(),
        }
        .into();
        assert_eq!(params.score, 4);
        assert_eq!(params.comment, "");
    }

    #[test]
    fn test_by_duration_args_into_params() {
        let params: RouteTopK = ByDurationArgs {
            route: RouteArgs {
                origin: "ATL".to_string(),
                destination: "JFK".to_string(),
            },
            k: 3,
        }
        .into();
        assert_eq!(params.route.origin, "ATL");
        assert_eq!(params.k, 3);
    }

    #[test]
    fn test_book_args_into_params() {
        let params: BookFlight = BookArgs {
            pass_num: "AB12345678".to_string(),
            origin: "ATL".to_string(),
            destination: "JFK".to_string(),
            departure: date(2024, 6, 1),
        }
        .into();
        assert_eq!(params.departure, date(2024, 6, 1));
    }
}

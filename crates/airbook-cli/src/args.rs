use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AirlineCommands, BookArgs, FlightCommands, PassengerCommands, RateArgs, TopCommands,
};

/// Command-line front end for the AirBook booking database
///
/// AirBook registers passengers, books them onto the flight serving a route,
/// collects their ratings and maintains airlines. Flights themselves are
/// loaded into the database externally; the reporting commands rank
/// destinations, routes and flight durations and report seat availability.
#[derive(Parser)]
#[command(version, about, name = "airbook")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/airbook/airbook.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the AirBook CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage passengers
    #[command(alias = "p")]
    Passenger {
        #[command(subcommand)]
        command: PassengerCommands,
    },
    /// Book the flight serving a route
    #[command(alias = "b")]
    Book(BookArgs),
    /// Rate a booked flight
    #[command(alias = "r")]
    Rate(RateArgs),
    /// Manage airlines
    #[command(alias = "a")]
    Airline {
        #[command(subcommand)]
        command: AirlineCommands,
    },
    /// Query flights
    #[command(alias = "f")]
    Flight {
        #[command(subcommand)]
        command: FlightCommands,
    },
    /// Rank destinations and routes
    #[command(alias = "t")]
    Top {
        #[command(subcommand)]
        command: TopCommands,
    },
}

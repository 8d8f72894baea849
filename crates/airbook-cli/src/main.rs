//! AirBook CLI Application
//!
//! Command-line interface for the AirBook booking database.

mod args;
mod cli;
mod renderer;

use airbook_core::{params::TopK, AgencyBuilder};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let agency = AgencyBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize agency")?;

    info!("AirBook started with database {}", agency.database_path().display());

    let cli = Cli::new(agency, TerminalRenderer::new(!no_color));

    match command {
        Some(Passenger { command }) => cli.handle_passenger_command(command).await,
        Some(Book(args)) => cli.handle_book(args).await,
        Some(Rate(args)) => cli.handle_rate(args).await,
        Some(Airline { command }) => cli.handle_airline_command(command).await,
        Some(Flight { command }) => cli.handle_flight_command(command).await,
        Some(Top { command }) => cli.handle_top_command(command).await,
        None => cli.top_destinations(&TopK::default()).await,
    }
}

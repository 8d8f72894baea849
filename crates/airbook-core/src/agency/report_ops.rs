//! Reporting operations that return display wrappers for the Agency.

use super::Agency;
use crate::{
    display::{Airports, Departures, Destinations, RatedRoutes, RouteFlights, TimedFlights},
    error::Result,
    models::SeatAvailability,
    params::{Route, RouteTopK, SeatQuery, TopK},
    validation,
};

impl Agency {
    /// Lists the flights between two airports.
    pub async fn list_flights(&self, params: &Route) -> Result<RouteFlights> {
        let route = params.clone();
        let flights = self
            .with_database(move |db| db.list_flights(&route.origin, &route.destination))
            .await?;
        Ok(RouteFlights {
            route: params.clone(),
            flights,
        })
    }

    /// Ranks destinations by the number of flights serving them.
    pub async fn top_destinations(&self, params: &TopK) -> Result<Destinations> {
        let k = params.k;
        let destinations = self.with_database(move |db| db.top_destinations(k)).await?;
        Ok(Destinations(destinations))
    }

    /// Ranks rated flights by average score.
    pub async fn top_rated_routes(&self, params: &TopK) -> Result<RatedRoutes> {
        let k = params.k;
        let routes = self.with_database(move |db| db.top_rated_routes(k)).await?;
        Ok(RatedRoutes(routes))
    }

    /// Lists the flights on a route, longest first.
    pub async fn flights_by_duration(&self, params: &RouteTopK) -> Result<TimedFlights> {
        let request = params.clone();
        let flights = self
            .with_database(move |db| {
                db.flights_by_duration(&request.route.origin, &request.route.destination, request.k)
            })
            .await?;
        Ok(TimedFlights {
            route: params.route.clone(),
            flights,
        })
    }

    /// Reports booked and free seats on a flight for one departure date.
    pub async fn seat_availability(&self, params: &SeatQuery) -> Result<SeatAvailability> {
        let flight_num = params.flight_num.clone();
        let departure = params.departure;
        self.with_database(move |db| db.seat_availability(&flight_num, departure))
            .await
    }

    /// Lists the departure dates with bookings on a flight.
    pub async fn booked_departures(&self, flight_num: &str) -> Result<Departures> {
        let flight_num = validation::flight_num(flight_num)?;
        let query = flight_num.clone();
        let dates = self
            .with_database(move |db| db.booked_departures(&query))
            .await?;
        Ok(Departures { flight_num, dates })
    }

    /// Lists the airports flights depart from.
    pub async fn origins(&self) -> Result<Airports> {
        let airports = self.with_database(|db| db.origins()).await?;
        Ok(Airports {
            origin: None,
            airports,
        })
    }

    /// Lists the airports reachable directly from `origin`.
    pub async fn destinations_from(&self, origin: &str) -> Result<Airports> {
        let origin = validation::required("origin", origin)?.to_string();
        let query = origin.clone();
        let airports = self
            .with_database(move |db| db.destinations_from(&query))
            .await?;
        Ok(Airports {
            origin: Some(origin),
            airports,
        })
    }
}

//! Read-only reporting queries.

use jiff::civil::Date;
use rusqlite::{params, OptionalExtension};

use super::date_column;
use crate::{
    error::{BookingError, DatastoreResultExt, Result},
    models::{DestinationCount, Flight, RatedRoute, SeatAvailability, TimedFlight},
    validation,
};

const SELECT_ROUTE_FLIGHTS_SQL: &str = "SELECT airId, flightNum, origin, destination, plane, \
     seats, duration FROM Flight WHERE origin = ?1 AND destination = ?2 ORDER BY flightNum";
const SELECT_TOP_DESTINATIONS_SQL: &str = "SELECT destination, COUNT(*) AS flights FROM Flight \
     GROUP BY destination ORDER BY flights DESC, destination LIMIT ?1";
const SELECT_TOP_RATED_ROUTES_SQL: &str = "SELECT A.name, F.flightNum, F.origin, F.destination, \
     F.plane, AVG(R.score) AS average \
     FROM Flight F \
     JOIN Ratings R ON R.flightNum = F.flightNum \
     JOIN Airline A ON A.airId = F.airId \
     GROUP BY A.name, F.flightNum, F.origin, F.destination, F.plane \
     ORDER BY average DESC, F.flightNum LIMIT ?1";
const SELECT_FLIGHTS_BY_DURATION_SQL: &str = "SELECT A.name, F.flightNum, F.origin, \
     F.destination, F.plane, F.duration \
     FROM Flight F JOIN Airline A ON A.airId = F.airId \
     WHERE F.origin = ?1 AND F.destination = ?2 \
     ORDER BY F.duration DESC, F.flightNum LIMIT ?3";
const SELECT_SEAT_AVAILABILITY_SQL: &str = "SELECT F.flightNum, F.origin, F.destination, F.seats, \
     (SELECT COUNT(*) FROM Booking B WHERE B.flightNum = F.flightNum AND B.departure = ?2) \
     FROM Flight F WHERE F.flightNum = ?1";
const SELECT_BOOKED_DEPARTURES_SQL: &str =
    "SELECT DISTINCT departure FROM Booking WHERE flightNum = ?1 ORDER BY departure";
const SELECT_ORIGINS_SQL: &str = "SELECT DISTINCT origin FROM Flight ORDER BY origin";
const SELECT_DESTINATIONS_FROM_SQL: &str =
    "SELECT DISTINCT destination FROM Flight WHERE origin = ?1 ORDER BY destination";

impl super::Database {
    /// Lists every flight from `origin` to `destination`, by flight number.
    pub fn list_flights(&self, origin: &str, destination: &str) -> Result<Vec<Flight>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROUTE_FLIGHTS_SQL)
            .db_context("Failed to prepare query")?;

        let flights = stmt
            .query_map(params![origin.trim(), destination.trim()], |row| {
                Ok(Flight {
                    airline_id: row.get::<_, i64>(0)? as u64,
                    flight_num: row.get(1)?,
                    origin: row.get(2)?,
                    destination: row.get(3)?,
                    plane: row.get(4)?,
                    seats: row.get(5)?,
                    duration: row.get(6)?,
                })
            })
            .db_context("Failed to query flights")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read flight row")?;

        Ok(flights)
    }

    /// Returns the `k` destinations served by the most flights.
    pub fn top_destinations(&self, k: usize) -> Result<Vec<DestinationCount>> {
        let k = validation::limit(k)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_TOP_DESTINATIONS_SQL)
            .db_context("Failed to prepare query")?;

        let destinations = stmt
            .query_map(params![k as i64], |row| {
                Ok(DestinationCount {
                    destination: row.get(0)?,
                    flights: row.get::<_, i64>(1)? as u64,
                })
            })
            .db_context("Failed to query destinations")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read destination row")?;

        Ok(destinations)
    }

    /// Returns the `k` rated flights with the highest average score.
    pub fn top_rated_routes(&self, k: usize) -> Result<Vec<RatedRoute>> {
        let k = validation::limit(k)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_TOP_RATED_ROUTES_SQL)
            .db_context("Failed to prepare query")?;

        let routes = stmt
            .query_map(params![k as i64], |row| {
                Ok(RatedRoute {
                    airline: row.get(0)?,
                    flight_num: row.get(1)?,
                    origin: row.get(2)?,
                    destination: row.get(3)?,
                    plane: row.get(4)?,
                    average_score: row.get(5)?,
                })
            })
            .db_context("Failed to query rated routes")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read rated route row")?;

        Ok(routes)
    }

    /// Returns up to `k` flights on a route, longest first.
    pub fn flights_by_duration(
        &self,
        origin: &str,
        destination: &str,
        k: usize,
    ) -> Result<Vec<TimedFlight>> {
        let k = validation::limit(k)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_FLIGHTS_BY_DURATION_SQL)
            .db_context("Failed to prepare query")?;

        let flights = stmt
            .query_map(params![origin.trim(), destination.trim(), k as i64], |row| {
                Ok(TimedFlight {
                    airline: row.get(0)?,
                    flight_num: row.get(1)?,
                    origin: row.get(2)?,
                    destination: row.get(3)?,
                    plane: row.get(4)?,
                    duration: row.get(5)?,
                })
            })
            .db_context("Failed to query flights")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read flight row")?;

        Ok(flights)
    }

    /// Reports booked and free seats on a flight for one departure date.
    ///
    /// A date without bookings reports zero booked seats.
    pub fn seat_availability(&self, flight_num: &str, departure: Date) -> Result<SeatAvailability> {
        let flight_num = validation::flight_num(flight_num)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_SEAT_AVAILABILITY_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![flight_num, departure.to_string()], |row| {
            Ok(SeatAvailability {
                flight_num: row.get(0)?,
                origin: row.get(1)?,
                destination: row.get(2)?,
                departure,
                seats: row.get(3)?,
                booked: row.get(4)?,
            })
        })
        .optional()
        .db_context("Failed to query seat availability")?
        .ok_or(BookingError::FlightNotFound { flight_num })
    }

    /// Looks up the departure dates booked on a flight, oldest first.
    pub fn booked_departures(&self, flight_num: &str) -> Result<Vec<Date>> {
        let flight_num = validation::flight_num(flight_num)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_BOOKED_DEPARTURES_SQL)
            .db_context("Failed to prepare query")?;

        let dates = stmt
            .query_map(params![flight_num], |row| date_column(row, 0))
            .db_context("Failed to query departures")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read departure row")?;

        Ok(dates)
    }

    /// Lists every airport with at least one departing flight.
    pub fn origins(&self) -> Result<Vec<String>> {
        self.airport_column(SELECT_ORIGINS_SQL, params![])
    }

    /// Lists the airports reachable directly from `origin`.
    pub fn destinations_from(&self, origin: &str) -> Result<Vec<String>> {
        let origin = validation::required("origin", origin)?;
        self.airport_column(SELECT_DESTINATIONS_FROM_SQL, params![origin])
    }

    fn airport_column(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let airports = stmt
            .query_map(params, |row| row.get(0))
            .db_context("Failed to query airports")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read airport row")?;

        Ok(airports)
    }
}

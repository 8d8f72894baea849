//! The four mutating booking operations.
//!
//! Every operation is split in two. A `validate_*` step checks the raw
//! request without touching the datastore and returns a validated value that
//! only this module can construct. A `store_*` step takes that value, resolves
//! referenced rows, allocates a key or booking reference, then issues a
//! single insert or update.
//!
//! The store steps are generic over [`Gateway`] and perform no transaction
//! management themselves. Callers that need the allocation to be race-free
//! validate first and then run the store step inside a write-locking
//! transaction, as [`crate::Database`] does. The combined functions
//! ([`add_passenger`] and friends) run both steps against one gateway.

use jiff::civil::Date;
use log::{debug, info};
use rusqlite::{params, types::Type};

use crate::{
    allocator::allocate_id,
    error::{BookingError, Result},
    gateway::{Gateway, Record},
    models::{Airline, Booking, Passenger, Rating, UpsertOutcome},
    params::{AddPassenger, BookFlight, SubmitRating, UpsertAirline},
    reference::generate_unique_ref,
    validation,
};

const SELECT_PASSENGER_ID_SQL: &str = "SELECT pID FROM Passenger WHERE passNum = ?1";
const SELECT_PASSENGER_IDS_SQL: &str = "SELECT pID FROM Passenger ORDER BY pID";
const INSERT_PASSENGER_SQL: &str =
    "INSERT INTO Passenger (pID, passNum, fullName, bdate, country) VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_ROUTE_FLIGHT_SQL: &str = "SELECT flightNum FROM Flight \
     WHERE origin = ?1 AND destination = ?2 ORDER BY flightNum LIMIT 1";
const SELECT_BOOK_REF_SQL: &str = "SELECT bookRef FROM Booking WHERE bookRef = ?1";
const INSERT_BOOKING_SQL: &str =
    "INSERT INTO Booking (bookRef, departure, flightNum, pID) VALUES (?1, ?2, ?3, ?4)";

const SELECT_RATEABLE_SQL: &str = "SELECT flightNum FROM Booking WHERE pID = ?1 AND flightNum = ?2 \
     AND NOT EXISTS (SELECT 1 FROM Ratings WHERE pID = ?1 AND flightNum = ?2)";
const SELECT_RATING_IDS_SQL: &str = "SELECT rID FROM Ratings ORDER BY rID";
const INSERT_RATING_SQL: &str =
    "INSERT INTO Ratings (rID, pID, flightNum, score, comment) VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_AIRLINE_ID_SQL: &str = "SELECT airId FROM Airline WHERE name = ?1";
const SELECT_AIRLINE_IDS_SQL: &str = "SELECT airId FROM Airline ORDER BY airId";
const UPDATE_AIRLINE_SQL: &str =
    "UPDATE Airline SET founded = ?1, country = ?2, hub = ?3 WHERE airId = ?4";
const INSERT_AIRLINE_SQL: &str =
    "INSERT INTO Airline (airId, name, founded, country, hub) VALUES (?1, ?2, ?3, ?4, ?5)";

/// A passenger registration whose fields passed validation.
#[derive(Debug, Clone)]
pub struct ValidPassenger {
    pass_num: String,
    full_name: String,
    birth_date: Date,
    country: String,
}

/// A booking request whose fields passed validation.
#[derive(Debug, Clone)]
pub struct ValidBooking {
    pass_num: String,
    origin: String,
    destination: String,
    departure: Date,
}

/// A rating whose fields passed validation.
#[derive(Debug, Clone)]
pub struct ValidRating {
    pass_num: String,
    flight_num: String,
    score: u8,
    comment: String,
}

/// An airline whose fields passed validation.
#[derive(Debug, Clone)]
pub struct ValidAirline {
    name: String,
    founded: u16,
    country: String,
    hub: String,
}

/// Checks a passenger registration.
///
/// The passport number is upper-cased and each name part capitalised.
///
/// # Errors
///
/// [`BookingError::Validation`] for a malformed passport number, name, or
/// country
pub fn validate_passenger(request: &AddPassenger) -> Result<ValidPassenger> {
    Ok(ValidPassenger {
        pass_num: validation::pass_num(&request.pass_num)?,
        full_name: validation::full_name(&request.first_name, &request.last_name)?,
        birth_date: request.birth_date,
        country: validation::country("country", &request.country)?.to_string(),
    })
}

/// Checks a booking request.
pub fn validate_booking(request: &BookFlight) -> Result<ValidBooking> {
    Ok(ValidBooking {
        pass_num: validation::pass_num(&request.pass_num)?,
        origin: validation::required("origin", &request.origin)?.to_string(),
        destination: validation::required("destination", &request.destination)?.to_string(),
        departure: request.departure,
    })
}

/// Checks a rating; the score is checked before any other field.
pub fn validate_rating(request: &SubmitRating) -> Result<ValidRating> {
    let score = validation::score(request.score)?;
    Ok(ValidRating {
        pass_num: validation::pass_num(&request.pass_num)?,
        flight_num: validation::flight_num(&request.flight_num)?,
        score,
        comment: request.comment.clone(),
    })
}

/// Checks an airline.
///
/// # Errors
///
/// [`BookingError::Validation`] for a founding year before 1900 or an empty
/// or over-long name, country or hub
pub fn validate_airline(request: &UpsertAirline) -> Result<ValidAirline> {
    Ok(ValidAirline {
        name: validation::bounded_text("name", &request.name)?.to_string(),
        founded: validation::founded(request.founded)?,
        country: validation::bounded_text("country", &request.country)?.to_string(),
        hub: validation::bounded_text("hub", &request.hub)?.to_string(),
    })
}

/// Validates and registers a passenger under the next free `pID`.
///
/// # Errors
///
/// - [`BookingError::Validation`] for malformed fields
/// - [`BookingError::DuplicatePassport`] if the passport number is taken
pub fn add_passenger<G: Gateway + ?Sized>(gw: &G, request: &AddPassenger) -> Result<Passenger> {
    store_passenger(gw, &validate_passenger(request)?)
}

/// Validates and books the lowest-numbered flight serving the route.
///
/// # Errors
///
/// - [`BookingError::PassengerNotFound`] for an unknown passport number
/// - [`BookingError::RouteNotFound`] if no flight serves the route
/// - [`BookingError::GenerationExhausted`] if no free reference was found
pub fn book_flight<G: Gateway + ?Sized>(gw: &G, request: &BookFlight) -> Result<Booking> {
    store_booking(gw, &validate_booking(request)?)
}

/// Validates and records a rating for a booked, not yet rated flight.
///
/// # Errors
///
/// - [`BookingError::Validation`] for a score outside `0..=5`
/// - [`BookingError::PassengerNotFound`] for an unknown passport number
/// - [`BookingError::NotBookedOrAlreadyRated`] if the passenger never booked
///   the flight or already rated it
pub fn submit_rating<G: Gateway + ?Sized>(gw: &G, request: &SubmitRating) -> Result<Rating> {
    store_rating(gw, &validate_rating(request)?)
}

/// Validates an airline, then updates the one with this name in place or
/// inserts it under the next free `airId`.
pub fn upsert_airline<G>(gw: &G, request: &UpsertAirline) -> Result<UpsertOutcome>
where
    G: Gateway + ?Sized,
{
    store_airline(gw, &validate_airline(request)?)
}

/// Registers a validated passenger under the next free `pID`.
pub fn store_passenger<G>(gw: &G, passenger: &ValidPassenger) -> Result<Passenger>
where
    G: Gateway + ?Sized,
{
    let ValidPassenger {
        pass_num,
        full_name,
        birth_date,
        country,
    } = passenger;

    if gw.exists(SELECT_PASSENGER_ID_SQL, params![pass_num])? {
        return Err(BookingError::DuplicatePassport {
            pass_num: pass_num.clone(),
        });
    }

    let id = next_id(gw, SELECT_PASSENGER_IDS_SQL)?;
    gw.execute(
        INSERT_PASSENGER_SQL,
        params![id as i64, pass_num, full_name, birth_date.to_string(), country],
    )?;

    info!("Registered passenger {pass_num} as pID {id}");
    Ok(Passenger {
        id,
        pass_num: pass_num.clone(),
        full_name: full_name.clone(),
        birth_date: *birth_date,
        country: country.clone(),
    })
}

/// Books the flight serving a validated route under a fresh reference.
pub fn store_booking<G: Gateway + ?Sized>(gw: &G, booking: &ValidBooking) -> Result<Booking> {
    let ValidBooking {
        pass_num,
        origin,
        destination,
        departure,
    } = booking;

    let passenger_id = passenger_id(gw, pass_num)?;

    let flight_num = gw
        .query(SELECT_ROUTE_FLIGHT_SQL, params![origin, destination])?
        .into_iter()
        .next()
        .and_then(|record| record.into_iter().next())
        .ok_or_else(|| BookingError::RouteNotFound {
            origin: origin.clone(),
            destination: destination.clone(),
        })?;

    let reference =
        generate_unique_ref(|candidate| gw.exists(SELECT_BOOK_REF_SQL, params![candidate]))?;

    gw.execute(
        INSERT_BOOKING_SQL,
        params![reference, departure.to_string(), flight_num, passenger_id as i64],
    )?;

    info!("Booked {flight_num} on {departure} for pID {passenger_id} as {reference}");
    Ok(Booking {
        reference,
        departure: *departure,
        flight_num,
        passenger_id,
    })
}

/// Records a validated rating for a booked, not yet rated flight.
pub fn store_rating<G: Gateway + ?Sized>(gw: &G, rating: &ValidRating) -> Result<Rating> {
    let ValidRating {
        pass_num,
        flight_num,
        score,
        comment,
    } = rating;

    let passenger_id = passenger_id(gw, pass_num)?;

    if !gw.exists(SELECT_RATEABLE_SQL, params![passenger_id as i64, flight_num])? {
        return Err(BookingError::NotBookedOrAlreadyRated {
            pass_num: pass_num.clone(),
            flight_num: flight_num.clone(),
        });
    }

    let id = next_id(gw, SELECT_RATING_IDS_SQL)?;
    gw.execute(
        INSERT_RATING_SQL,
        params![id as i64, passenger_id as i64, flight_num, score, comment],
    )?;

    info!("Recorded rating rID {id} ({score}/5) for {flight_num} by pID {passenger_id}");
    Ok(Rating {
        id,
        passenger_id,
        flight_num: flight_num.clone(),
        score: *score,
        comment: comment.clone(),
    })
}

/// Updates a validated airline in place by name, or inserts it.
pub fn store_airline<G>(gw: &G, airline: &ValidAirline) -> Result<UpsertOutcome>
where
    G: Gateway + ?Sized,
{
    let name = airline.name.as_str();

    let existing = gw
        .query(SELECT_AIRLINE_ID_SQL, params![name])?
        .first()
        .map(parse_key)
        .transpose()?;

    let outcome = match existing {
        Some(id) => {
            gw.execute(
                UPDATE_AIRLINE_SQL,
                params![airline.founded, airline.country, airline.hub, id as i64],
            )?;
            info!("Updated airline {name} (airId {id})");
            UpsertOutcome::Updated(airline.stored(id))
        }
        None => {
            let id = next_id(gw, SELECT_AIRLINE_IDS_SQL)?;
            gw.execute(
                INSERT_AIRLINE_SQL,
                params![id as i64, name, airline.founded, airline.country, airline.hub],
            )?;
            info!("Inserted airline {name} as airId {id}");
            UpsertOutcome::Inserted(airline.stored(id))
        }
    };

    Ok(outcome)
}

impl ValidAirline {
    fn stored(&self, id: u64) -> Airline {
        Airline {
            id,
            name: self.name.clone(),
            founded: self.founded,
            country: self.country.clone(),
            hub: self.hub.clone(),
        }
    }
}

/// Resolves a passport number to its `pID`.
fn passenger_id<G: Gateway + ?Sized>(gw: &G, pass_num: &str) -> Result<u64> {
    match gw.query(SELECT_PASSENGER_ID_SQL, params![pass_num])?.first() {
        Some(record) => parse_key(record),
        None => Err(BookingError::PassengerNotFound {
            pass_num: pass_num.to_string(),
        }),
    }
}

/// Fetches a key column (already ordered ascending) and allocates from it.
fn next_id<G: Gateway + ?Sized>(gw: &G, sql: &str) -> Result<u64> {
    let keys = gw
        .query(sql, params![])?
        .iter()
        .map(parse_key)
        .collect::<Result<Vec<u64>>>()?;

    let id = allocate_id(&keys);
    debug!("Allocated key {id} from {} existing", keys.len());
    Ok(id)
}

fn parse_key(record: &Record) -> Result<u64> {
    let text = record.first().map(String::as_str).unwrap_or_default();
    text.parse::<u64>().map_err(|e| {
        let source = rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e));
        BookingError::datastore(format!("Invalid key value '{text}'")).with_source(source)
    })
}

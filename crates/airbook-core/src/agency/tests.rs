//! Tests for the agency facade.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    models::UpsertOutcome,
    params::{
        AddPassenger, BookFlight, Route, RouteTopK, SeatQuery, SubmitRating, TopK, UpsertAirline,
    },
};

const SEED_SQL: &str = "
    INSERT INTO Airline (airId, name, founded, country, hub) VALUES
        (0, 'United', 1926, 'USA', 'ORD'),
        (2, 'American', 1930, 'USA', 'DFW');
    INSERT INTO Flight (airId, flightNum, origin, destination, plane, seats, duration) VALUES
        (0, 'UA100', 'ORD', 'JFK', 'B737', 150, 3),
        (0, 'UA200', 'ORD', 'JFK', 'A320', 120, 2),
        (2, 'AA300', 'DFW', 'JFK', 'B777', 300, 4),
        (2, 'AA400', 'DFW', 'LAX', 'A321', 180, 3);
";

/// Helper function to create a test agency over a seeded database
async fn create_test_agency() -> (TempDir, Agency) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agency = AgencyBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create agency");

    rusqlite::Connection::open(&db_path)
        .and_then(|conn| conn.execute_batch(SEED_SQL))
        .expect("Failed to seed flights");

    (temp_dir, agency)
}

fn passenger(pass_num: &str) -> AddPassenger {
    AddPassenger {
        pass_num: pass_num.to_string(),
        first_name: "grace".to_string(),
        last_name: "HOPPER".to_string(),
        birth_date: date(1906, 12, 9),
        country: "USA".to_string(),
    }
}

fn booking(pass_num: &str, origin: &str, destination: &str) -> BookFlight {
    BookFlight {
        pass_num: pass_num.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure: date(2024, 6, 1),
    }
}

fn rating(pass_num: &str, flight_num: &str, score: u8) -> SubmitRating {
    SubmitRating {
        pass_num: pass_num.to_string(),
        flight_num: flight_num.to_string(),
        score,
        comment: "Smooth flight".to_string(),
    }
}

#[tokio::test]
async fn test_add_passenger_allocates_sequential_ids() {
    let (_temp_dir, agency) = create_test_agency().await;

    let first = agency.add_passenger(&passenger("AA00000001")).await.unwrap();
    let second = agency.add_passenger(&passenger("AA00000002")).await.unwrap();

    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);
    assert_eq!(first.full_name, "Grace Hopper");
}

#[tokio::test]
async fn test_add_passenger_duplicate_passport() {
    let (_temp_dir, agency) = create_test_agency().await;

    agency.add_passenger(&passenger("AA00000001")).await.unwrap();
    let err = agency.add_passenger(&passenger("AA00000001")).await.unwrap_err();

    assert!(matches!(err, BookingError::DuplicatePassport { .. }));

    // The failed attempt must not have consumed a key
    let next = agency.add_passenger(&passenger("AA00000002")).await.unwrap();
    assert_eq!(next.id, 1);
}

#[tokio::test]
async fn test_book_flight_picks_lowest_flight_number() {
    let (_temp_dir, agency) = create_test_agency().await;
    agency.add_passenger(&passenger("AA00000001")).await.unwrap();

    let booked = agency.book_flight(&booking("AA00000001", "ORD", "JFK")).await.unwrap();

    assert_eq!(booked.flight_num, "UA100");
    assert_eq!(booked.passenger_id, 0);
    assert!(crate::reference::is_well_formed(&booked.reference));
}

#[tokio::test]
async fn test_book_flight_errors() {
    let (_temp_dir, agency) = create_test_agency().await;

    let err = agency.book_flight(&booking("AA00000001", "ORD", "JFK")).await.unwrap_err();
    assert!(matches!(err, BookingError::PassengerNotFound { .. }));

    agency.add_passenger(&passenger("AA00000001")).await.unwrap();
    let err = agency.book_flight(&booking("AA00000001", "JFK", "ORD")).await.unwrap_err();
    assert!(matches!(err, BookingError::RouteNotFound { .. }));
}

#[tokio::test]
async fn test_submit_rating_rules() {
    let (_temp_dir, agency) = create_test_agency().await;
    agency.add_passenger(&passenger("AA00000001")).await.unwrap();

    // Not booked yet
    let err = agency.submit_rating(&rating("AA00000001", "UA100", 4)).await.unwrap_err();
    assert!(matches!(err, BookingError::NotBookedOrAlreadyRated { .. }));

    agency.book_flight(&booking("AA00000001", "ORD", "JFK")).await.unwrap();
    agency.book_flight(&booking("AA00000001", "DFW", "LAX")).await.unwrap();

    let err = agency.submit_rating(&rating("AA00000001", "UA100", 6)).await.unwrap_err();
    assert!(err.is_validation());

    let low = agency.submit_rating(&rating("AA00000001", "UA100", 0)).await.unwrap();
    assert_eq!(low.id, 0);
    assert_eq!(low.score, 0);

    // Rated already
    let err = agency.submit_rating(&rating("AA00000001", "UA100", 3)).await.unwrap_err();
    assert!(matches!(err, BookingError::NotBookedOrAlreadyRated { .. }));

    let high = agency.submit_rating(&rating("AA00000001", "AA400", 5)).await.unwrap();
    assert_eq!(high.id, 1);
    assert_eq!(high.score, 5);
}

#[tokio::test]
async fn test_upsert_airline_insert_then_update() {
    let (_temp_dir, agency) = create_test_agency().await;
    let mut request = UpsertAirline {
        name: "Delta".to_string(),
        founded: 1950,
        country: "USA".to_string(),
        hub: "ATL".to_string(),
    };

    let first = agency.upsert_airline(&request).await.unwrap();
    // airIds 0 and 2 are seeded, so the gap at 1 is reused
    assert!(matches!(first, UpsertOutcome::Inserted(ref airline) if airline.id == 1));

    request.hub = "MSP".to_string();
    let second = agency.upsert_airline(&request).await.unwrap();
    assert!(!second.was_inserted());
    assert_eq!(second.airline().id, 1);
    assert_eq!(second.airline().hub, "MSP");
}

#[tokio::test]
async fn test_upsert_airline_rejects_early_founding() {
    let (_temp_dir, agency) = create_test_agency().await;
    let err = agency
        .upsert_airline(&UpsertAirline {
            name: "Wright".to_string(),
            founded: 1899,
            country: "USA".to_string(),
            hub: "DAY".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_list_flights_and_duration_ranking() {
    let (_temp_dir, agency) = create_test_agency().await;
    let route = Route {
        origin: "ORD".to_string(),
        destination: "JFK".to_string(),
    };

    let flights = agency.list_flights(&route).await.unwrap();
    let numbers: Vec<_> = flights.flights.iter().map(|f| f.flight_num.as_str()).collect();
    assert_eq!(numbers, ["UA100", "UA200"]);

    let timed = agency
        .flights_by_duration(&RouteTopK { route, k: 1 })
        .await
        .unwrap();
    assert_eq!(timed.len(), 1);
    assert_eq!(timed.flights[0].flight_num, "UA100");
    assert_eq!(timed.flights[0].airline, "United");
}

#[tokio::test]
async fn test_top_destinations_and_routes() {
    let (_temp_dir, agency) = create_test_agency().await;

    let destinations = agency.top_destinations(&TopK::default()).await.unwrap();
    assert_eq!(destinations.0[0].destination, "JFK");
    assert_eq!(destinations.0[0].flights, 3);
    assert_eq!(destinations.0[1].destination, "LAX");

    agency.add_passenger(&passenger("AA00000001")).await.unwrap();
    agency.add_passenger(&passenger("AA00000002")).await.unwrap();
    for pass_num in ["AA00000001", "AA00000002"] {
        agency.book_flight(&booking(pass_num, "ORD", "JFK")).await.unwrap();
    }
    agency.book_flight(&booking("AA00000001", "DFW", "LAX")).await.unwrap();
    agency.submit_rating(&rating("AA00000001", "UA100", 5)).await.unwrap();
    agency.submit_rating(&rating("AA00000002", "UA100", 4)).await.unwrap();
    agency.submit_rating(&rating("AA00000001", "AA400", 2)).await.unwrap();

    let routes = agency.top_rated_routes(&TopK { k: 5 }).await.unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes.0[0].flight_num, "UA100");
    assert!((routes.0[0].average_score - 4.5).abs() < f64::EPSILON);
    assert_eq!(routes.0[1].airline, "American");

    let err = agency.top_rated_routes(&TopK { k: 0 }).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_seat_availability() {
    let (_temp_dir, agency) = create_test_agency().await;
    let query = SeatQuery {
        flight_num: "UA100".to_string(),
        departure: date(2024, 6, 1),
    };

    let empty = agency.seat_availability(&query).await.unwrap();
    assert_eq!(empty.booked, 0);
    assert_eq!(empty.available(), 150);

    agency.add_passenger(&passenger("AA00000001")).await.unwrap();
    agency.book_flight(&booking("AA00000001", "ORD", "JFK")).await.unwrap();

    let after = agency.seat_availability(&query).await.unwrap();
    assert_eq!(after.booked, 1);
    assert_eq!(after.available(), 149);
    assert_eq!(
        agency.booked_departures("UA100").await.unwrap().dates,
        vec![date(2024, 6, 1)]
    );

    let err = agency
        .seat_availability(&SeatQuery {
            flight_num: "XX999".to_string(),
            departure: date(2024, 6, 1),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::FlightNotFound { .. }));
}

#[tokio::test]
async fn test_invalid_requests_do_not_wait_for_write_lock() {
    let (_temp_dir, agency) = create_test_agency().await;
    let locker = rusqlite::Connection::open(agency.database_path()).expect("Failed to open locker");
    locker
        .execute_batch("BEGIN IMMEDIATE")
        .expect("Failed to take write lock");

    let started = std::time::Instant::now();
    let err = agency.add_passenger(&passenger("AA-0000001")).await.unwrap_err();
    assert!(err.is_validation());
    let err = agency.book_flight(&booking("AA00000001", "", "JFK")).await.unwrap_err();
    assert!(err.is_validation());
    assert!(started.elapsed() < std::time::Duration::from_secs(1));

    locker.execute_batch("ROLLBACK").expect("Failed to release write lock");
}

#[tokio::test]
async fn test_origins_and_destinations() {
    let (_temp_dir, agency) = create_test_agency().await;

    let origins = agency.origins().await.unwrap();
    assert_eq!(origins.airports, ["DFW", "ORD"]);

    let destinations = agency.destinations_from("DFW").await.unwrap();
    assert_eq!(destinations.origin.as_deref(), Some("DFW"));
    assert_eq!(destinations.airports, ["JFK", "LAX"]);
}

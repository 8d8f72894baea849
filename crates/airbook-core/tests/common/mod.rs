#![allow(dead_code)]

use airbook_core::{AgencyBuilder, Database};
use tempfile::{NamedTempFile, TempDir};

/// Airlines and flights the core never writes itself.
pub const SEED_SQL: &str = "
    INSERT INTO Airline (airId, name, founded, country, hub) VALUES
        (0, 'United', 1926, 'USA', 'ORD'),
        (1, 'Lufthansa', 1953, 'Germany', 'FRA');
    INSERT INTO Flight (airId, flightNum, origin, destination, plane, seats, duration) VALUES
        (0, 'UA100', 'ORD', 'JFK', 'B737', 2, 3),
        (0, 'UA900', 'ORD', 'FRA', 'B787', 240, 9),
        (1, 'LH430', 'ORD', 'FRA', 'A350', 290, 8),
        (1, 'LH400', 'JFK', 'FRA', 'A340', 260, 7);
";

/// Seeds airlines and flights through a separate connection
pub fn seed(path: &std::path::Path) {
    rusqlite::Connection::open(path)
        .and_then(|conn| conn.execute_batch(SEED_SQL))
        .expect("Failed to seed flights");
}

/// Helper function to create a seeded temporary database
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    seed(temp_file.path());
    (temp_file, db)
}

/// Helper function to create a seeded test agency
pub async fn create_test_agency() -> (TempDir, airbook_core::Agency) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agency = AgencyBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create agency");
    seed(&db_path);
    (temp_dir, agency)
}

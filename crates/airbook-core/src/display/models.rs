//! Display implementations for domain models.

use std::fmt;

use crate::models::{Airline, Booking, Flight, Passenger, Rating, SeatAvailability, UpsertOutcome};

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Passenger {}: {}", self.id, self.full_name)?;
        writeln!(f)?;
        writeln!(f, "- Passport: {}", self.pass_num)?;
        writeln!(f, "- Born: {}", self.birth_date)?;
        writeln!(f, "- Country: {}", self.country)
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Airline {}: {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Founded: {}", self.founded)?;
        writeln!(f, "- Country: {}", self.country)?;
        writeln!(f, "- Hub: {}", self.hub)
    }
}

impl fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let airline = self.airline();
        if self.was_inserted() {
            writeln!(f, "Inserted airline with ID: {}", airline.id)?;
        } else {
            writeln!(f, "Updated airline with ID: {}", airline.id)?;
        }
        writeln!(f)?;
        write!(f, "{airline}")
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} → {}: {}, {}h, {} seats",
            self.flight_num, self.origin, self.destination, self.plane, self.duration, self.seats
        )
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Booking {}", self.reference)?;
        writeln!(f)?;
        writeln!(f, "- Flight: {}", self.flight_num)?;
        writeln!(f, "- Departure: {}", self.departure)?;
        writeln!(f, "- Passenger ID: {}", self.passenger_id)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Rating {}: {}/5 for {}", self.id, self.score, self.flight_num)?;
        writeln!(f)?;
        writeln!(f, "- Passenger ID: {}", self.passenger_id)?;
        if !self.comment.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.comment)?;
        }
        Ok(())
    }
}

impl fmt::Display for SeatAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Flight {} ({} → {}) on {}",
            self.flight_num, self.origin, self.destination, self.departure
        )?;
        writeln!(f)?;
        writeln!(f, "- Booked seats: {}", self.booked)?;
        writeln!(f, "- Total seats: {}", self.seats)?;
        writeln!(f, "- Available seats: {}", self.available())
    }
}

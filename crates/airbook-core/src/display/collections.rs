//! Wrapper types for displaying report results.
//!
//! Each wrapper renders a markdown heading followed by one line per row, or
//! a short notice when the report is empty.

use std::fmt;

use jiff::civil::Date;

use crate::{
    models::{DestinationCount, Flight, RatedRoute, TimedFlight},
    params::Route,
};

/// Flights between two airports.
///
/// # Examples
///
/// ```rust
/// use airbook_core::{display::RouteFlights, params::Route};
///
/// let empty = RouteFlights {
///     route: Route {
///         origin: "ATL".to_string(),
///         destination: "JFK".to_string(),
///     },
///     flights: vec![],
/// };
/// assert!(format!("{}", empty).contains("No flights from ATL to JFK."));
/// ```
pub struct RouteFlights {
    pub route: Route,
    pub flights: Vec<Flight>,
}

impl RouteFlights {
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }
}

impl fmt::Display for RouteFlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Route {
            origin,
            destination,
        } = &self.route;

        if self.flights.is_empty() {
            return writeln!(f, "No flights from {origin} to {destination}.");
        }

        writeln!(f, "# Flights from {origin} to {destination}")?;
        writeln!(f)?;
        for flight in &self.flights {
            write!(f, "{flight}")?;
        }
        Ok(())
    }
}

/// Destinations ranked by the number of flights serving them.
pub struct Destinations(pub Vec<DestinationCount>);

impl Destinations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DestinationCount> {
        self.0.iter()
    }
}

impl fmt::Display for Destinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No flights found.");
        }

        writeln!(f, "# Most Popular Destinations")?;
        writeln!(f)?;
        for (rank, entry) in self.0.iter().enumerate() {
            let noun = if entry.flights == 1 { "flight" } else { "flights" };
            writeln!(f, "{}. {} ({} {noun})", rank + 1, entry.destination, entry.flights)?;
        }
        Ok(())
    }
}

/// Rated flights ranked by average score.
#[derive(Debug)]
pub struct RatedRoutes(pub Vec<RatedRoute>);

impl RatedRoutes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RatedRoute> {
        self.0.iter()
    }
}

impl fmt::Display for RatedRoutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No rated flights found.");
        }

        writeln!(f, "# Highest Rated Routes")?;
        writeln!(f)?;
        for (rank, route) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** {} ({} → {}, {}): {:.2}/5",
                rank + 1,
                route.flight_num,
                route.airline,
                route.origin,
                route.destination,
                route.plane,
                route.average_score
            )?;
        }
        Ok(())
    }
}

/// Flights on a route ordered by duration, longest first.
pub struct TimedFlights {
    pub route: Route,
    pub flights: Vec<TimedFlight>,
}

impl TimedFlights {
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }
}

impl fmt::Display for TimedFlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Route {
            origin,
            destination,
        } = &self.route;

        if self.flights.is_empty() {
            return writeln!(f, "No flights from {origin} to {destination}.");
        }

        writeln!(f, "# Flights from {origin} to {destination} by Duration")?;
        writeln!(f)?;
        for flight in &self.flights {
            writeln!(
                f,
                "- **{}** {}: {}, {}h",
                flight.flight_num, flight.airline, flight.plane, flight.duration
            )?;
        }
        Ok(())
    }
}

/// Airports served by flights.
///
/// Without an origin this lists every departure airport; with one it lists
/// the destinations reachable from it.
pub struct Airports {
    pub origin: Option<String>,
    pub airports: Vec<String>,
}

impl fmt::Display for Airports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.origin, self.airports.is_empty()) {
            (None, true) => return writeln!(f, "No flights found."),
            (Some(origin), true) => return writeln!(f, "No flights from {origin}."),
            (None, false) => writeln!(f, "# Origins")?,
            (Some(origin), false) => writeln!(f, "# Destinations from {origin}")?,
        }

        writeln!(f)?;
        for airport in &self.airports {
            writeln!(f, "- {airport}")?;
        }
        Ok(())
    }
}

/// Departure dates with at least one booking on a flight.
pub struct Departures {
    pub flight_num: String,
    pub dates: Vec<Date>,
}

impl fmt::Display for Departures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dates.is_empty() {
            return writeln!(f, "No bookings on {}.", self.flight_num);
        }

        writeln!(f, "# Booked Departures for {}", self.flight_num)?;
        writeln!(f)?;
        for date in &self.dates {
            writeln!(f, "- {date}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_rank_and_plural() {
        let ranking = Destinations(vec![
            DestinationCount {
                destination: "JFK".to_string(),
                flights: 2,
            },
            DestinationCount {
                destination: "SFO".to_string(),
                flights: 1,
            },
        ]);
        let output = format!("{ranking}");
        assert!(output.contains("1. JFK (2 flights)"));
        assert!(output.contains("2. SFO (1 flight)"));
    }

    #[test]
    fn test_rated_routes_format_score() {
        let routes = RatedRoutes(vec![RatedRoute {
            airline: "Delta".to_string(),
            flight_num: "DL100".to_string(),
            origin: "ATL".to_string(),
            destination: "JFK".to_string(),
            plane: "A320".to_string(),
            average_score: 4.5,
        }]);
        assert!(format!("{routes}").contains("**DL100** Delta (ATL → JFK, A320): 4.50/5"));
    }

    #[test]
    fn test_empty_reports() {
        assert_eq!(format!("{}", Destinations(vec![])), "No flights found.\n");
        assert_eq!(format!("{}", RatedRoutes(vec![])), "No rated flights found.\n");
        let none = Departures {
            flight_num: "DL100".to_string(),
            dates: vec![],
        };
        assert_eq!(format!("{none}"), "No bookings on DL100.\n");
    }

    #[test]
    fn test_airports_headings() {
        let origins = Airports {
            origin: None,
            airports: vec!["ATL".to_string(), "ORD".to_string()],
        };
        assert_eq!(format!("{origins}"), "# Origins\n\n- ATL\n- ORD\n");

        let none = Airports {
            origin: Some("JFK".to_string()),
            airports: vec![],
        };
        assert_eq!(format!("{none}"), "No flights from JFK.\n");
    }

    #[test]
    fn test_departures_list_dates() {
        let departures = Departures {
            flight_num: "DL100".to_string(),
            dates: vec![jiff::civil::date(2024, 6, 1)],
        };
        let output = format!("{departures}");
        assert!(output.starts_with("# Booked Departures for DL100"));
        assert!(output.contains("- 2024-06-01"));
    }
}

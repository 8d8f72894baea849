//! Field validation applied before any datastore access.

use crate::error::{BookingError, Result};

/// Maximum length of names, countries and hubs.
pub const MAX_TEXT_LEN: usize = 24;

/// Exact length of a passport number.
pub const PASS_NUM_LEN: usize = 10;

/// Earliest accepted founding year for an airline.
pub const MIN_FOUNDED: u16 = 1900;

/// Latest accepted founding year; years are at most four digits.
pub const MAX_FOUNDED: u16 = 9999;

/// Highest rating score.
pub const MAX_SCORE: u8 = 5;

/// Checks a passport number: exactly ten ASCII letters or digits.
///
/// Returns the number upper-cased, the form it is stored and looked up in.
pub fn pass_num(value: &str) -> Result<String> {
    let value = value.trim();
    if value.chars().count() != PASS_NUM_LEN {
        return Err(BookingError::invalid_input("pass_num")
            .with_reason(format!("must be exactly {PASS_NUM_LEN} characters")));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BookingError::invalid_input("pass_num")
            .with_reason("must contain only letters and digits"));
    }
    Ok(value.to_ascii_uppercase())
}

/// Checks a flight number and returns it upper-cased.
pub fn flight_num(value: &str) -> Result<String> {
    required("flight_num", value).map(str::to_ascii_uppercase)
}

/// Checks a non-empty free-text field of at most [`MAX_TEXT_LEN`] characters.
pub fn bounded_text<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::invalid_input(field).with_reason("must not be empty"));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(BookingError::invalid_input(field)
            .with_reason(format!("must be at most {MAX_TEXT_LEN} characters")));
    }
    Ok(value)
}

/// Checks a bounded text field that must not contain digits.
pub fn country<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = bounded_text(field, value)?;
    reject_digits(field, value)?;
    Ok(value)
}

/// Checks a required, non-empty identifier such as a flight number or airport.
pub fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(value)
}

/// Builds the stored full name from a first and last name.
///
/// Each part is capitalised ("mARY" becomes "Mary") and the two are joined
/// with a single space. The result must fit in [`MAX_TEXT_LEN`] characters.
pub fn full_name(first: &str, last: &str) -> Result<String> {
    let first = person_name("first_name", first)?;
    let last = person_name("last_name", last)?;
    let full = format!("{first} {last}");
    if full.chars().count() > MAX_TEXT_LEN {
        return Err(BookingError::invalid_input("full_name")
            .with_reason(format!("must be at most {MAX_TEXT_LEN} characters")));
    }
    Ok(full)
}

fn person_name(field: &str, value: &str) -> Result<String> {
    let value = required(field, value)?;
    reject_digits(field, value)?;
    Ok(capitalize(value))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn reject_digits(field: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(BookingError::invalid_input(field).with_reason("must not contain digits"));
    }
    Ok(())
}

/// Checks a rating score lies in `0..=5`.
pub fn score(value: u8) -> Result<u8> {
    if value > MAX_SCORE {
        return Err(BookingError::invalid_input("score")
            .with_reason(format!("must be between 0 and {MAX_SCORE}")));
    }
    Ok(value)
}

/// Checks an airline founding year.
pub fn founded(value: u16) -> Result<u16> {
    if !(MIN_FOUNDED..=MAX_FOUNDED).contains(&value) {
        return Err(BookingError::invalid_input("founded")
            .with_reason(format!("must be a year between {MIN_FOUNDED} and {MAX_FOUNDED}")));
    }
    Ok(value)
}

/// Checks the row limit of a ranking query.
pub fn limit(value: usize) -> Result<usize> {
    if value == 0 {
        return Err(BookingError::invalid_input("k").with_reason("must be at least 1"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_num_requires_ten_alphanumerics() {
        assert_eq!(pass_num("AB12345678").unwrap(), "AB12345678");
        assert_eq!(pass_num(" AB12345678 ").unwrap(), "AB12345678");
        assert!(pass_num("AB1234567").unwrap_err().is_validation());
        assert!(pass_num("AB123456789").unwrap_err().is_validation());
        assert!(pass_num("AB-2345678").unwrap_err().is_validation());
    }

    #[test]
    fn test_identifiers_are_upper_cased() {
        assert_eq!(pass_num("ab12345678").unwrap(), "AB12345678");
        assert_eq!(flight_num(" ua100 ").unwrap(), "UA100");
        assert!(flight_num("  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_full_name_is_capitalised() {
        assert_eq!(full_name("jOHN", "SMITH").unwrap(), "John Smith");
        assert_eq!(full_name("ana", "de la cruz").unwrap(), "Ana De la cruz");
    }

    #[test]
    fn test_full_name_rejects_digits_and_overflow() {
        assert!(full_name("J0hn", "Smith").unwrap_err().is_validation());
        assert!(full_name("John", "").unwrap_err().is_validation());

        // 12 + 1 + 12 = 25 characters
        let err = full_name("Abcdefghijkl", "Mnopqrstuvwx").unwrap_err();
        assert!(matches!(err, BookingError::Validation { ref field, .. } if field == "full_name"));

        // 12 + 1 + 11 = 24 characters
        assert!(full_name("Abcdefghijkl", "Mnopqrstuvw").is_ok());
    }

    #[test]
    fn test_bounded_text_limits() {
        assert_eq!(bounded_text("hub", "  ATL ").unwrap(), "ATL");
        assert!(bounded_text("hub", "").unwrap_err().is_validation());
        assert!(bounded_text("hub", &"x".repeat(25)).unwrap_err().is_validation());
        assert!(bounded_text("hub", &"x".repeat(24)).is_ok());
    }

    #[test]
    fn test_country_rejects_digits() {
        assert_eq!(country("country", "New Zealand").unwrap(), "New Zealand");
        assert!(country("country", "Area 51").unwrap_err().is_validation());
    }

    #[test]
    fn test_score_range() {
        assert_eq!(score(0).unwrap(), 0);
        assert_eq!(score(5).unwrap(), 5);
        assert!(score(6).unwrap_err().is_validation());
    }

    #[test]
    fn test_founded_range() {
        assert!(founded(1899).unwrap_err().is_validation());
        assert_eq!(founded(1900).unwrap(), 1900);
        assert_eq!(founded(2024).unwrap(), 2024);
        assert!(founded(10000).unwrap_err().is_validation());
    }

    #[test]
    fn test_limit_must_be_positive() {
        assert!(limit(0).unwrap_err().is_validation());
        assert_eq!(limit(3).unwrap(), 3);
    }
}

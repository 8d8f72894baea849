//! Booking reference generation.
//!
//! A booking reference is a ten letter confirmation code drawn uniformly from
//! `A`-`Z`. Candidates are checked against the datastore and redrawn on
//! collision, up to [`MAX_ATTEMPTS`] times.

use log::debug;
use rand::Rng;

use crate::error::{BookingError, Result};

/// Length of every booking reference.
pub const REF_LEN: usize = 10;

/// Number of candidates drawn before giving up.
pub const MAX_ATTEMPTS: usize = 1000;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draws a single candidate reference.
pub fn random_ref<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..REF_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `candidate` has the shape of a booking reference.
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == REF_LEN && candidate.bytes().all(|b| b.is_ascii_uppercase())
}

/// Generates a reference for which `exists` reports no collision.
///
/// `exists` is usually a datastore lookup; its errors are returned unchanged.
///
/// # Errors
///
/// Returns [`BookingError::GenerationExhausted`] when [`MAX_ATTEMPTS`]
/// candidates in a row collide.
pub fn generate_unique_ref<F>(exists: F) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    generate_unique_ref_with(&mut rand::thread_rng(), MAX_ATTEMPTS, exists)
}

/// Same as [`generate_unique_ref`] with an explicit random source and budget.
pub fn generate_unique_ref_with<R, F>(
    rng: &mut R,
    max_attempts: usize,
    mut exists: F,
) -> Result<String>
where
    R: Rng + ?Sized,
    F: FnMut(&str) -> Result<bool>,
{
    for attempt in 1..=max_attempts {
        let candidate = random_ref(rng);
        if !exists(&candidate)? {
            return Ok(candidate);
        }
        debug!("Booking reference {candidate} already taken (attempt {attempt})");
    }

    Err(BookingError::GenerationExhausted {
        attempts: max_attempts,
    })
}

//! Gap-reusing integer key allocation.
//!
//! New passengers, airlines and ratings receive the smallest non-negative
//! integer not yet used as a key in their table. Keys freed by rows removed
//! outside this crate are therefore handed out again.

/// Returns the smallest non-negative integer absent from `existing_ids`.
///
/// `existing_ids` must be sorted ascending without duplicates, which is what a
/// unique key column read with `ORDER BY` yields.
///
/// # Examples
///
/// ```rust
/// use airbook_core::allocator::allocate_id;
///
/// assert_eq!(allocate_id(&[0, 1, 2, 4]), 3);
/// assert_eq!(allocate_id(&[]), 0);
/// assert_eq!(allocate_id(&[1, 2, 3]), 0);
/// ```
pub fn allocate_id(existing_ids: &[u64]) -> u64 {
    existing_ids
        .iter()
        .zip(0u64..)
        .find(|(id, expected)| **id != *expected)
        .map(|(_, expected)| expected)
        .unwrap_or(existing_ids.len() as u64)
}

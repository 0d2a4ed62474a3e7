//! Uniform random selection over a match set.

use super::QueryError;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Picks one element with probability `1 / matches.len()`.
///
/// Each call is an independent draw from the thread-local generator; repeated
/// calls may return the same element.
///
/// # Errors
/// - `QueryError::EmptyResult` when `matches` is empty.
pub fn pick_random<T>(matches: &[T]) -> Result<&T, QueryError> {
    pick_random_with(&mut rand::rng(), matches)
}

/// Same as [`pick_random`] with a caller-provided generator.
pub fn pick_random_with<'a, T, R>(rng: &mut R, matches: &'a [T]) -> Result<&'a T, QueryError>
where
    R: Rng + ?Sized,
{
    matches.choose(rng).ok_or(QueryError::EmptyResult)
}

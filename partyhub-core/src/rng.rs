//! Randomness primitives shared by the draw engine and the mini-games.
//!
//! The RNG is always an injected capability (`&mut impl Rng`) rather than a
//! process global, so callers can substitute a seeded `StdRng` in tests.

use rand::Rng;

/// Uniformly distributed integer in the inclusive range `[min, max]`.
///
/// Used by the shuffle's index draw and by the mini-games for delay and
/// target generation. `min` must not exceed `max`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max);
    rng.random_range(min..=max)
}

/// Fisher-Yates shuffle on a copy of `values`.
///
/// Iterates `i` from `len - 1` down to `1`, drawing `j` uniformly in
/// `[0, i]` and swapping. Every permutation of the input is equally likely
/// given a uniform source. The input slice is never mutated.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> Vec<T> {
    let mut array = values.to_vec();
    for i in (1..array.len()).rev() {
        let j = rng.random_range(0..=i);
        array.swap(i, j);
    }
    array
}

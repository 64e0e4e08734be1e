//! Party Hub core - roster normalization and unbiased winner selection
//!
//! This library provides the pure draw engine behind the party hub: it
//! normalizes raw participant input (trim, drop blanks, case-insensitive
//! de-duplication) and selects ranked winners via a Fisher-Yates shuffle.
//! Randomness is always injected, never global.

pub mod draw;
pub mod error;
pub mod rng;
pub mod roster;

pub use draw::{draw, parse_winner_count, run_draw, DrawOutcome};
pub use error::{DrawError, Result};
pub use rng::{random_int, shuffled};
pub use roster::{normalize, split_roster, Normalization};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_end_to_end_draw() {
        let raw = split_roster("Alice, Bob\nalice, Carol");
        let normalization = normalize(&raw);
        assert_eq!(normalization.unique, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(normalization.duplicates_removed(), 1);

        let mut rng = StdRng::seed_from_u64(21);
        let count = parse_winner_count("2").unwrap();
        let winners = draw(&normalization.unique, count, &mut rng).unwrap();
        assert_eq!(winners.len(), 2);
    }
}

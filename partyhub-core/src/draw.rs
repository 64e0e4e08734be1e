//! Winner selection over a normalized roster.

use crate::error::{DrawError, Result};
use crate::rng::shuffled;
use crate::roster::normalize;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a completed draw, for display or JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub id: Uuid,
    /// Ranked winner list; index 0 is rank 1.
    pub winners: Vec<String>,
    /// Entries discarded as case-insensitive duplicates during normalization.
    pub duplicates_removed: usize,
    /// Size of the unique pool the winners were drawn from.
    pub pool_size: usize,
    pub drawn_at: DateTime<Utc>,
}

/// Parse a free-text winner count.
///
/// Only strictly integral, strictly positive decimal input is accepted;
/// `"2.0"`, `"two"`, `"-1"` and empty input all fail with `InvalidCount`.
/// Zero parses here and is rejected by [`draw`].
pub fn parse_winner_count(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| DrawError::invalid_count(format!("'{}' is not a whole number", raw.trim())))
}

/// Draw `count` unique winners from an already-normalized pool.
///
/// Preconditions are checked in order, each short-circuiting before any
/// entropy is consumed: the count must be at least 1, the pool must be
/// non-empty, and the count must not exceed the pool. On success the pool
/// is Fisher-Yates shuffled and the first `count` names, in permuted order,
/// form the ranked winner list.
pub fn draw<R: Rng + ?Sized>(unique: &[String], count: usize, rng: &mut R) -> Result<Vec<String>> {
    if count < 1 {
        return Err(DrawError::invalid_count("must be at least 1"));
    }

    if unique.is_empty() {
        return Err(DrawError::NoParticipants);
    }

    if count > unique.len() {
        return Err(DrawError::TooManyWinners {
            requested: count,
            available: unique.len(),
        });
    }

    let mut winners = shuffled(unique, rng);
    winners.truncate(count);
    Ok(winners)
}

/// Normalize a raw participant list and draw winners from it in one pass.
///
/// `duplicates_removed` in the outcome comes from the same normalization
/// pass that produced the pool.
pub fn run_draw<I, S, R>(names: I, count: usize, rng: &mut R) -> Result<DrawOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let normalization = normalize(names);
    let winners = draw(&normalization.unique, count, rng)?;

    let outcome = DrawOutcome {
        id: Uuid::new_v4(),
        winners,
        duplicates_removed: normalization.duplicates_removed(),
        pool_size: normalization.unique.len(),
        drawn_at: Utc::now(),
    };

    tracing::info!(
        "draw {} selected {} winner(s) from a pool of {}",
        outcome.id,
        outcome.winners.len(),
        outcome.pool_size
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(parse_winner_count("2").unwrap(), 2);
        assert_eq!(parse_winner_count(" 10 ").unwrap(), 10);
    }

    #[test]
    fn parse_rejects_non_integral_input() {
        for raw in ["", "two", "2.0", "-1", "1e3"] {
            assert!(matches!(
                parse_winner_count(raw),
                Err(DrawError::InvalidCount(_))
            ));
        }
    }

    #[test]
    fn draw_rejects_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw(&pool(&["a", "b"]), 0, &mut rng).unwrap_err();
        assert!(matches!(err, DrawError::InvalidCount(_)));
    }

    #[test]
    fn draw_rejects_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw(&[], 1, &mut rng).unwrap_err();
        assert_eq!(err, DrawError::NoParticipants);
    }

    #[test]
    fn draw_rejects_oversized_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let names = pool(&["a", "b", "c"]);
        let err = draw(&names, 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::TooManyWinners {
                requested: 4,
                available: 3,
            }
        );
    }

    #[test]
    fn validation_order_count_before_pool() {
        // An invalid count short-circuits even when the pool is also empty.
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw(&[], 0, &mut rng).unwrap_err();
        assert!(matches!(err, DrawError::InvalidCount(_)));
    }

    #[test]
    fn winners_are_distinct_members_of_the_pool() {
        let names = pool(&["a", "b", "c", "d", "e"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let winners = draw(&names, 3, &mut rng).unwrap();
            assert_eq!(winners.len(), 3);
            for winner in &winners {
                assert!(names.contains(winner));
            }
            let mut deduped = winners.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), winners.len());
        }
    }

    #[test]
    fn full_pool_draw_returns_everyone_once() {
        let names = pool(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(9);
        let mut winners = draw(&names, names.len(), &mut rng).unwrap();
        winners.sort();
        assert_eq!(winners, names);
    }

    #[test]
    fn run_draw_reports_duplicates_from_the_same_pass() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = run_draw(["Alice", " Bob ", "alice", "Carol"], 2, &mut rng).unwrap();

        assert_eq!(outcome.pool_size, 3);
        assert_eq!(outcome.duplicates_removed, 1);
        assert_eq!(outcome.winners.len(), 2);
        for winner in &outcome.winners {
            assert!(["Alice", "Bob", "Carol"].contains(&winner.as_str()));
        }
    }

    #[test]
    fn run_draw_fails_before_consuming_entropy() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(run_draw(Vec::<String>::new(), 1, &mut rng).is_err());

        // The failed draw above must not have advanced the RNG.
        let mut fresh = StdRng::seed_from_u64(5);
        let a = run_draw(["x", "y"], 1, &mut rng).unwrap();
        let b = run_draw(["x", "y"], 1, &mut fresh).unwrap();
        assert_eq!(a.winners, b.winners);
    }

    #[test]
    fn outcome_serializes_to_json() {
        let mut rng = StdRng::seed_from_u64(11);
        let outcome = run_draw(["a", "b"], 1, &mut rng).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: DrawOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.winners, outcome.winners);
    }
}

//! Number guessing game: find the secret in `[1, 20]` within 5 attempts.
//!
//! Out-of-range guesses are feedback, not errors, and do not consume an
//! attempt; only a real too-high/too-low guess does.

use crate::error::{GameError, Result};
use crate::score::Tally;
use partyhub_core::random_int;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SECRET_MIN: i64 = 1;
pub const SECRET_MAX: i64 = 20;
pub const ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessPhase {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    Correct,
    TooHigh,
    TooLow,
    /// Guess outside `[SECRET_MIN, SECRET_MAX]`; no attempt consumed.
    OutOfRange,
}

#[derive(Debug)]
pub struct NumberGuess {
    secret: i64,
    attempts_left: u32,
    phase: GuessPhase,
    tally: Tally,
}

impl NumberGuess {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            secret: random_int(rng, SECRET_MIN, SECRET_MAX),
            attempts_left: ATTEMPTS,
            phase: GuessPhase::Playing,
            tally: Tally::default(),
        }
    }

    pub fn phase(&self) -> GuessPhase {
        self.phase
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// The secret, for rendering once the round is over.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Submit a guess. Errors if the round already ended.
    pub fn guess(&mut self, value: i64) -> Result<GuessFeedback> {
        if self.phase != GuessPhase::Playing {
            return Err(GameError::invalid_state("round is over"));
        }

        if !(SECRET_MIN..=SECRET_MAX).contains(&value) {
            return Ok(GuessFeedback::OutOfRange);
        }

        if value == self.secret {
            self.phase = GuessPhase::Won;
            self.tally.record_win();
            return Ok(GuessFeedback::Correct);
        }

        self.attempts_left -= 1;
        if self.attempts_left == 0 {
            self.phase = GuessPhase::Lost;
            self.tally.record_loss();
            tracing::debug!("number guess round lost, secret was {}", self.secret);
        }

        Ok(if value > self.secret {
            GuessFeedback::TooHigh
        } else {
            GuessFeedback::TooLow
        })
    }

    /// Start a fresh round with a new secret; the tally carries over.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.secret = random_int(rng, SECRET_MIN, SECRET_MAX);
        self.attempts_left = ATTEMPTS;
        self.phase = GuessPhase::Playing;
    }
}

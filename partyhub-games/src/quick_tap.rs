//! Quick Tap reaction game.
//!
//! The round is a four-state machine: `Idle -> Waiting -> Go -> Result`.
//! Timer scheduling is an effect requested by a transition; the surrounding
//! event loop owns the actual timer and feeds `signal` back in when it
//! fires. Tapping during `Waiting` is a false start and counts as a loss.

use crate::error::{GameError, Result};
use crate::score::Tally;
use partyhub_core::random_int;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Difficulty preset: reaction target and the random wait window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Chill,
    Pro,
}

#[derive(Debug, Clone, Copy)]
pub struct DifficultySettings {
    pub label: &'static str,
    pub target_ms: u64,
    pub wait_min_ms: u64,
    pub wait_max_ms: u64,
}

impl Difficulty {
    pub fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Chill => DifficultySettings {
                label: "Chill",
                target_ms: 420,
                wait_min_ms: 900,
                wait_max_ms: 2200,
            },
            Difficulty::Pro => DifficultySettings {
                label: "Pro",
                target_ms: 320,
                wait_min_ms: 700,
                wait_max_ms: 1700,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickTapPhase {
    Idle,
    Waiting,
    Go,
    Result,
}

/// Effects requested from the caller's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickTapEffect {
    /// Arm a one-shot timer; feed `signal` back in when it fires.
    ScheduleSignal { delay_ms: u64 },
    /// Drop the pending timer, if any.
    CancelSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapResult {
    pub reaction_ms: u64,
    pub win: bool,
    pub new_best: bool,
}

#[derive(Debug)]
pub struct QuickTap {
    difficulty: Difficulty,
    phase: QuickTapPhase,
    tally: Tally,
    best_ms: Option<u64>,
}

impl QuickTap {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            phase: QuickTapPhase::Idle,
            tally: Tally::default(),
            best_ms: None,
        }
    }

    pub fn phase(&self) -> QuickTapPhase {
        self.phase
    }

    pub fn settings(&self) -> DifficultySettings {
        self.difficulty.settings()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Best winning reaction so far, if any.
    pub fn best_ms(&self) -> Option<u64> {
        self.best_ms
    }

    /// Switch difficulty between rounds.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        if matches!(self.phase, QuickTapPhase::Waiting | QuickTapPhase::Go) {
            return Err(GameError::invalid_state(
                "cannot change difficulty mid-round",
            ));
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Arm a round: draws a uniform delay from the difficulty's wait window
    /// and asks the caller to schedule the go signal.
    pub fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<QuickTapEffect> {
        if matches!(self.phase, QuickTapPhase::Waiting | QuickTapPhase::Go) {
            return Err(GameError::invalid_state("round already in progress"));
        }

        let settings = self.settings();
        let delay_ms =
            random_int(rng, settings.wait_min_ms as i64, settings.wait_max_ms as i64) as u64;

        self.phase = QuickTapPhase::Waiting;
        tracing::debug!("quick tap armed, signal in {}ms", delay_ms);
        Ok(QuickTapEffect::ScheduleSignal { delay_ms })
    }

    /// The scheduled timer fired. Returns false for a stale timer that
    /// arrived after the round already ended.
    pub fn signal(&mut self) -> bool {
        if self.phase == QuickTapPhase::Waiting {
            self.phase = QuickTapPhase::Go;
            true
        } else {
            false
        }
    }

    /// Tap before the signal: a false start, recorded as a loss.
    pub fn false_start(&mut self) -> Result<QuickTapEffect> {
        if self.phase != QuickTapPhase::Waiting {
            return Err(GameError::invalid_state("no signal pending"));
        }

        self.phase = QuickTapPhase::Result;
        self.tally.record_loss();
        Ok(QuickTapEffect::CancelSignal)
    }

    /// Tap after the signal with the measured reaction time.
    pub fn register_tap(&mut self, reaction_ms: u64) -> Result<TapResult> {
        if self.phase != QuickTapPhase::Go {
            return Err(GameError::invalid_state("no round to score"));
        }

        let win = reaction_ms <= self.settings().target_ms;
        let new_best = win && self.best_ms.map_or(true, |best| reaction_ms < best);

        if win {
            self.tally.record_win();
            if new_best {
                self.best_ms = Some(reaction_ms);
            }
        } else {
            self.tally.record_loss();
        }

        self.phase = QuickTapPhase::Result;
        Ok(TapResult {
            reaction_ms,
            win,
            new_best,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn start_round_schedules_a_delay_within_the_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = QuickTap::new(Difficulty::Chill);

        for _ in 0..100 {
            let QuickTapEffect::ScheduleSignal { delay_ms } = game.start_round(&mut rng).unwrap()
            else {
                panic!("expected a schedule effect");
            };
            assert!((900..=2200).contains(&delay_ms));
            assert_eq!(game.phase(), QuickTapPhase::Waiting);
            game.signal();
            game.register_tap(100).unwrap();
        }
    }

    #[test]
    fn false_start_records_a_loss_and_cancels_the_timer() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = QuickTap::new(Difficulty::Chill);
        game.start_round(&mut rng).unwrap();

        let effect = game.false_start().unwrap();
        assert_eq!(effect, QuickTapEffect::CancelSignal);
        assert_eq!(game.phase(), QuickTapPhase::Result);
        assert_eq!(game.tally().losses, 1);
        assert_eq!(game.tally().wins, 0);
    }

    #[test]
    fn stale_signal_after_false_start_is_ignored() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = QuickTap::new(Difficulty::Chill);
        game.start_round(&mut rng).unwrap();
        game.false_start().unwrap();

        assert!(!game.signal());
        assert_eq!(game.phase(), QuickTapPhase::Result);
    }

    #[test]
    fn tap_at_target_wins_and_sets_best() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = QuickTap::new(Difficulty::Pro);

        game.start_round(&mut rng).unwrap();
        assert!(game.signal());
        let result = game.register_tap(320).unwrap();
        assert!(result.win);
        assert!(result.new_best);
        assert_eq!(game.best_ms(), Some(320));

        // A faster win updates the best.
        game.start_round(&mut rng).unwrap();
        game.signal();
        let result = game.register_tap(319).unwrap();
        assert!(result.win && result.new_best);
        assert_eq!(game.best_ms(), Some(319));

        // A slower win keeps it.
        game.start_round(&mut rng).unwrap();
        game.signal();
        let result = game.register_tap(320).unwrap();
        assert!(result.win && !result.new_best);
        assert_eq!(game.best_ms(), Some(319));
    }

    #[test]
    fn slow_tap_loses_and_keeps_best_unset() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = QuickTap::new(Difficulty::Chill);
        game.start_round(&mut rng).unwrap();
        game.signal();

        let result = game.register_tap(421).unwrap();
        assert!(!result.win);
        assert_eq!(game.best_ms(), None);
        assert_eq!(game.tally().losses, 1);
    }

    #[test]
    fn cannot_start_or_retune_mid_round() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = QuickTap::new(Difficulty::Chill);
        game.start_round(&mut rng).unwrap();

        assert!(game.start_round(&mut rng).is_err());
        assert!(game.set_difficulty(Difficulty::Pro).is_err());
    }
}

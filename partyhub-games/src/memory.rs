//! Memory match: 6 token pairs, 12 moves to clear the board.
//!
//! A pair stays face-up for a short pause before it resolves; the pause is
//! an effect executed by the caller, which then feeds `resolve_pair` back
//! in. Only a resolved pair counts as a move.

use crate::error::{GameError, Result};
use crate::score::Tally;
use partyhub_core::shuffled;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TOKENS: [&str; 6] = ["Nova", "Pulse", "Echo", "Orbit", "Flux", "Glint"];
pub const MOVE_LIMIT: u32 = 12;
pub const REVEAL_PAUSE_MS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPhase {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryEffect {
    /// Keep the pair face-up for `delay_ms`, then call `resolve_pair`.
    ScheduleResolve { delay_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip was a no-op (round over, card already up, or pair pending).
    Ignored,
    /// First card of a pair turned face-up.
    Revealed,
    /// Second card turned face-up; caller runs the resolve effect.
    PairUp { resolve: MemoryEffect },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOutcome {
    pub matched: bool,
    pub phase: MemoryPhase,
}

#[derive(Debug)]
pub struct MemoryGame {
    cards: Vec<&'static str>,
    matched: Vec<bool>,
    pending: Vec<usize>,
    moves: u32,
    phase: MemoryPhase,
    tally: Tally,
}

fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let deck: Vec<&'static str> = TOKENS.iter().flat_map(|&t| [t, t]).collect();
    shuffled(&deck, rng)
}

impl MemoryGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let cards = build_deck(rng);
        let matched = vec![false; cards.len()];
        Self {
            cards,
            matched,
            pending: Vec::new(),
            moves: 0,
            phase: MemoryPhase::Playing,
            tally: Tally::default(),
        }
    }

    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    pub fn cards(&self) -> &[&'static str] {
        &self.cards
    }

    pub fn moves_left(&self) -> u32 {
        MOVE_LIMIT.saturating_sub(self.moves)
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    /// Face-up right now: matched, or part of the pending pair.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.is_matched(index) || self.pending.contains(&index)
    }

    /// Turn a card face-up. Flips that would break the rules (third card,
    /// already-revealed card, finished round) are silent no-ops.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome> {
        if index >= self.cards.len() {
            return Err(GameError::CardOutOfBounds {
                index,
                len: self.cards.len(),
            });
        }

        if self.phase != MemoryPhase::Playing
            || self.is_revealed(index)
            || self.pending.len() == 2
        {
            return Ok(FlipOutcome::Ignored);
        }

        self.pending.push(index);
        if self.pending.len() == 2 {
            Ok(FlipOutcome::PairUp {
                resolve: MemoryEffect::ScheduleResolve {
                    delay_ms: REVEAL_PAUSE_MS,
                },
            })
        } else {
            Ok(FlipOutcome::Revealed)
        }
    }

    /// Resolve the pending pair: count the move, lock a match face-up or
    /// flip both back, then settle the round if it ended.
    pub fn resolve_pair(&mut self) -> Result<ResolveOutcome> {
        if self.pending.len() != 2 {
            return Err(GameError::invalid_state("no pair to resolve"));
        }

        let (first, second) = (self.pending[0], self.pending[1]);
        let matched = self.cards[first] == self.cards[second];

        self.moves += 1;
        if matched {
            self.matched[first] = true;
            self.matched[second] = true;
        }
        self.pending.clear();

        // Clearing the board wins even on the last allowed move.
        if self.matched.iter().all(|&m| m) {
            self.phase = MemoryPhase::Won;
            self.tally.record_win();
        } else if self.moves >= MOVE_LIMIT {
            self.phase = MemoryPhase::Lost;
            self.tally.record_loss();
        }

        Ok(ResolveOutcome {
            matched,
            phase: self.phase,
        })
    }

    /// Reshuffle and start over; the tally carries across rounds.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = build_deck(rng);
        self.matched = vec![false; self.cards.len()];
        self.pending.clear();
        self.moves = 0;
        self.phase = MemoryPhase::Playing;
    }
}

//! Party Hub mini-games
//!
//! Four small, independent game state machines: quick-tap reaction, number
//! guessing, rock-paper-scissors, and memory match. Each is an explicit
//! enumerated phase plus event methods; timers are effects requested from
//! the caller's event loop, never scheduled inside game logic. Randomness
//! comes from the injected RNG shared with `partyhub-core`.

pub mod error;
pub mod memory;
pub mod number_guess;
pub mod quick_tap;
pub mod rps;
pub mod score;

pub use error::{GameError, Result};
pub use memory::{FlipOutcome, MemoryEffect, MemoryGame, MemoryPhase, ResolveOutcome};
pub use number_guess::{GuessFeedback, GuessPhase, NumberGuess};
pub use quick_tap::{Difficulty, QuickTap, QuickTapEffect, QuickTapPhase, TapResult};
pub use rps::{Move, RoundResult, RpsMatch, RpsPhase};
pub use score::Tally;

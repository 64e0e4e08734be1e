//! Rock-paper-scissors against a uniformly random CPU, first to 3.

use crate::error::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Round wins needed to take the match.
pub const MATCH_TARGET: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpsPhase {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Tie { both: Move },
    PlayerWins { player: Move, cpu: Move },
    CpuWins { player: Move, cpu: Move },
}

#[derive(Debug)]
pub struct RpsMatch {
    player_score: u32,
    cpu_score: u32,
    ties: u32,
    phase: RpsPhase,
}

impl Default for RpsMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl RpsMatch {
    pub fn new() -> Self {
        Self {
            player_score: 0,
            cpu_score: 0,
            ties: 0,
            phase: RpsPhase::Playing,
        }
    }

    pub fn phase(&self) -> RpsPhase {
        self.phase
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn cpu_score(&self) -> u32 {
        self.cpu_score
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Play one round. The CPU picks uniformly from the three moves; ties
    /// score nothing, and the first side to reach [`MATCH_TARGET`] round
    /// wins locks the match.
    pub fn play<R: Rng + ?Sized>(&mut self, player: Move, rng: &mut R) -> Result<RoundResult> {
        if self.phase != RpsPhase::Playing {
            return Err(GameError::invalid_state("match is over"));
        }

        let cpu = Move::ALL[rng.random_range(0..Move::ALL.len())];

        if player == cpu {
            self.ties += 1;
            return Ok(RoundResult::Tie { both: player });
        }

        let player_won = player.beats() == cpu;
        if player_won {
            self.player_score += 1;
            if self.player_score >= MATCH_TARGET {
                self.phase = RpsPhase::Won;
                tracing::debug!("rps match won {}-{}", self.player_score, self.cpu_score);
            }
            Ok(RoundResult::PlayerWins { player, cpu })
        } else {
            self.cpu_score += 1;
            if self.cpu_score >= MATCH_TARGET {
                self.phase = RpsPhase::Lost;
                tracing::debug!("rps match lost {}-{}", self.player_score, self.cpu_score);
            }
            Ok(RoundResult::CpuWins { player, cpu })
        }
    }

    /// Wipe scores and start a new match.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn beats_relation_is_a_cycle() {
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Paper.beats(), Move::Rock);
        assert_eq!(Move::Scissors.beats(), Move::Paper);
    }

    #[test]
    fn ties_score_nothing() {
        let mut game = RpsMatch::new();
        let mut rng = StdRng::seed_from_u64(0);

        // Play until the first tie shows up; scores must be unchanged by it.
        loop {
            let before = (game.player_score(), game.cpu_score());
            match game.play(Move::Rock, &mut rng).unwrap() {
                RoundResult::Tie { both } => {
                    assert_eq!(both, Move::Rock);
                    assert_eq!((game.player_score(), game.cpu_score()), before);
                    break;
                }
                _ if game.phase() != RpsPhase::Playing => {
                    game.reset();
                }
                _ => {}
            }
        }
        assert!(game.ties() >= 1);
    }

    #[test]
    fn match_locks_at_target_and_rejects_further_picks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = RpsMatch::new();

        while game.phase() == RpsPhase::Playing {
            game.play(Move::Paper, &mut rng).unwrap();
        }

        let decided = game.player_score().max(game.cpu_score());
        assert_eq!(decided, MATCH_TARGET);
        assert!(game.play(Move::Rock, &mut rng).is_err());

        match game.phase() {
            RpsPhase::Won => assert_eq!(game.player_score(), MATCH_TARGET),
            RpsPhase::Lost => assert_eq!(game.cpu_score(), MATCH_TARGET),
            RpsPhase::Playing => unreachable!(),
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = RpsMatch::new();
        while game.phase() == RpsPhase::Playing {
            game.play(Move::Scissors, &mut rng).unwrap();
        }

        game.reset();
        assert_eq!(game.phase(), RpsPhase::Playing);
        assert_eq!(game.player_score(), 0);
        assert_eq!(game.cpu_score(), 0);
        assert_eq!(game.ties(), 0);
    }

    #[test]
    fn cpu_choice_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0u32; 3];

        for _ in 0..30_000 {
            let mut game = RpsMatch::new();
            match game.play(Move::Rock, &mut rng).unwrap() {
                RoundResult::Tie { .. } => counts[0] += 1,
                RoundResult::PlayerWins { cpu, .. } | RoundResult::CpuWins { cpu, .. } => {
                    match cpu {
                        Move::Rock => counts[0] += 1,
                        Move::Paper => counts[1] += 1,
                        Move::Scissors => counts[2] += 1,
                    }
                }
            }
        }

        for count in counts {
            let deviation = (count as i64 - 10_000).abs();
            assert!(deviation < 1_000, "cpu move counts skewed: {:?}", counts);
        }
    }
}

//! Move records: what happened on each successful move.
//!
//! The engine appends one [`MoveRecord`] per executed move. Front ends use
//! the history as a game log ("Ada played pit 3", "player 1 take another
//! turn") without re-deriving anything from board diffs.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// How a move resolved after the last seed was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Last seed landed somewhere without triggering a rule.
    Sown,
    /// Last seed landed in the mover's store; the mover plays again.
    ExtraTurn,
    /// Last seed landed in an empty own pit facing a non-empty pit.
    ///
    /// `seeds` counts everything banked: the captured seeds plus the
    /// triggering seed.
    Captured { seeds: u32 },
}

/// Record of one executed move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number within the game (starts at 1).
    pub number: u32,

    /// Player who moved.
    pub player: PlayerId,

    /// Pit selector as given by the player (1..=6).
    pub pit: u8,

    /// Seeds picked up from the pit.
    pub seeds: u32,

    /// Board index of the cell that received the last seed.
    pub landing: usize,

    /// How the move resolved.
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    /// Check whether this move granted another turn.
    #[must_use]
    pub fn earned_extra_turn(&self) -> bool {
        self.outcome == MoveOutcome::ExtraTurn
    }

    /// Seeds banked by a capture, zero otherwise.
    #[must_use]
    pub fn captured(&self) -> u32 {
        match self.outcome {
            MoveOutcome::Captured { seeds } => seeds,
            _ => 0,
        }
    }
}

//! Sowing and post-sow resolution.
//!
//! These are plain functions over a [`Board`] so they can be exercised
//! without an engine. [`crate::rules::Ayoayo::play_move`] strings them
//! together with validation, turn handling and the end-of-game check.

use tracing::debug;

use crate::core::{next_cell, opposite_pit, Board, MoveOutcome, PlayerId};

/// Result of distributing one pit's seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sowing {
    /// Seeds picked up (and dropped).
    pub seeds: u32,
    /// Board index of the cell that received the last seed.
    pub landing: usize,
}

/// Pick up every seed in `pit` and drop them one per cell in sowing order.
///
/// The opponent's store is skipped on every lap. If the pit is empty
/// nothing moves and the landing cell is the pit itself.
pub fn sow(board: &mut Board, player: PlayerId, pit: usize) -> Sowing {
    let seeds = board.take(pit);
    let skipped = player.opponent_store();

    let mut cell = pit;
    for _ in 0..seeds {
        cell = next_cell(cell);
        if cell == skipped {
            cell = next_cell(cell);
        }
        board.add(cell, 1);
    }

    debug!(%player, pit, seeds, landing = cell, "sowed");
    Sowing {
        seeds,
        landing: cell,
    }
}

/// Apply the extra-turn or capture rule for a move that ended on `landing`.
///
/// Extra turn takes priority: landing in the mover's store never captures.
/// A capture needs the landing pit to be the mover's own, to hold exactly
/// the one seed just dropped, and to face a non-empty pit.
pub fn resolve_landing(board: &mut Board, player: PlayerId, landing: usize) -> MoveOutcome {
    if landing == player.store() {
        return MoveOutcome::ExtraTurn;
    }

    if !player.owns_pit(landing) || board.get(landing) != 1 {
        return MoveOutcome::Sown;
    }

    match opposite_pit(landing) {
        Some(opposite) if board.get(opposite) > 0 => {
            let seeds = board.take(opposite).saturating_add(board.take(landing));
            board.add(player.store(), seeds);
            MoveOutcome::Captured { seeds }
        }
        _ => MoveOutcome::Sown,
    }
}

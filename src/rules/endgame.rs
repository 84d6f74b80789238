//! End-of-game detection, the final sweep and winner messages.
//!
//! The game ends as soon as either player's six pits are all empty. The
//! player who still has seeds on their side banks them, then the stores are
//! compared.

use tracing::info;

use super::engine::{Ayoayo, GameResult, GameStatus};
use crate::core::PlayerId;

/// Message returned by [`Ayoayo::winner_message`] while the game runs.
pub const IN_PROGRESS_MESSAGE: &str = "Game has not ended";

impl Ayoayo {
    /// Check whether all six of a player's pits are empty.
    #[must_use]
    pub fn is_side_empty(&self, player: PlayerId) -> bool {
        self.board.is_side_empty(player)
    }

    /// End the game if either side is empty.
    ///
    /// The first time this finds an empty side it sweeps the other side into
    /// its owner's store and fixes the result. Later calls change nothing.
    /// Returns whether the game is over.
    pub fn check_game_end_conditions(&mut self) -> bool {
        if self.result.is_some() {
            return true;
        }

        let sweeper = if self.is_side_empty(PlayerId::ONE) {
            PlayerId::TWO
        } else if self.is_side_empty(PlayerId::TWO) {
            PlayerId::ONE
        } else {
            return false;
        };

        let swept = self.board.sweep_side(sweeper);
        let scores = self.scores();
        let result = GameResult::from_scores(scores);
        info!(
            %sweeper,
            swept,
            player_1 = scores[0],
            player_2 = scores[1],
            %result,
            "game over"
        );
        self.result = Some(result);
        true
    }

    /// Game status, ending the game first if the active player has no seeds.
    ///
    /// Only the active player's side is looked at here. An empty side for
    /// the other player is picked up by the next move.
    pub fn resolve_winner(&mut self) -> GameStatus {
        if self.result.is_none() && self.is_side_empty(self.active_player) {
            self.check_game_end_conditions();
        }
        self.status()
    }

    /// Game status as of the last move, without any end-of-game check.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::Over(result),
            None => GameStatus::InProgress,
        }
    }

    /// Human-readable status after [`Ayoayo::resolve_winner`].
    ///
    /// `"Game has not ended"`, `"Winner is player 1: Ada"` or `"It's a tie"`.
    pub fn winner_message(&mut self) -> String {
        match self.resolve_winner() {
            GameStatus::InProgress => IN_PROGRESS_MESSAGE.to_string(),
            GameStatus::Over(result) => self.describe_result(result),
        }
    }

    /// Describe a result using player names where they are registered.
    #[must_use]
    pub fn describe_result(&self, result: GameResult) -> String {
        match result {
            GameResult::Winner(player) => match self.player_name(player) {
                Some(name) => format!("{result}: {name}"),
                None => result.to_string(),
            },
            GameResult::Tie => result.to_string(),
        }
    }
}

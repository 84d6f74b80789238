//! # ayoayo
//!
//! Rules engine for Ayoayo, a two-player Mancala-family sowing-and-capture
//! game.
//!
//! ## Rules in brief
//!
//! Each player owns six pits and a store; every pit starts with four seeds.
//! A move picks up all seeds from one of your pits and sows them one per
//! cell around the board, skipping the opponent's store.
//!
//! - Last seed in your own store: you move again.
//! - Last seed in an empty pit of yours facing a non-empty pit: both pits'
//!   seeds go to your store.
//! - When either side runs out of seeds, the other side banks what it has
//!   left and the fuller store wins.
//!
//! ## Example
//!
//! ```
//! use ayoayo::core::PlayerId;
//! use ayoayo::rules::Ayoayo;
//!
//! let mut game = Ayoayo::new();
//! game.create_player("Ada").unwrap();
//! game.create_player("Bola").unwrap();
//!
//! let board = game.play_move(PlayerId::ONE, 3).unwrap();
//! assert_eq!(board.to_string(), "[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]");
//! assert_eq!(game.extra_turn_advisory(), "player 1 take another turn");
//! assert_eq!(game.winner_message(), "Game has not ended");
//! ```
//!
//! ## Modules
//!
//! - `core`: players, board, configuration, move records
//! - `rules`: sowing, captures, turns, end of game
//! - `view`: text renderings of the board

pub mod core;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSnapshot, GameConfig, MoveOutcome, MoveRecord, Player, PlayerId,
};

pub use crate::rules::{
    Ayoayo, ConfigError, GameResult, GameStatus, InvalidPlayerId, MoveError, RosterError,
};

pub use crate::view::{BoardView, Layout};

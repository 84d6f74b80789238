//! Core types: players, board, configuration, move records.
//!
//! Nothing in here knows the rules of the game. Sowing, capturing and
//! scoring live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod config;
pub mod player;

pub use action::{MoveOutcome, MoveRecord};
pub use board::{
    next_cell, opposite_pit, Board, BoardSnapshot, BOARD_SIZE, DEFAULT_SEEDS_PER_PIT,
    PITS_PER_SIDE, SIDE_LEN,
};
pub use config::GameConfig;
pub use player::{Player, PlayerId, PLAYER_COUNT};

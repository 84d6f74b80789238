//! Rules of Ayoayo.
//!
//! - `sowing`: pickup, sowing with the store-skip rule, capture and extra turn
//! - `engine`: the [`Ayoayo`] state machine driving whole moves and turns
//! - `endgame`: empty-side detection, final sweep, winner messages
//! - `error`: refused moves and registry/config errors

pub mod endgame;
pub mod engine;
pub mod error;
pub mod sowing;

pub use endgame::IN_PROGRESS_MESSAGE;
pub use engine::{Ayoayo, GameResult, GameStatus};
pub use error::{ConfigError, InvalidPlayerId, MoveError, RosterError};
pub use sowing::{resolve_landing, sow, Sowing};

use crate::core::PlayerId;

/// Reasons a move is refused. None of them mutate the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Game is ended")]
    GameOver,

    #[error("Invalid number for pit index")]
    InvalidPitIndex { pit: u8 },

    #[error("Chosen pit is empty. Please select a pit with seeds.")]
    EmptyPit { player: PlayerId, pit: u8 },
}

/// Errors from the player registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("a game holds at most {capacity} players")]
    Full { capacity: usize },
}

/// A raw player index outside `0..PLAYER_COUNT`, e.g. from untrusted JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("player index {index} is out of range")]
pub struct InvalidPlayerId {
    pub index: u8,
}

/// Errors from validating a [`crate::core::GameConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Invalid(String),
}

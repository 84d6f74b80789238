//! The Ayoayo engine: board, players, turn and result state in one value.
//!
//! A game is driven entirely through method calls: create two players, then
//! call [`Ayoayo::play_move`] repeatedly. After each move the caller can read
//! the board, the extra-turn advisory and the winner status.
//!
//! The engine does not enforce turn order. `play_move` trusts the player it
//! is given and makes them the active player, even when the move is then
//! refused for an invalid or empty pit. Front ends that want strict turns
//! should only offer moves to [`Ayoayo::active_player`].

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::error::{ConfigError, MoveError, RosterError};
use super::sowing::{resolve_landing, sow};
use crate::core::{
    Board, BoardSnapshot, GameConfig, MoveOutcome, MoveRecord, Player, PlayerId, BOARD_SIZE,
    PITS_PER_SIDE, PLAYER_COUNT,
};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has more seeds in their store.
    Winner(PlayerId),
    /// Both stores hold the same number of seeds.
    Tie,
}

impl GameResult {
    /// Decide the result from final store counts, indexed by player.
    #[must_use]
    pub fn from_scores(scores: [u32; PLAYER_COUNT]) -> Self {
        let [one, two] = scores;
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "Winner is {player}"),
            GameResult::Tie => write!(f, "It's a tie"),
        }
    }
}

/// Whether a game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Over(GameResult),
}

/// The Ayoayo rules engine.
///
/// Owns the board, the players, whose turn it is and the final result.
/// Cloning is cheap: the board is a fixed array and the move history is a
/// persistent vector.
#[derive(Clone, Debug)]
pub struct Ayoayo {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) players: Vec<Player>,
    pub(super) active_player: PlayerId,
    /// Set exactly once, when the game ends.
    pub(super) result: Option<GameResult>,
    pub(super) extra_turn_advisory: String,
    pub(super) history: Vector<MoveRecord>,
}

impl Default for Ayoayo {
    fn default() -> Self {
        Self::new()
    }
}

impl Ayoayo {
    /// Create a standard game: four seeds per pit, player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(GameConfig::default(), Board::default())
    }

    /// Create a game from a custom configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.seeds_per_pit);
        Ok(Self::from_parts(config, board))
    }

    /// Create a game starting from an arbitrary position.
    ///
    /// The game is not checked for being over until the next move or
    /// winner query, the same as a position reached by play.
    #[must_use]
    pub fn with_board(board: Board, active_player: PlayerId) -> Self {
        let mut game = Self::from_parts(GameConfig::default(), board);
        game.active_player = active_player;
        game
    }

    fn from_parts(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            players: Vec::with_capacity(PLAYER_COUNT),
            active_player: PlayerId::ONE,
            result: None,
            extra_turn_advisory: String::new(),
            history: Vector::new(),
        }
    }

    // === Player Registry ===

    /// Register the next player.
    ///
    /// The first call creates player 1, the second player 2. A third call
    /// fails and leaves the roster untouched.
    pub fn create_player(&mut self, name: impl Into<String>) -> Result<&Player, RosterError> {
        let id = PlayerId::new(self.players.len() as u8).ok_or(RosterError::Full {
            capacity: PLAYER_COUNT,
        })?;
        let player = Player::new(id, name);
        debug!(%id, name = player.name(), "player created");
        self.players.push(player);
        Ok(&self.players[id.index()])
    }

    /// Registered players, in creation order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a registered player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Display name of a registered player.
    #[must_use]
    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.player(id).map(Player::name)
    }

    // === Moves ===

    /// Play the pit `pit` (1..=6, counted on the player's own side) for
    /// `player`.
    ///
    /// On success returns the board after the move, including any capture,
    /// end-of-game sweep and turn switch. Refused moves leave the board
    /// unchanged, but see the module docs for the active player.
    pub fn play_move(&mut self, player: PlayerId, pit: u8) -> Result<BoardSnapshot, MoveError> {
        self.extra_turn_advisory.clear();

        let result = self.execute_move(player, pit);
        if let Err(err) = &result {
            debug!(%player, pit, %err, "move refused");
        }
        result
    }

    fn execute_move(&mut self, player: PlayerId, pit: u8) -> Result<BoardSnapshot, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        // Assigned before the pit is validated and not rolled back on error.
        self.active_player = player;

        let index = player
            .pit_index(pit)
            .ok_or(MoveError::InvalidPitIndex { pit })?;
        if self.board.get(index) == 0 {
            return Err(MoveError::EmptyPit { player, pit });
        }

        let sowing = sow(&mut self.board, player, index);
        let outcome = resolve_landing(&mut self.board, player, sowing.landing);

        match outcome {
            MoveOutcome::ExtraTurn => {
                info!(%player, "extra turn");
                self.extra_turn_advisory = format!("{player} take another turn");
            }
            MoveOutcome::Captured { seeds } => {
                info!(%player, seeds, landing = sowing.landing, "capture");
                self.active_player = self.active_player.other();
            }
            MoveOutcome::Sown => {
                self.active_player = self.active_player.other();
            }
        }

        self.history.push_back(MoveRecord {
            number: self.history.len() as u32 + 1,
            player,
            pit,
            seeds: sowing.seeds,
            landing: sowing.landing,
            outcome,
        });

        self.check_game_end_conditions();
        Ok(self.board.snapshot())
    }

    /// Pit selectors (1..=6) the player could sow from right now.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_pits(&self, player: PlayerId) -> SmallVec<[u8; PITS_PER_SIDE]> {
        if self.is_game_over() {
            return SmallVec::new();
        }
        (1..=PITS_PER_SIDE as u8)
            .filter(|&pit| {
                player
                    .pit_index(pit)
                    .is_some_and(|index| self.board.get(index) > 0)
            })
            .collect()
    }

    /// Advisory left by the last `play_move` call, e.g.
    /// `"player 1 take another turn"`. Empty if the last call earned no
    /// extra turn.
    #[must_use]
    pub fn extra_turn_advisory(&self) -> &str {
        &self.extra_turn_advisory
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seeds in a board cell, or `None` for an index past the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<u32> {
        (index < BOARD_SIZE).then(|| self.board.get(index))
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Every move executed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current store counts, indexed by player.
    #[must_use]
    pub fn scores(&self) -> [u32; PLAYER_COUNT] {
        [
            self.board.store(PlayerId::ONE),
            self.board.store(PlayerId::TWO),
        ]
    }
}

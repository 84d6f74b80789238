//! Board representation: 14 seed counts in sowing order.
//!
//! ```text
//!          12  11  10   9   8   7        <- player 2's pits
//!     13                           6     <- stores (P2 left, P1 right)
//!           0   1   2   3   4   5        <- player 1's pits
//! ```
//!
//! Sowing walks the indices upward and wraps from 13 back to 0.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;

/// Cells per side: six pits plus the store.
pub const SIDE_LEN: usize = PITS_PER_SIDE + 1;

/// Total number of cells on the board.
pub const BOARD_SIZE: usize = 2 * SIDE_LEN;

/// Seeds placed in each pit at the start of a standard game.
pub const DEFAULT_SEEDS_PER_PIT: u32 = 4;

/// Index of the cell after `index` in sowing order.
#[must_use]
pub const fn next_cell(index: usize) -> usize {
    (index + 1) % BOARD_SIZE
}

/// The pit facing `index` across the board.
///
/// Pit `i` on one side faces pit `5 - i` on the other, which on the board
/// array works out to `12 - index` for both sides. Stores face nothing.
#[must_use]
pub const fn opposite_pit(index: usize) -> Option<usize> {
    if PlayerId::ONE.owns_pit(index) || PlayerId::TWO.owns_pit(index) {
        Some(2 * PITS_PER_SIDE - index)
    } else {
        None
    }
}

fn saturating_sum(cells: &[u32]) -> u32 {
    cells.iter().fold(0, |acc, &seeds| acc.saturating_add(seeds))
}

/// The Ayoayo board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u32; BOARD_SIZE],
}

impl Board {
    /// Create a board with `seeds_per_pit` seeds in every pit and empty stores.
    #[must_use]
    pub fn new(seeds_per_pit: u32) -> Self {
        let mut cells = [seeds_per_pit; BOARD_SIZE];
        for player in PlayerId::all() {
            cells[player.store()] = 0;
        }
        Self { cells }
    }

    /// Create a board from raw cell values.
    ///
    /// Mostly useful for setting up positions in tests.
    #[must_use]
    pub const fn from_cells(cells: [u32; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Seeds in a cell.
    ///
    /// # Panics
    ///
    /// Panics if `index >= BOARD_SIZE`.
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        self.cells[index]
    }

    /// All cells in board order.
    #[must_use]
    pub fn cells(&self) -> &[u32; BOARD_SIZE] {
        &self.cells
    }

    /// Total seeds on the board, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        saturating_sum(&self.cells)
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.cells[player.store()]
    }

    /// Seed counts of a player's six pits.
    #[must_use]
    pub fn pits(&self, player: PlayerId) -> &[u32] {
        &self.cells[player.pits()]
    }

    /// Seeds still in play on a player's side (pits only).
    #[must_use]
    pub fn seeds_on_side(&self, player: PlayerId) -> u32 {
        saturating_sum(self.pits(player))
    }

    /// Check whether all of a player's pits are empty.
    #[must_use]
    pub fn is_side_empty(&self, player: PlayerId) -> bool {
        self.pits(player).iter().all(|&seeds| seeds == 0)
    }

    /// Take every seed out of a cell, leaving it empty.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.cells[index])
    }

    /// Add seeds to a cell. A cell holds at most `u32::MAX` seeds.
    pub(crate) fn add(&mut self, index: usize, seeds: u32) {
        self.cells[index] = self.cells[index].saturating_add(seeds);
    }

    /// Move every seed in a player's pits into that player's store.
    ///
    /// Returns the number of seeds moved.
    pub(crate) fn sweep_side(&mut self, player: PlayerId) -> u32 {
        let swept = player
            .pits()
            .fold(0u32, |acc, pit| acc.saturating_add(self.take(pit)));
        self.add(player.store(), swept);
        swept
    }

    /// Immutable copy of the current cells, for returning to callers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { cells: self.cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SEEDS_PER_PIT)
    }
}

/// Board state handed back after a move.
///
/// Displays as player 1's seven cells followed by player 2's seven cells:
/// `[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: [u32; BOARD_SIZE],
}

impl BoardSnapshot {
    #[must_use]
    pub fn cells(&self) -> &[u32; BOARD_SIZE] {
        &self.cells
    }

    /// One player's half of the board: six pits then the store.
    #[must_use]
    pub fn side(&self, player: PlayerId) -> &[u32] {
        let start = player.index() * SIDE_LEN;
        &self.cells[start..start + SIDE_LEN]
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, seeds) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{seeds}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::default();
        assert_eq!(board.total_seeds(), 48);
        assert_eq!(board.store(PlayerId::ONE), 0);
        assert_eq!(board.store(PlayerId::TWO), 0);
        assert_eq!(board.pits(PlayerId::ONE), &[4; 6]);
        assert_eq!(board.pits(PlayerId::TWO), &[4; 6]);
    }

    #[test]
    fn test_custom_seed_count() {
        let board = Board::new(3);
        assert_eq!(board.total_seeds(), 36);
        assert_eq!(board.get(6), 0);
        assert_eq!(board.get(13), 0);
    }

    #[test]
    fn test_next_cell_wraps() {
        assert_eq!(next_cell(0), 1);
        assert_eq!(next_cell(12), 13);
        assert_eq!(next_cell(13), 0);
    }

    #[test]
    fn test_opposite_pit() {
        assert_eq!(opposite_pit(0), Some(12));
        assert_eq!(opposite_pit(5), Some(7));
        assert_eq!(opposite_pit(7), Some(5));
        assert_eq!(opposite_pit(12), Some(0));
        assert_eq!(opposite_pit(6), None);
        assert_eq!(opposite_pit(13), None);
    }

    #[test]
    fn test_opposite_pit_is_symmetric() {
        for pit in PlayerId::ONE.pits().chain(PlayerId::TWO.pits()) {
            let opposite = opposite_pit(pit).unwrap();
            assert_eq!(opposite_pit(opposite), Some(pit));
        }
    }

    #[test]
    fn test_side_empty() {
        let mut cells = [0; BOARD_SIZE];
        cells[6] = 20;
        cells[8] = 28;
        let board = Board::from_cells(cells);
        assert!(board.is_side_empty(PlayerId::ONE));
        assert!(!board.is_side_empty(PlayerId::TWO));
        assert_eq!(board.seeds_on_side(PlayerId::TWO), 28);
    }

    #[test]
    fn test_sweep_side() {
        let mut board = Board::default();
        let swept = board.sweep_side(PlayerId::TWO);
        assert_eq!(swept, 24);
        assert!(board.is_side_empty(PlayerId::TWO));
        assert_eq!(board.store(PlayerId::TWO), 24);
        assert_eq!(board.total_seeds(), 48);
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = Board::default().snapshot();
        assert_eq!(
            snapshot.to_string(),
            "[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]"
        );
        assert_eq!(snapshot.side(PlayerId::TWO), &[4, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = Board::new(2).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }

    #[test]
    fn test_huge_cells_saturate() {
        let mut cells = [0; BOARD_SIZE];
        cells[0] = u32::MAX;
        cells[1] = 5;
        cells[6] = u32::MAX - 1;
        let mut board = Board::from_cells(cells);

        assert_eq!(board.total_seeds(), u32::MAX);
        assert_eq!(board.seeds_on_side(PlayerId::ONE), u32::MAX);

        assert_eq!(board.sweep_side(PlayerId::ONE), u32::MAX);
        assert_eq!(board.store(PlayerId::ONE), u32::MAX);
        assert!(board.is_side_empty(PlayerId::ONE));
    }
}

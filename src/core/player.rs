//! Player identification and the player -> board side mapping.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two Ayoayo players. Internally
//! 0-based; the 1-based number players see is available via
//! [`PlayerId::number`] and accepted by [`PlayerId::from_number`].
//!
//! ## Sides
//!
//! Each player owns six pits and a store. The mapping is a pure function of
//! the id, so nothing holds pointers into the board:
//!
//! | player | pits    | store |
//! |--------|---------|-------|
//! | 1      | 0..=5   | 6     |
//! | 2      | 7..=12  | 13    |

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::board::{PITS_PER_SIDE, SIDE_LEN};
use crate::rules::InvalidPlayerId;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: player 1 is `PlayerId(0)`. Serialized as the
/// raw index; deserializing anything but 0 or 1 fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1, who moves first.
    pub const ONE: PlayerId = PlayerId(0);

    /// Player 2.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a player ID from a 0-based index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PLAYER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a player ID from the 1-based player number.
    ///
    /// ```
    /// use ayoayo::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(1), Some(PlayerId::ONE));
    /// assert_eq!(PlayerId::from_number(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the player number as shown to humans (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }

    /// Board indices of this player's six pits, in sowing order.
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        let start = self.index() * SIDE_LEN;
        start..start + PITS_PER_SIDE
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        self.index() * SIDE_LEN + PITS_PER_SIDE
    }

    /// Board index of the opponent's store, which this player never sows into.
    #[must_use]
    pub const fn opponent_store(self) -> usize {
        self.other().store()
    }

    /// Check whether a board index is one of this player's pits.
    #[must_use]
    pub const fn owns_pit(self, index: usize) -> bool {
        let pits = self.pits();
        index >= pits.start && index < pits.end
    }

    /// Map a 1-based pit selector (1..=6) to its board index.
    ///
    /// Returns `None` when the selector is out of range.
    #[must_use]
    pub const fn pit_index(self, selector: u8) -> Option<usize> {
        if selector >= 1 && (selector as usize) <= PITS_PER_SIDE {
            Some(self.pits().start + selector as usize - 1)
        } else {
            None
        }
    }

    /// The `(pits, store)` pair for this player.
    #[must_use]
    pub const fn details(self) -> (Range<usize>, usize) {
        (self.pits(), self.store())
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(InvalidPlayerId { index })
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// A registered player.
///
/// Players are created through [`crate::rules::Ayoayo::create_player`] and
/// never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name chosen at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

//! Plain-text renderings of a game for terminals and logs.
//!
//! Two layouts are available:
//!
//! - [`Layout::Listing`]: the compact console printout, player 2 first.
//! - [`Layout::Table`]: the board as it sits between the players, player 2's
//!   pits right-to-left along the top, stores at the ends, player 1's pits
//!   left-to-right along the bottom with their selector numbers.

use std::fmt;

use crate::core::{PlayerId, PITS_PER_SIDE};
use crate::rules::Ayoayo;

/// Shown instead of the listing until both players are registered.
pub const MISSING_PLAYERS_MESSAGE: &str = "Need two players to show the board properly!";

const CELL_WIDTH: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Listing,
    Table,
}

/// Borrowed view of a game that renders through `Display`.
///
/// ```
/// use ayoayo::rules::Ayoayo;
/// use ayoayo::view::{BoardView, Layout};
///
/// let mut game = Ayoayo::new();
/// game.create_player("Ada").unwrap();
/// game.create_player("Bola").unwrap();
///
/// let text = BoardView::new(&game, Layout::Listing).to_string();
/// assert!(text.contains("Ada (Player 1):"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    game: &'a Ayoayo,
    layout: Layout,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Ayoayo, layout: Layout) -> Self {
        Self { game, layout }
    }

    /// Registered name, or the configured fallback.
    fn name(&self, player: PlayerId) -> &'a str {
        self.game
            .player_name(player)
            .unwrap_or_else(|| self.game.config().default_name(player))
    }

    fn fmt_listing(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.game.players().len() < 2 {
            return writeln!(f, "{MISSING_PLAYERS_MESSAGE}");
        }

        let board = self.game.board();
        writeln!(f)?;
        for player in [PlayerId::TWO, PlayerId::ONE] {
            writeln!(f, "{} (Player {}):", self.name(player), player.number())?;
            writeln!(f, " Pits: {:?}", board.pits(player))?;
            writeln!(f, " Store: {}", board.store(player))?;
        }
        writeln!(f, "{}", "-".repeat(20))
    }

    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.game.board();
        let pit_row_width = PITS_PER_SIDE * CELL_WIDTH;
        let margin = " ".repeat(CELL_WIDTH);

        let top = PlayerId::TWO;
        let bottom = PlayerId::ONE;

        writeln!(f, "{margin}{:^pit_row_width$}", self.name(top))?;
        f.write_str(&margin)?;
        fmt_pit_row(f, board.pits(top).iter().rev())?;

        writeln!(
            f,
            "[{:>2}]{:pit_row_width$}[{:>2}]",
            board.store(top),
            "",
            board.store(bottom)
        )?;

        f.write_str(&margin)?;
        fmt_pit_row(f, board.pits(bottom).iter())?;

        f.write_str(&margin)?;
        for selector in 1..=PITS_PER_SIDE {
            if selector > 1 {
                f.write_str(" ")?;
            }
            write!(f, "{selector:^4}")?;
        }
        writeln!(f)?;
        writeln!(f, "{margin}{:^pit_row_width$}", self.name(bottom))
    }
}

/// One `[ n]` cell per pit, space separated, ending the line.
fn fmt_pit_row<'b>(
    f: &mut fmt::Formatter<'_>,
    pits: impl Iterator<Item = &'b u32>,
) -> fmt::Result {
    for (i, seeds) in pits.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "[{seeds:>2}]")?;
    }
    writeln!(f)
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Layout::Listing => self.fmt_listing(f),
            Layout::Table => self.fmt_table(f),
        }
    }
}

//! Move execution tests.
//!
//! These tests drive the engine through its public API and check the
//! sowing, skip, extra-turn and capture rules together with the error paths.

use ayoayo::core::{Board, MoveOutcome, PlayerId, BOARD_SIZE};
use ayoayo::rules::{Ayoayo, MoveError};

fn new_game() -> Ayoayo {
    let mut game = Ayoayo::new();
    game.create_player("Ada").unwrap();
    game.create_player("Bola").unwrap();
    game
}

fn game_at(cells: [u32; BOARD_SIZE], active: PlayerId) -> Ayoayo {
    let mut game = Ayoayo::with_board(Board::from_cells(cells), active);
    game.create_player("Ada").unwrap();
    game.create_player("Bola").unwrap();
    game
}

// =============================================================================
// Sowing and Extra Turns
// =============================================================================

/// Player 1's third pit holds four seeds and reaches the store exactly.
#[test]
fn test_extra_turn_from_initial_board() {
    let mut game = new_game();

    let board = game.play_move(PlayerId::ONE, 3).unwrap();

    assert_eq!(board.cells(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(game.active_player(), PlayerId::ONE);
    assert_eq!(game.extra_turn_advisory(), "player 1 take another turn");
    assert_eq!(game.history()[0].outcome, MoveOutcome::ExtraTurn);
}

/// Player 2's third pit also reaches their own store.
#[test]
fn test_extra_turn_for_player_two() {
    let mut game = new_game();
    game.play_move(PlayerId::ONE, 1).unwrap();

    let board = game.play_move(PlayerId::TWO, 3).unwrap();

    assert_eq!(board.side(PlayerId::TWO), &[4, 4, 0, 5, 5, 5, 1]);
    assert_eq!(game.active_player(), PlayerId::TWO);
    assert_eq!(game.extra_turn_advisory(), "player 2 take another turn");
}

/// Turns alternate after a plain sow.
#[test]
fn test_turn_alternates() {
    let mut game = new_game();

    game.play_move(PlayerId::ONE, 1).unwrap();
    assert_eq!(game.active_player(), PlayerId::TWO);
    assert_eq!(game.extra_turn_advisory(), "");

    game.play_move(PlayerId::TWO, 1).unwrap();
    assert_eq!(game.active_player(), PlayerId::ONE);
}

/// The engine lets a player move out of turn and makes them active.
#[test]
fn test_out_of_turn_move_is_allowed() {
    let mut game = new_game();
    assert_eq!(game.active_player(), PlayerId::ONE);

    game.play_move(PlayerId::TWO, 1).unwrap();

    assert_eq!(game.active_player(), PlayerId::ONE);
    assert_eq!(game.history()[0].player, PlayerId::TWO);
}

/// Long sowings skip the opponent's store on every lap.
#[test]
fn test_skip_opponent_store_on_multiple_laps() {
    let mut cells = [0; BOARD_SIZE];
    cells[0] = 27;
    cells[13] = 5;
    cells[7] = 16;
    let mut game = game_at(cells, PlayerId::ONE);

    let board = game.play_move(PlayerId::ONE, 1).unwrap();

    assert_eq!(board.cells()[13], 5);
    assert_eq!(board.cells().iter().sum::<u32>(), 48);
    // 27 seeds over 13 targets: two full laps plus one seed on cell 1.
    assert_eq!(game.history()[0].landing, 1);
    assert_eq!(board.cells()[6], 2);
}

// =============================================================================
// Captures
// =============================================================================

/// Last seed in an empty own pit takes the facing pit's seeds.
#[test]
fn test_capture_direct() {
    let mut game = game_at(
        [0, 2, 0, 0, 0, 0, 0, 4, 4, 9, 4, 4, 4, 17],
        PlayerId::ONE,
    );

    let board = game.play_move(PlayerId::ONE, 2).unwrap();

    // Sows into 2 and 3; pit 3 faces pit 9.
    assert_eq!(board.cells()[3], 0);
    assert_eq!(board.cells()[9], 0);
    assert_eq!(board.cells()[6], 10);
    assert_eq!(game.history()[0].outcome, MoveOutcome::Captured { seeds: 10 });
    assert_eq!(game.active_player(), PlayerId::TWO);
}

/// Capture into pit 0 after wrapping past the skipped store.
#[test]
fn test_capture_after_wraparound() {
    let mut game = game_at(
        [0, 0, 1, 0, 0, 8, 0, 3, 3, 3, 3, 3, 5, 19],
        PlayerId::ONE,
    );

    let board = game.play_move(PlayerId::ONE, 6).unwrap();

    // 6, 7..=12, skip 13, land on 0. Pit 12 held 5 and received one more.
    assert_eq!(board.cells()[0], 0);
    assert_eq!(board.cells()[12], 0);
    assert_eq!(board.cells()[13], 19);
    assert_eq!(board.cells()[6], 1 + 7);
    assert_eq!(game.history()[0].outcome, MoveOutcome::Captured { seeds: 7 });
    assert!(!game.is_game_over());
}

/// Player 2 captures with the mirrored mapping.
#[test]
fn test_capture_player_two() {
    let mut game = game_at(
        [4, 4, 4, 4, 6, 4, 10, 1, 0, 0, 0, 0, 1, 10],
        PlayerId::TWO,
    );

    let board = game.play_move(PlayerId::TWO, 1).unwrap();

    // Pit 7 sows into 8, which faces pit 4.
    assert_eq!(board.cells()[8], 0);
    assert_eq!(board.cells()[4], 0);
    assert_eq!(board.cells()[13], 10 + 7);
    assert!(!game.is_game_over());
}

/// No capture when the facing pit is empty.
#[test]
fn test_no_capture_against_empty_pit() {
    let mut game = game_at(
        [0, 2, 0, 0, 0, 0, 10, 4, 4, 0, 4, 4, 4, 16],
        PlayerId::ONE,
    );

    let board = game.play_move(PlayerId::ONE, 2).unwrap();

    assert_eq!(board.cells()[3], 1);
    assert_eq!(board.cells()[6], 10);
    assert_eq!(game.history()[0].outcome, MoveOutcome::Sown);
}

// =============================================================================
// Refused Moves
// =============================================================================

/// Selectors 0 and 7 are rejected for both players without touching the board.
#[test]
fn test_invalid_pit_selectors() {
    for player in PlayerId::all() {
        for pit in [0, 7, u8::MAX] {
            let mut game = new_game();
            let before = *game.board();

            assert_eq!(
                game.play_move(player, pit),
                Err(MoveError::InvalidPitIndex { pit })
            );
            assert_eq!(game.board(), &before);
            assert!(game.history().is_empty());
        }
    }
}

/// An empty pit is refused, but the caller has already become active.
#[test]
fn test_empty_pit_refused() {
    let mut game = new_game();
    game.play_move(PlayerId::ONE, 1).unwrap();
    assert_eq!(game.active_player(), PlayerId::TWO);
    let before = *game.board();

    // Player 1's first pit was emptied above.
    assert_eq!(
        game.play_move(PlayerId::ONE, 1),
        Err(MoveError::EmptyPit {
            player: PlayerId::ONE,
            pit: 1
        })
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.active_player(), PlayerId::ONE);
}

/// Moves after the end are refused and change nothing.
#[test]
fn test_move_after_game_over() {
    let mut game = game_at(
        [0, 0, 0, 0, 0, 1, 20, 2, 2, 2, 2, 2, 2, 15],
        PlayerId::ONE,
    );
    game.play_move(PlayerId::ONE, 6).unwrap();
    assert!(game.is_game_over());
    let before = *game.board();
    let active = game.active_player();

    assert_eq!(game.play_move(PlayerId::TWO, 1), Err(MoveError::GameOver));
    assert_eq!(game.board(), &before);
    assert_eq!(game.active_player(), active);
    assert!(game.legal_pits(PlayerId::TWO).is_empty());
}

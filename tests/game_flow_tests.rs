//! Game flow integration tests
//!
//! Drives full flows through the public API:
//! - Turn alternation over an opening sequence
//! - Captures
//! - Pawn promotion through the move surface
//! - Check detection and escape
//! - Snapshot save/open round trips

use std::sync::Once;

use chess_core::{
    Board, ChessError, ChessGame, GameState, Piece, PieceKind, Player, Position,
};

/// Install a tracing subscriber once so `RUST_LOG` surfaces engine logs
/// during test runs.
fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Shorthand for building positions from (file, rank) pairs
fn sq(file: u8, rank: u8) -> Position {
    Position::new(file, rank)
}

#[test]
fn test_opening_sequence_alternates_turns_and_captures() {
    init_tracing();
    let mut game = ChessGame::new();
    assert_eq!(game.state().turn(), Player::White);

    // White and black push their center pawns, then white captures.
    game.try_move(Player::White, sq(4, 6), sq(4, 4), None)
        .expect("White's double pawn push is legal");
    assert_eq!(game.state().turn(), Player::Black);

    game.try_move(Player::Black, sq(3, 1), sq(3, 3), None)
        .expect("Black's double pawn push is legal");
    assert_eq!(game.state().turn(), Player::White);

    game.try_move(Player::White, sq(4, 4), sq(3, 3), None)
        .expect("The diagonal capture is legal");

    assert_eq!(game.state().board().piece_count(), 31, "One pawn captured");
    let capturer = game.state().board().piece_at(sq(3, 3)).unwrap();
    assert_eq!(capturer.owner, Player::White);
    assert_eq!(capturer.kind, PieceKind::Pawn);
    assert!(capturer.has_moved);
}

#[test]
fn test_rejected_attempts_leave_state_untouched() {
    init_tracing();
    let mut game = ChessGame::new();
    let before = game.snapshot();

    // Out of turn.
    assert!(matches!(
        game.try_move(Player::Black, sq(4, 1), sq(4, 2), None),
        Err(ChessError::NotYourTurn { .. })
    ));

    // Empty origin.
    assert!(matches!(
        game.try_move(Player::White, sq(4, 3), sq(4, 2), None),
        Err(ChessError::PieceNotFound { .. })
    ));

    // Illegal destination: a knight cannot move straight ahead.
    assert!(matches!(
        game.try_move(Player::White, sq(1, 7), sq(1, 5), None),
        Err(ChessError::IllegalMove { .. })
    ));

    assert_eq!(game.state(), &before);
}

#[test]
fn test_promotion_through_the_move_surface() {
    init_tracing();
    let board = Board::from(vec![
        (sq(4, 0), Piece::new(PieceKind::King, Player::Black)),
        (sq(4, 7), Piece::new(PieceKind::King, Player::White)),
        (sq(0, 1), Piece::new(PieceKind::Pawn, Player::White).after_move()),
    ]);

    let mut game = ChessGame::new();
    game.replace(GameState::with_board(board, Player::White));

    // The engine insists on a choice for a promoting move...
    assert!(matches!(
        game.try_move(Player::White, sq(0, 1), sq(0, 0), None),
        Err(ChessError::MissingPromotion { .. })
    ));

    // ...and rejects kinds outside the promotion menu.
    assert!(matches!(
        game.try_move(Player::White, sq(0, 1), sq(0, 0), Some(PieceKind::King)),
        Err(ChessError::InvalidPromotion { .. })
    ));

    let state = game
        .try_move(Player::White, sq(0, 1), sq(0, 0), Some(PieceKind::Queen))
        .expect("Queen is a valid promotion choice");

    let queen = state.board().piece_at(sq(0, 0)).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.owner, Player::White);

    // The fresh queen rakes rank 0 and finds the enemy king.
    assert_eq!(state.checked_player(), Some(Player::Black));
}

#[test]
fn test_check_and_escape_flow() {
    init_tracing();
    let board = Board::from(vec![
        (sq(4, 0), Piece::new(PieceKind::King, Player::Black)),
        (sq(4, 7), Piece::new(PieceKind::King, Player::White)),
        (sq(0, 4), Piece::new(PieceKind::Rook, Player::White)),
    ]);

    let mut game = ChessGame::new();
    game.replace(GameState::with_board(board, Player::White));
    assert_eq!(game.state().checked_player(), None);

    game.try_move(Player::White, sq(0, 4), sq(4, 4), None)
        .expect("Rook slides onto the open file");
    assert_eq!(game.state().checked_player(), Some(Player::Black));

    game.try_move(Player::Black, sq(4, 0), sq(3, 0), None)
        .expect("King steps aside");
    assert_eq!(game.state().checked_player(), None);
}

#[test]
fn test_save_and_open_round_trip() {
    init_tracing();
    let path = std::env::temp_dir().join(format!(
        "chess-core-flow-{}.json",
        std::process::id()
    ));

    let mut game = ChessGame::new();
    game.try_move(Player::White, sq(4, 6), sq(4, 4), None).unwrap();
    game.try_move(Player::Black, sq(4, 1), sq(4, 3), None).unwrap();
    game.save(&path).expect("Save succeeds");

    let mut restored = ChessGame::new();
    restored.open(&path).expect("Open succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.state(), game.state());
    assert_eq!(restored.state().turn(), Player::White);

    // The restored game continues playing normally.
    restored
        .try_move(Player::White, sq(6, 7), sq(5, 5), None)
        .expect("Knight development is legal after reload");
}

#[test]
fn test_reset_after_play() {
    init_tracing();
    let mut game = ChessGame::new();
    game.try_move(Player::White, sq(4, 6), sq(4, 4), None).unwrap();

    game.reset();

    assert_eq!(game.state(), &GameState::new_game());
    assert_eq!(game.state().board().piece_count(), 32);
}

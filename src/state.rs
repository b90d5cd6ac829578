//! Game state and the move transition
//!
//! A [`GameState`] bundles the board, whose turn it is, and who (if anyone)
//! is in check. States are immutable snapshots: [`GameState::apply_move`]
//! returns a successor and leaves its receiver untouched, so observers
//! holding an older state never see it change under them.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::pieces::{PieceKind, Player};
use crate::rules;
use crate::types::Position;

/// A full game snapshot: board, turn, and check status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    checked_player: Option<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new_game()
    }
}

impl GameState {
    /// A fresh game: standard setup, nobody in check, player 1 to move
    ///
    /// Player 1 (white) having the first move is the convention this
    /// engine inherits; see [`Player`].
    pub fn new_game() -> Self {
        GameState {
            board: Board::standard_setup(),
            turn: Player::White,
            checked_player: None,
        }
    }

    /// Build a state over a custom board, deriving the check status
    ///
    /// Useful for tests and for hosts that set up study positions.
    pub fn with_board(board: Board, turn: Player) -> Self {
        let checked_player = rules::checked_player(&board);
        GameState {
            board,
            turn,
            checked_player,
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The player currently in check, if any
    pub fn checked_player(&self) -> Option<Player> {
        self.checked_player
    }

    /// Whether it is `player`'s turn
    pub fn is_my_turn(&self, player: Player) -> bool {
        self.turn == player
    }

    /// Legal destinations for the piece at `origin` on the current board
    pub fn legal_destinations(&self, origin: Position) -> Vec<Position> {
        rules::legal_destinations(&self.board, origin)
    }

    /// Whether moving `origin` to `destination` would promote a pawn
    pub fn can_promote(&self, origin: Position, destination: Position) -> bool {
        rules::can_promote(&self.board, origin, destination)
    }

    /// Produce the successor state for a pre-validated move
    ///
    /// The caller layer is responsible for having checked that `origin`
    /// holds the mover's piece and that `destination` is among its legal
    /// destinations ([`crate::game::ChessGame::try_move`] does exactly
    /// that). The transition:
    ///
    /// 1. clones the board,
    /// 2. lifts the piece off `origin`, marking it moved and applying the
    ///    promotion kind when one is supplied,
    /// 3. places it on `destination`, capturing any occupant by overwrite,
    /// 4. flips the turn,
    /// 5. recomputes the check status on the new board.
    ///
    /// `self` is left untouched.
    pub fn apply_move(
        &self,
        origin: Position,
        destination: Position,
        promotion: Option<PieceKind>,
    ) -> GameState {
        let mut board = self.board.clone();

        match board.take(origin) {
            Some(piece) => {
                let mut moved = piece.after_move();
                if let Some(kind) = promotion {
                    moved = moved.promoted(kind);
                    info!(
                        "[GAME] Pawn on {} promoted to {:?} at {}",
                        origin, kind, destination
                    );
                }
                board.set(destination, moved);
            }
            None => {
                // Caller contract violation: advance the turn anyway, as a
                // skipped move, rather than poisoning the state.
                warn!("[GAME] No piece at {} to move; board left unchanged", origin);
            }
        }

        let turn = self.turn.opponent();
        let checked_player = rules::checked_player(&board);

        if checked_player != self.checked_player {
            match checked_player {
                Some(player) => info!("[GAME] Player {} is in check", player.id()),
                None => info!("[GAME] Check escaped; game continues"),
            }
        }

        GameState {
            board,
            turn,
            checked_player,
        }
    }
}

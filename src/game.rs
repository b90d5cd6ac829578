//! The host-facing game handle
//!
//! [`ChessGame`] owns the master [`GameState`] and is the only component
//! that replaces it: by applying a validated move, by resetting, or by
//! swapping in a loaded snapshot. Everything a UI or network layer needs
//! funnels through here; the rules modules stay pure underneath.

use std::path::Path;

use tracing::info;

use crate::error::{ChessError, ChessResult};
use crate::pieces::{PieceKind, Player};
use crate::snapshot;
use crate::state::GameState;
use crate::types::Position;

/// Owner of the master game state
#[derive(Debug, Default)]
pub struct ChessGame {
    current: GameState,
}

impl ChessGame {
    /// Start a fresh game
    pub fn new() -> Self {
        ChessGame {
            current: GameState::new_game(),
        }
    }

    /// The current state, for reading
    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// A deep copy of the current state
    ///
    /// Hand this to observers; later moves will not affect it.
    pub fn snapshot(&self) -> GameState {
        self.current.clone()
    }

    /// Attempt a move on behalf of `player`
    ///
    /// Re-validates everything a user-facing layer must not assume:
    /// that it is `player`'s turn, that `origin` holds a piece, that
    /// `destination` is legal for it, and that a promoting move carries a
    /// valid piece choice. On success the master state advances and the new
    /// state is returned. A `promotion` supplied for a non-promoting move
    /// is ignored.
    pub fn try_move(
        &mut self,
        player: Player,
        origin: Position,
        destination: Position,
        promotion: Option<PieceKind>,
    ) -> ChessResult<&GameState> {
        if !self.current.is_my_turn(player) {
            return Err(ChessError::NotYourTurn { player });
        }

        if self.current.board().piece_at(origin).is_none() {
            return Err(ChessError::PieceNotFound { position: origin });
        }

        if !self.current.legal_destinations(origin).contains(&destination) {
            return Err(ChessError::IllegalMove {
                from: origin,
                to: destination,
            });
        }

        let promotion = if self.current.can_promote(origin, destination) {
            match promotion {
                Some(kind) if kind.is_promotion_choice() => Some(kind),
                Some(kind) => return Err(ChessError::InvalidPromotion { kind }),
                None => {
                    return Err(ChessError::MissingPromotion {
                        position: destination,
                    })
                }
            }
        } else {
            None
        };

        info!(
            "[GAME] Player {} moves {} to {}",
            player.id(),
            origin,
            destination
        );
        self.current = self.current.apply_move(origin, destination, promotion);
        Ok(&self.current)
    }

    /// Replace the master state with a fresh game
    pub fn reset(&mut self) {
        info!("[GAME] Game reset to the starting position");
        self.current = GameState::new_game();
    }

    /// Replace the master state wholesale
    pub fn replace(&mut self, state: GameState) {
        self.current = state;
    }

    /// Save the current state to `path`
    pub fn save(&self, path: &Path) -> ChessResult<()> {
        snapshot::save_game(&self.current, path)
    }

    /// Load a state from `path`, replacing the master state on success
    pub fn open(&mut self, path: &Path) -> ChessResult<&GameState> {
        let loaded = snapshot::load_game(path)?;
        self.current = loaded;
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_move_rejects_out_of_turn() {
        let mut game = ChessGame::new();

        let result = game.try_move(
            Player::Black,
            Position::new(4, 1),
            Position::new(4, 2),
            None,
        );

        assert!(matches!(
            result,
            Err(ChessError::NotYourTurn {
                player: Player::Black
            })
        ));
        assert_eq!(game.state().turn(), Player::White, "State is unchanged");
    }

    #[test]
    fn test_try_move_rejects_empty_origin() {
        let mut game = ChessGame::new();

        let result = game.try_move(
            Player::White,
            Position::new(4, 4),
            Position::new(4, 3),
            None,
        );

        assert!(matches!(result, Err(ChessError::PieceNotFound { .. })));
    }

    #[test]
    fn test_try_move_rejects_illegal_destination() {
        let mut game = ChessGame::new();

        // A pawn cannot advance three squares.
        let result = game.try_move(
            Player::White,
            Position::new(4, 6),
            Position::new(4, 3),
            None,
        );

        assert!(matches!(result, Err(ChessError::IllegalMove { .. })));
        assert!(
            game.state().board().is_occupied(Position::new(4, 6)),
            "The pawn has not moved"
        );
    }

    #[test]
    fn test_try_move_advances_state() {
        let mut game = ChessGame::new();

        let state = game
            .try_move(
                Player::White,
                Position::new(4, 6),
                Position::new(4, 4),
                None,
            )
            .expect("Opening pawn push is legal");

        assert_eq!(state.turn(), Player::Black);
        assert!(state.board().is_occupied(Position::new(4, 4)));
    }

    #[test]
    fn test_snapshot_is_independent_of_later_moves() {
        let mut game = ChessGame::new();
        let before = game.snapshot();

        game.try_move(
            Player::White,
            Position::new(4, 6),
            Position::new(4, 5),
            None,
        )
        .unwrap();

        assert_eq!(before.turn(), Player::White);
        assert!(before.board().is_occupied(Position::new(4, 6)));
        assert_ne!(&before, game.state());
    }

    #[test]
    fn test_reset_restores_starting_position() {
        let mut game = ChessGame::new();
        game.try_move(
            Player::White,
            Position::new(4, 6),
            Position::new(4, 5),
            None,
        )
        .unwrap();

        game.reset();

        assert_eq!(game.state(), &GameState::new_game());
    }
}

//! Error types for the chess engine
//!
//! Provides custom error types for the host-facing surface: move attempt
//! rejections and snapshot persistence failures. Rule queries themselves
//! never fail - an illegal move is an empty or non-matching destination
//! set, not an error.

use crate::pieces::{PieceKind, Player};
use crate::types::Position;

/// Errors surfaced to a hosting application
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// A player tried to move when it is not their turn
    #[error("It is not {player:?}'s turn")]
    NotYourTurn { player: Player },

    /// No piece stands on the requested origin square
    #[error("No piece found at {position}")]
    PieceNotFound { position: Position },

    /// The destination is not a legal square for the moving piece
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// A promoting move arrived without a piece choice
    #[error("Move to {position} promotes a pawn and requires a piece choice")]
    MissingPromotion { position: Position },

    /// The supplied promotion choice is not an allowed kind
    #[error("Cannot promote a pawn to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// A snapshot file could not be read
    #[error("Failed to read snapshot: {message}")]
    SnapshotRead { message: String },

    /// A snapshot file could not be written
    #[error("Failed to write snapshot: {message}")]
    SnapshotWrite { message: String },

    /// Snapshot contents did not parse as a game state
    #[error("Snapshot is not a valid game state: {message}")]
    SnapshotFormat { message: String },
}

/// Result type alias for engine operations
pub type ChessResult<T> = Result<T, ChessError>;

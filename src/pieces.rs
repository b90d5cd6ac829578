//! Piece and player definitions
//!
//! [`Piece`] is an immutable value: moving or promoting a piece produces a
//! new value rather than editing the old one, which is what lets a [`crate::board::Board`]
//! snapshot be shared freely.

use serde::{Deserialize, Serialize};

use crate::types::Rank;

/// One of the two players
///
/// Player 0 opens on ranks 0-1 and advances toward rank 7; player 1 opens
/// on ranks 6-7, advances toward rank 0, and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 0.
    Black,
    /// Player 1. Has the first move in a new game.
    White,
}

impl Player {
    /// Numeric player id (0 for black, 1 for white)
    pub fn id(self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// Look a player up by numeric id
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Player::Black),
            1 => Some(Player::White),
            _ => None,
        }
    }

    /// The opposing player
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The rank this player's back row occupies at setup
    pub fn back_rank(self) -> Rank {
        match self {
            Player::Black => Rank(0),
            Player::White => Rank(7),
        }
    }

    /// The rank this player's pawns occupy at setup
    pub fn pawn_rank(self) -> Rank {
        match self {
            Player::Black => Rank(1),
            Player::White => Rank(6),
        }
    }

    /// The farthest rank from this player's side; a pawn reaching it promotes
    pub fn promotion_rank(self) -> Rank {
        match self {
            Player::Black => Rank(7),
            Player::White => Rank(0),
        }
    }
}

/// The kind of a chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// The Unicode chess glyph for this kind
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => '\u{2659}',
            PieceKind::Rook => '\u{2656}',
            PieceKind::Knight => '\u{2658}',
            PieceKind::Bishop => '\u{2657}',
            PieceKind::Queen => '\u{2655}',
            PieceKind::King => '\u{2654}',
        }
    }

    /// Whether a pawn may promote to this kind
    ///
    /// The promotion menu offers rook, knight, bishop and queen; pawns and
    /// kings are not valid choices.
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen
        )
    }
}

/// A chess piece: kind, owning player, and whether it has moved
///
/// The moved flag drives the pawn double-step rule. Values are immutable;
/// [`Piece::after_move`] and [`Piece::promoted`] return fresh pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
    pub has_moved: bool,
}

impl Piece {
    /// Create a piece that has not yet moved
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        Piece {
            kind,
            owner,
            has_moved: false,
        }
    }

    /// The same piece with its moved flag set
    pub fn after_move(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// The same piece with a new kind (pawn promotion)
    pub fn promoted(self, kind: PieceKind) -> Self {
        Piece { kind, ..self }
    }
}

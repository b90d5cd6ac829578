//! Board representation for move validation and state transitions
//!
//! A [`Board`] maps occupied [`Position`]s to [`Piece`]s; empty squares are
//! simply absent keys. Boards are cheap to clone and treated as immutable
//! snapshots: the only mutators are crate-private and operate on a clone
//! owned by a state transition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::pieces::{Piece, PieceKind, Player};
use crate::types::{Position, BOARD_WIDTH};

/// Back-row kinds at setup, from file 0 to file 7.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mapping from positions to the pieces occupying them
///
/// Serialized as a list of (position, piece) entries so the snapshot format
/// stays a plain JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(Position, Piece)>", into = "Vec<(Position, Piece)>")]
pub struct Board {
    squares: HashMap<Position, Piece>,
}

impl Board {
    /// A board with no pieces on it
    pub fn empty() -> Self {
        Board {
            squares: HashMap::new(),
        }
    }

    /// The standard initial configuration
    ///
    /// Each player gets eight pawns on their pawn rank and
    /// rook-knight-bishop-queen-king-bishop-knight-rook on their back rank.
    /// Player 0 occupies ranks 0-1, player 1 ranks 6-7.
    pub fn standard_setup() -> Self {
        let mut board = Board::empty();

        for player in [Player::Black, Player::White] {
            for file in 0..BOARD_WIDTH {
                board.set(
                    Position {
                        file: file.into(),
                        rank: player.pawn_rank(),
                    },
                    Piece::new(PieceKind::Pawn, player),
                );
            }
            for (file, kind) in BACK_ROW.into_iter().enumerate() {
                board.set(
                    Position {
                        file: (file as u8).into(),
                        rank: player.back_rank(),
                    },
                    Piece::new(kind, player),
                );
            }
        }

        board
    }

    /// The piece at `position`, if any
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.squares.get(&position)
    }

    /// Whether `position` holds a piece
    pub fn is_occupied(&self, position: Position) -> bool {
        self.squares.contains_key(&position)
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    /// Iterate over every occupied square
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.squares.iter().map(|(position, piece)| (*position, piece))
    }

    /// Iterate over the squares occupied by `player`'s pieces
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, &Piece)> {
        self.iter().filter(move |(_, piece)| piece.owner == player)
    }

    /// The square holding `player`'s king
    ///
    /// Returns `None` unless the player has exactly one king on the board.
    /// Check detection skips such a side rather than failing, which keeps
    /// every operation total over custom and partial setups.
    pub fn king_position(&self, player: Player) -> Option<Position> {
        let mut kings = self
            .pieces_of(player)
            .filter(|(_, piece)| piece.kind == PieceKind::King);

        match (kings.next(), kings.next()) {
            (Some((position, _)), None) => Some(position),
            _ => None,
        }
    }

    /// Place a piece, replacing any occupant
    pub(crate) fn set(&mut self, position: Position, piece: Piece) {
        self.squares.insert(position, piece);
    }

    /// Remove and return the piece at `position`
    pub(crate) fn take(&mut self, position: Position) -> Option<Piece> {
        self.squares.remove(&position)
    }
}

impl From<Vec<(Position, Piece)>> for Board {
    fn from(entries: Vec<(Position, Piece)>) -> Self {
        Board {
            squares: entries.into_iter().collect(),
        }
    }
}

impl From<Board> for Vec<(Position, Piece)> {
    fn from(board: Board) -> Self {
        board.squares.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup_counts() {
        let board = Board::standard_setup();

        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.pieces_of(Player::Black).count(), 16);
        assert_eq!(board.pieces_of(Player::White).count(), 16);

        for player in [Player::Black, Player::White] {
            let pawns = board
                .pieces_of(player)
                .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
                .count();
            assert_eq!(pawns, 8, "Each player starts with eight pawns");
        }
    }

    #[test]
    fn test_standard_setup_back_rows() {
        let board = Board::standard_setup();

        for (player, rank) in [(Player::Black, 0u8), (Player::White, 7u8)] {
            for (file, expected) in BACK_ROW.into_iter().enumerate() {
                let piece = board
                    .piece_at(Position::new(file as u8, rank))
                    .expect("Back row square is occupied");
                assert_eq!(piece.kind, expected);
                assert_eq!(piece.owner, player);
                assert!(!piece.has_moved, "Fresh pieces have not moved");
            }
        }
    }

    #[test]
    fn test_king_positions_at_setup() {
        let board = Board::standard_setup();

        assert_eq!(
            board.king_position(Player::Black),
            Some(Position::new(4, 0))
        );
        assert_eq!(
            board.king_position(Player::White),
            Some(Position::new(4, 7))
        );
    }

    #[test]
    fn test_king_position_requires_exactly_one() {
        let mut board = Board::empty();
        assert_eq!(board.king_position(Player::Black), None);

        board.set(
            Position::new(4, 0),
            Piece::new(PieceKind::King, Player::Black),
        );
        assert_eq!(
            board.king_position(Player::Black),
            Some(Position::new(4, 0))
        );

        // A second king makes the lookup decline to answer.
        board.set(
            Position::new(0, 0),
            Piece::new(PieceKind::King, Player::Black),
        );
        assert_eq!(board.king_position(Player::Black), None);
    }

    #[test]
    fn test_set_replaces_occupant() {
        let mut board = Board::empty();
        let square = Position::new(3, 3);

        board.set(square, Piece::new(PieceKind::Pawn, Player::Black));
        board.set(square, Piece::new(PieceKind::Queen, Player::White));

        let piece = board.piece_at(square).unwrap();
        assert_eq!(piece.kind, PieceKind::Queen);
        assert_eq!(piece.owner, Player::White);
        assert_eq!(board.piece_count(), 1);
    }
}

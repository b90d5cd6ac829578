//! Chess piece movement rules
//!
//! Computes the set of legal destination squares for the piece at a given
//! origin. Pure functions with no side effects - easy to test.
//!
//! Castling and en passant are not supported.

use crate::board::Board;
use crate::pieces::{Piece, PieceKind, Player};
use crate::types::{Direction, Position, BOARD_WIDTH};

/// Longest ray any sliding piece can travel in one direction.
const MAX_RAY: usize = (BOARD_WIDTH - 1) as usize;

/// The eight L-shaped knight offsets.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// All legal destination squares for the piece at `origin`
///
/// Returns an empty list when `origin` is empty. The result has set
/// semantics: no square appears twice, and order carries no meaning.
pub fn legal_destinations(board: &Board, origin: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(origin) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, origin, *piece),
        PieceKind::Rook => ray_destinations(board, origin, piece.owner, &Direction::CARDINAL, MAX_RAY),
        PieceKind::Knight => knight_destinations(board, origin, piece.owner),
        PieceKind::Bishop => ray_destinations(board, origin, piece.owner, &Direction::DIAGONAL, MAX_RAY),
        PieceKind::Queen => ray_destinations(board, origin, piece.owner, &Direction::ALL, MAX_RAY),
        PieceKind::King => ray_destinations(board, origin, piece.owner, &Direction::ALL, 1),
    }
}

/// Whether moving from `origin` to `destination` is legal
pub fn is_legal_move(board: &Board, origin: Position, destination: Position) -> bool {
    legal_destinations(board, origin).contains(&destination)
}

/// Whether the move from `origin` to `destination` promotes a pawn
///
/// True iff the move is legal, the moving piece is a pawn, and the
/// destination rank is the farthest rank from the owner's side.
pub fn can_promote(board: &Board, origin: Position, destination: Position) -> bool {
    if !is_legal_move(board, origin, destination) {
        return false;
    }

    let Some(piece) = board.piece_at(origin) else {
        return false;
    };

    piece.kind == PieceKind::Pawn && destination.rank == piece.owner.promotion_rank()
}

/// Walk outward along each of `directions`, collecting legal stops
///
/// Empty squares accumulate and the walk continues. The first occupied
/// square ends the ray: it is collected only when it holds an enemy piece.
/// `max_steps` caps the walk per direction (one step for the king).
fn ray_destinations(
    board: &Board,
    origin: Position,
    owner: Player,
    directions: &[Direction],
    max_steps: usize,
) -> Vec<Position> {
    let mut destinations = Vec::new();

    for &direction in directions {
        let mut cursor = origin.step(direction);
        let mut steps = 0;

        while let Some(square) = cursor {
            if steps >= max_steps {
                break;
            }

            match board.piece_at(square) {
                Some(occupant) => {
                    if occupant.owner != owner {
                        destinations.push(square);
                    }
                    // Pieces never jump over occupants.
                    break;
                }
                None => destinations.push(square),
            }

            steps += 1;
            cursor = square.step(direction);
        }
    }

    destinations
}

/// Knight destinations: the in-bounds L-offsets not blocked by a friend
fn knight_destinations(board: &Board, origin: Position, owner: Player) -> Vec<Position> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(|(dx, dy)| origin.offset(dx, dy))
        .filter(|&square| match board.piece_at(square) {
            Some(occupant) => occupant.owner != owner,
            None => true,
        })
        .collect()
}

/// Pawn destinations: diagonal captures plus the straight advance
///
/// The two forward-diagonal squares are legal only when an enemy piece
/// stands there. The advance is one square ahead if empty, or two for a
/// pawn that has never moved, stopping at the first obstruction either way.
fn pawn_destinations(board: &Board, origin: Position, pawn: Piece) -> Vec<Position> {
    let mut destinations = Vec::new();

    for direction in Direction::pawn_captures(pawn.owner) {
        if let Some(target) = origin.step(direction) {
            if matches!(board.piece_at(target), Some(occupant) if occupant.owner != pawn.owner) {
                destinations.push(target);
            }
        }
    }

    let advance = Direction::pawn_advance(pawn.owner);
    let max_distance = if pawn.has_moved { 1 } else { 2 };

    let mut cursor = origin.step(advance);
    for _ in 0..max_distance {
        let Some(square) = cursor else {
            break;
        };
        if board.is_occupied(square) {
            break;
        }
        destinations.push(square);
        cursor = square.step(advance);
    }

    destinations
}

//! Type definitions and utilities for chess coordinates
//!
//! Provides newtype patterns and trait implementations for board coordinates
//! to improve type safety and code clarity. A constructed [`Position`] is
//! always on the board; raw integers coming from an outer translation layer
//! (e.g. pixel-to-square mapping) go through [`in_bounds`] or
//! [`Position::try_new`] first.

use serde::{Deserialize, Serialize};

use crate::pieces::Player;

/// Width (and height) of the board in squares.
pub const BOARD_WIDTH: u8 = 8;

/// Number of players in a game.
pub const NUM_PLAYERS: usize = 2;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
/// This newtype prevents mixing up file and rank coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct File(pub u8);

impl File {
    /// Create a file from a character ('a'..='h')
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let file = File::from_char('e').unwrap(); // File 4
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for File {
    fn from(value: u8) -> Self {
        assert!(value < BOARD_WIDTH, "File must be in range 0-7");
        File(value)
    }
}

impl From<File> for u8 {
    fn from(file: File) -> Self {
        file.0
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 to 7. Rank 0 holds player 0's back row at setup;
/// rank 7 holds player 1's. This newtype prevents mixing up file and rank
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a rank from a display number (1-8)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let rank = Rank::from_number(4).unwrap(); // Rank 3 (0-indexed)
    /// ```
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=BOARD_WIDTH).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    /// Convert rank to a display number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for Rank {
    fn from(value: u8) -> Self {
        assert!(value < BOARD_WIDTH, "Rank must be in range 0-7");
        Rank(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

/// Check whether a raw (file, rank) pair names a square on the board
///
/// Outer layers that translate clicks or text into coordinates call this
/// before constructing a [`Position`]; the engine itself only ever sees
/// in-bounds positions.
pub fn in_bounds(file: i32, rank: i32) -> bool {
    (0..BOARD_WIDTH as i32).contains(&file) && (0..BOARD_WIDTH as i32).contains(&rank)
}

/// Board square position (file, rank)
///
/// Combines [`File`] and [`Rank`] into a single type-safe coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: File,
    pub rank: Rank,
}

impl Position {
    /// Create a position from file and rank indices
    ///
    /// # Panics
    ///
    /// Panics if either index is 8 or greater. Use [`Position::try_new`]
    /// for unvalidated input.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let position = Position::new(4, 3); // e4
    /// ```
    pub fn new(file: u8, rank: u8) -> Self {
        Position {
            file: File::from(file),
            rank: Rank::from(rank),
        }
    }

    /// Create a position from raw signed indices, if they are on the board
    pub fn try_new(file: i32, rank: i32) -> Option<Self> {
        if in_bounds(file, rank) {
            Some(Position::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Create a position from algebraic notation (e.g. "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        let rank_num = rank_char.to_digit(10)? as u8;

        Some(Position {
            file: File::from_char(file_char)?,
            rank: Rank::from_number(rank_num)?,
        })
    }

    /// Convert the position to algebraic notation (e.g. "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file.to_char(), self.rank.to_number())
    }

    /// The square one step away in `direction`, if it is on the board
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.offset(direction.dx(), direction.dy())
    }

    /// The square offset by `(dx, dy)`, if it is on the board
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Position::try_new(self.file.index() as i32 + dx, self.rank.index() as i32 + dy)
    }

    /// Convert to tuple (file, rank) for compact literals
    pub fn to_tuple(self) -> (u8, u8) {
        (self.file.index(), self.rank.index())
    }

    /// Create from tuple (file, rank)
    pub fn from_tuple((file, rank): (u8, u8)) -> Self {
        Position::new(file, rank)
    }
}

impl From<(u8, u8)> for Position {
    fn from((file, rank): (u8, u8)) -> Self {
        Position::from_tuple((file, rank))
    }
}

impl From<Position> for (u8, u8) {
    fn from(position: Position) -> Self {
        position.to_tuple()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

/// One of the eight unit movement directions
///
/// North points toward rank 0 and south toward rank 7, matching the board
/// orientation in which player 0 opens at the top (low ranks) and advances
/// south. Each direction is a `(dx, dy)` unit vector with components in
/// `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    /// The four cardinal directions (rook rays).
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions (bishop rays).
    pub const DIAGONAL: [Direction; 4] = [
        Direction::Northwest,
        Direction::Northeast,
        Direction::Southeast,
        Direction::Southwest,
    ];

    /// All eight directions (queen and king rays).
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
    ];

    /// The file component of the direction (-1, 0, or 1)
    pub fn dx(self) -> i32 {
        match self {
            Direction::North | Direction::South => 0,
            Direction::East | Direction::Northeast | Direction::Southeast => 1,
            Direction::West | Direction::Northwest | Direction::Southwest => -1,
        }
    }

    /// The rank component of the direction (-1, 0, or 1)
    pub fn dy(self) -> i32 {
        match self {
            Direction::East | Direction::West => 0,
            Direction::North | Direction::Northeast | Direction::Northwest => -1,
            Direction::South | Direction::Southeast | Direction::Southwest => 1,
        }
    }

    /// The direction a pawn moves in when not capturing
    ///
    /// Player 0 advances toward increasing ranks, player 1 toward
    /// decreasing ranks.
    pub fn pawn_advance(player: Player) -> Direction {
        match player {
            Player::Black => Direction::South,
            Player::White => Direction::North,
        }
    }

    /// The two directions a pawn captures in
    pub fn pawn_captures(player: Player) -> [Direction; 2] {
        match player {
            Player::Black => [Direction::Southeast, Direction::Southwest],
            Player::White => [Direction::Northeast, Direction::Northwest],
        }
    }
}

//! chess-core - a two-player chess rule engine
//!
//! Holds a board configuration, computes legal destination squares under
//! standard movement rules (castling and en passant excluded), detects
//! check, and produces successor game states for validated moves,
//! including pawn promotion. Rendering, input handling, and the promotion
//! prompt live in hosting applications; they call in through a small
//! surface and receive immutable snapshots back.
//!
//! # Module Organization
//!
//! - `types` - Coordinates ([`File`], [`Rank`], [`Position`]) and the eight
//!   movement [`Direction`]s
//! - `pieces` - [`Player`], [`PieceKind`], and the immutable [`Piece`] value
//! - `board` - [`Board`]: the position-to-piece mapping and standard setup
//! - `rules` - Pure move legality ([`legal_destinations`], [`is_legal_move`],
//!   [`can_promote`]) and check detection ([`checked_player`])
//! - `state` - [`GameState`] snapshots and the copy-on-write move transition
//! - `game` - [`ChessGame`]: the host handle that re-validates and applies
//!   move attempts, resets, and swaps in loaded snapshots
//! - `snapshot` - JSON save/load of a [`GameState`]
//! - `error` - [`ChessError`] / [`ChessResult`]
//!
//! # Concurrency
//!
//! Everything is synchronous and allocation-light. States are immutable
//! snapshots, so a host that publishes them to observer threads needs no
//! locking around reads; only the owner of the master state mutates, by
//! replacement.
//!
//! # Example
//!
//! ```
//! use chess_core::{ChessGame, Player, Position};
//!
//! let mut game = ChessGame::new();
//! let origin = Position::new(4, 6);
//! let moves = game.state().legal_destinations(origin);
//! assert!(moves.contains(&Position::new(4, 4)));
//!
//! game.try_move(Player::White, origin, Position::new(4, 4), None)?;
//! assert_eq!(game.state().turn(), Player::Black);
//! # Ok::<(), chess_core::ChessError>(())
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod pieces;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod types;

// Re-export the main entry points
pub use board::Board;
pub use error::{ChessError, ChessResult};
pub use game::ChessGame;
pub use pieces::{Piece, PieceKind, Player};
pub use rules::{can_promote, checked_player, is_legal_move, legal_destinations};
pub use snapshot::{load_game, save_game};
pub use state::GameState;
pub use types::{in_bounds, Direction, File, Position, Rank};

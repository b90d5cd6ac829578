//! Check detection
//!
//! A player is in check when any enemy piece could legally move onto their
//! king's square. Detection reuses move generation rather than duplicating
//! the movement rules.

use crate::board::Board;
use crate::pieces::Player;
use crate::rules::piece_moves::is_legal_move;

/// The player currently in check, if any
///
/// Players are examined in id order (player 0 first), and the first one
/// found in check is reported. A side without exactly one king on the board
/// is skipped entirely, so partial and custom setups never fail here.
pub fn checked_player(board: &Board) -> Option<Player> {
    [Player::Black, Player::White]
        .into_iter()
        .find(|&player| player_in_check(board, player))
}

/// Whether any of `player`'s opponent's pieces attack their king
fn player_in_check(board: &Board, player: Player) -> bool {
    let Some(king_square) = board.king_position(player) else {
        return false;
    };

    board
        .pieces_of(player.opponent())
        .any(|(position, _)| is_legal_move(board, position, king_square))
}

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::moves::legal_moves;
use crate::types::Side;

/// Result of classifying a position. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    RedWins,
    BlackWins,
    Draw,
}

/// Kings-only material configurations treated as dead draws: one king each,
/// or two kings against one. A coarse approximation of endgame theory, kept
/// deliberately conservative; it is a heuristic, not an authority, and does
/// not model move-count draw rules.
#[inline]
fn is_material_draw(pos: &Position) -> bool {
    let red = pos.piece_count(Side::Red);
    let black = pos.piece_count(Side::Black);
    if pos.king_count(Side::Red) != red || pos.king_count(Side::Black) != black {
        return false;
    }
    matches!((red, black), (1, 1) | (2, 1) | (1, 2))
}

/// Terminal-state detection, applied by hosts before invoking the search.
///
/// Rules in order: a side with no pieces loses; a side with no legal moves
/// (were it to move) loses; then the kings-only draw heuristic; otherwise
/// the game is in progress.
#[must_use]
pub fn evaluate_game_state(pos: &Position) -> GameOutcome {
    if pos.piece_count(Side::Red) == 0 {
        return GameOutcome::BlackWins;
    }
    if pos.piece_count(Side::Black) == 0 {
        return GameOutcome::RedWins;
    }
    if legal_moves(&pos.with_side(Side::Red)).is_empty() {
        return GameOutcome::BlackWins;
    }
    if legal_moves(&pos.with_side(Side::Black)).is_empty() {
        return GameOutcome::RedWins;
    }
    if is_material_draw(pos) {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}

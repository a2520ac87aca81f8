use crate::board::Position;
use crate::moves::Move;
use crate::types::{sq_rc, Side};

/// Applies a move as a pure transform: returns the resulting position with
/// the mover's piece relocated, jumped pieces removed, promotion applied,
/// and the side to move flipped. The input position is never mutated.
///
/// Moves are expected to come from [`crate::moves::legal_moves`] for the
/// same position; structural expectations are checked with debug asserts
/// rather than runtime errors.
#[must_use]
pub fn apply_move(pos: &Position, mv: &Move) -> Position {
    let side = pos.to_move();
    let from_bit = 1u32 << mv.from_sq();
    let to_bit = 1u32 << mv.to_sq();

    debug_assert_ne!(pos.occupied(side) & from_bit, 0, "from-square not owned by mover");
    debug_assert!(
        mv.from_sq() == mv.to_sq() || pos.all_occupied() & to_bit == 0,
        "to-square occupied"
    );

    let was_king = pos.kings(side) & from_bit != 0;
    let own = (pos.occupied(side) & !from_bit) | to_bit;
    let mut own_kings = pos.kings(side) & !from_bit;

    // A man landing on the far rank promotes; kings stay kings.
    let (to_row, _) = sq_rc(mv.to_sq());
    if was_king || to_row == side.promotion_row() {
        own_kings |= to_bit;
    }

    let mut captured_mask = 0u32;
    for &sq in mv.captured() {
        captured_mask |= 1 << sq;
    }
    debug_assert_eq!(
        pos.occupied(side.other()) & captured_mask,
        captured_mask,
        "captured square without an opposing piece"
    );
    let opp = pos.occupied(side.other()) & !captured_mask;
    let opp_kings = pos.kings(side.other()) & !captured_mask;

    match side {
        Side::Red => Position::from_bits(own, own_kings, opp, opp_kings, Side::Black),
        Side::Black => Position::from_bits(opp, opp_kings, own, own_kings, Side::Red),
    }
}

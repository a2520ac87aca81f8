use crate::board::Position;
use crate::types::{sq_rc, Side, SQUARES};

/// Relative piece values: a king is worth two and a half men.
const KING_VALUE: f32 = 2.5;
/// Weight of the material term against the positional term.
const MATERIAL_WEIGHT: f32 = 3.0;
/// Advancement bonus per row toward promotion, men only.
const ADVANCE_BONUS: f32 = 0.1;
/// Penalty for sitting on a boundary file (reduced mobility).
const EDGE_PENALTY: f32 = 0.2;

/// Proximity to the board center, normalized to `0..=1`:
/// `max(0, 1 - euclidean_distance_from_center / 5)`.
#[inline]
fn center_proximity(row: u8, col: u8) -> f32 {
    let dr = f32::from(row) - 3.5;
    let dc = f32::from(col) - 3.5;
    let dist = (dr * dr + dc * dc).sqrt();
    (1.0 - dist / 5.0).max(0.0)
}

/// Positional score of one side's pieces, from that side's own perspective.
///
/// Squares are visited in side-relative order (red's scan mirrors black's),
/// so mirrored positions accumulate identical float sequences and cancel
/// bitwise-exactly; the initial position evaluates to exactly zero.
fn side_positional(pos: &Position, side: Side) -> f32 {
    let occ = pos.occupied(side);
    let kings = pos.kings(side);

    let mut total = 0.0f32;
    for rel in 0..SQUARES {
        let sq = match side {
            Side::Black => rel,
            Side::Red => SQUARES - 1 - rel,
        };
        if occ & (1 << sq) == 0 {
            continue;
        }
        let (row, col) = sq_rc(sq);

        total += center_proximity(row, col);

        if kings & (1 << sq) == 0 {
            let advanced = match side {
                Side::Red => 7 - row,
                Side::Black => row,
            };
            total += f32::from(advanced) * ADVANCE_BONUS;
        }

        if col == 0 || col == 7 {
            total -= EDGE_PENALTY;
        }
    }
    total
}

/// Static position score. Pure and deterministic; positive favors red,
/// negative favors black, zero is neutral.
#[must_use]
pub fn evaluate(pos: &Position) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let material = (pos.men_count(Side::Red) as f32
        + KING_VALUE * pos.king_count(Side::Red) as f32)
        - (pos.men_count(Side::Black) as f32
            + KING_VALUE * pos.king_count(Side::Black) as f32);

    let positional = side_positional(pos, Side::Red) - side_positional(pos, Side::Black);

    material * MATERIAL_WEIGHT + positional
}

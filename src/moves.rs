use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::types::{sq_rc, Side, BOARD_SIZE, SQUARES};

/// Diagonal direction order used everywhere: forward-left, forward-right
/// first (from red's point of view), then the backward pair. Enumeration
/// order is load-bearing: search node counts and root tie-breaks depend on
/// move lists being identical for identical positions.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A legal move. Capture chains are single atomic moves carrying the full
/// ordered list of jumped squares; they are never split into separate steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Non-capturing step to an adjacent diagonal square.
    Step { from: u8, to: u8 },
    /// One or more consecutive jumps by the same piece. `captures` holds
    /// the jumped squares in jump order; `to` is the final landing square.
    Jump {
        from: u8,
        captures: Vec<u8>,
        to: u8,
    },
}

impl Move {
    #[inline]
    pub fn from_sq(&self) -> u8 {
        match self {
            Move::Step { from, .. } | Move::Jump { from, .. } => *from,
        }
    }

    #[inline]
    pub fn to_sq(&self) -> u8 {
        match self {
            Move::Step { to, .. } | Move::Jump { to, .. } => *to,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    #[inline]
    pub fn captured(&self) -> &[u8] {
        match self {
            Move::Step { .. } => &[],
            Move::Jump { captures, .. } => captures,
        }
    }
}

/// Steps one diagonal from `sq`; `None` when the target leaves the board.
/// Diagonal moves stay on dark squares, so the index math needs no parity
/// check.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn diag(sq: u8, dr: i32, dc: i32) -> Option<u8> {
    let (r, c) = sq_rc(sq);
    let nr = i32::from(r) + dr;
    let nc = i32::from(c) + dc;
    if (0..i32::from(BOARD_SIZE)).contains(&nr) && (0..i32::from(BOARD_SIZE)).contains(&nc) {
        Some((nr * 4 + nc / 2) as u8)
    } else {
        None
    }
}

/// Directions a piece may move and capture in. Men go forward only; kings
/// use all four diagonals.
#[inline]
fn directions(side: Side, king: bool) -> &'static [(i32, i32)] {
    if king {
        &DIAGONALS
    } else {
        match side {
            Side::Red => &DIAGONALS[0..2],
            Side::Black => &DIAGONALS[2..4],
        }
    }
}

/// Recursively extends a capture chain from `cur`, yielding only chains
/// that cannot be extended further.
///
/// Board state during a chain follows the over-the-board rule: the moving
/// piece has left `origin` (that square is free to land on), while jumped
/// pieces stay on the board until the move completes, blocking landing
/// squares, and cannot be jumped a second time.
///
/// Promotion freezes the chain: a man landing on its promotion row stops
/// there and does not continue jumping as a king within the same move.
fn extend_jumps(
    pos: &Position,
    side: Side,
    king: bool,
    origin: u8,
    cur: u8,
    captured: &mut Vec<u8>,
    out: &mut Vec<Move>,
) {
    let occupied = pos.all_occupied() & !(1u32 << origin);
    let enemy = pos.occupied(side.other());

    let mut extended = false;
    for &(dr, dc) in directions(side, king) {
        let Some(mid) = diag(cur, dr, dc) else { continue };
        let Some(land) = diag(mid, dr, dc) else { continue };
        if enemy & (1 << mid) == 0 || captured.contains(&mid) {
            continue;
        }
        if occupied & (1 << land) != 0 {
            continue;
        }

        extended = true;
        captured.push(mid);
        let (land_row, _) = sq_rc(land);
        if !king && land_row == side.promotion_row() {
            out.push(Move::Jump {
                from: origin,
                captures: captured.clone(),
                to: land,
            });
        } else {
            extend_jumps(pos, side, king, origin, land, captured, out);
        }
        captured.pop();
    }

    if !extended && !captured.is_empty() {
        out.push(Move::Jump {
            from: origin,
            captures: captured.clone(),
            to: cur,
        });
    }
}

/// Returns the complete legal move set for the side to move.
///
/// Enforces mandatory capture: when any capture exists anywhere for the
/// mover, the returned list consists exclusively of capture chains.
/// Output is deterministic: a single scan in ascending square order, with
/// the fixed diagonal order of [`DIAGONALS`] per piece.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let side = pos.to_move();
    let own = pos.occupied(side);
    let kings = pos.kings(side);
    let occupied = pos.all_occupied();

    let mut jumps: Vec<Move> = Vec::new();
    for sq in 0..SQUARES {
        if own & (1 << sq) == 0 {
            continue;
        }
        let king = kings & (1 << sq) != 0;
        let mut chain = Vec::new();
        extend_jumps(pos, side, king, sq, sq, &mut chain, &mut jumps);
    }
    if !jumps.is_empty() {
        return jumps;
    }

    let mut steps: Vec<Move> = Vec::new();
    for sq in 0..SQUARES {
        if own & (1 << sq) == 0 {
            continue;
        }
        let king = kings & (1 << sq) != 0;
        for &(dr, dc) in directions(side, king) {
            let Some(to) = diag(sq, dr, dc) else { continue };
            if occupied & (1 << to) == 0 {
                steps.push(Move::Step { from: sq, to });
            }
        }
    }
    steps
}

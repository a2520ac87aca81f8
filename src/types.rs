use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Board edge length. Only the 32 dark squares are playable.
pub const BOARD_SIZE: u8 = 8;
/// Number of playable (dark) squares.
pub const SQUARES: u8 = 32;

/// Host-facing board representation: 8x8 grid of small integers.
/// 0 empty, +1 red man, +2 red king, -1 black man, -2 black king.
pub type Grid = [[i8; 8]; 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Sign convention used throughout scoring: red positive, black negative.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Red => 1.0,
            Side::Black => -1.0,
        }
    }

    /// Row a man of this side promotes on. Red marches toward row 0,
    /// black toward row 7.
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }
}

/// Maps grid coordinates to a dark-square index 0..=31.
/// Fails for light squares (`row + col` even) and off-board coordinates.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn sq_index(row: i32, col: i32) -> Result<u8, EngineError> {
    if !(0..i32::from(BOARD_SIZE)).contains(&row)
        || !(0..i32::from(BOARD_SIZE)).contains(&col)
        || (row + col) % 2 == 0
    {
        return Err(EngineError::InvalidSquare { row, col });
    }
    Ok((row * 4 + col / 2) as u8)
}

/// Inverse of [`sq_index`]: dark-square index to (row, col).
#[inline]
pub fn sq_coords(sq: u8) -> Result<(u8, u8), EngineError> {
    if sq >= SQUARES {
        return Err(EngineError::InvalidSquare {
            row: i32::from(sq),
            col: -1,
        });
    }
    let row = sq / 4;
    let col = (sq % 4) * 2 + u8::from(row % 2 == 0);
    Ok((row, col))
}

/// Infallible variant of [`sq_coords`] for indices the generator produced
/// itself. Bounds are a structural invariant there, not host input.
#[inline]
pub(crate) fn sq_rc(sq: u8) -> (u8, u8) {
    debug_assert!(sq < SQUARES);
    let row = sq / 4;
    (row, (sq % 4) * 2 + u8::from(row % 2 == 0))
}

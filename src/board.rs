use std::fmt;

use crate::errors::EngineError;
use crate::types::{sq_index, sq_rc, Grid, Side, BOARD_SIZE, SQUARES};

/// Starting mask for black: squares 0..=11, the three rows nearest row 0.
const BLACK_START: u32 = 0x0000_0FFF;
/// Starting mask for red: squares 20..=31, the three rows nearest row 7.
const RED_START: u32 = 0xFFF0_0000;

/// Immutable checkers position over the 32 dark squares.
///
/// One bit per square per attribute: occupancy and kinghood for each side,
/// plus the side to move. Value semantics (`Copy`) keep sibling branches in
/// the search from ever aliasing a shared board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    red: u32,
    red_kings: u32,
    black: u32,
    black_kings: u32,
    to_move: Side,
}

impl Position {
    /// Standard starting position: twelve men per side, red to move.
    #[inline]
    pub fn initial() -> Self {
        Self {
            red: RED_START,
            red_kings: 0,
            black: BLACK_START,
            black_kings: 0,
            to_move: Side::Red,
        }
    }

    /// Builds a position from raw bitmaps. Crate-internal: callers must
    /// uphold the disjoint-occupancy and kings-subset invariants.
    #[inline]
    pub(crate) fn from_bits(
        red: u32,
        red_kings: u32,
        black: u32,
        black_kings: u32,
        to_move: Side,
    ) -> Self {
        debug_assert_eq!(red & black, 0, "occupancy bitmaps overlap");
        debug_assert_eq!(red_kings & !red, 0, "red kings outside red occupancy");
        debug_assert_eq!(black_kings & !black, 0, "black kings outside black occupancy");
        Self {
            red,
            red_kings,
            black,
            black_kings,
            to_move,
        }
    }

    /// Converts the host's 8x8 grid to bitboard form. The side to move is
    /// always supplied explicitly; inferring it from piece counts is lossy
    /// and not supported.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn from_grid(grid: &Grid, to_move: Side) -> Result<Self, EngineError> {
        let mut red = 0u32;
        let mut red_kings = 0u32;
        let mut black = 0u32;
        let mut black_kings = 0u32;

        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let sq = sq_index(row as i32, col as i32)?;
                let bit = 1u32 << sq;
                match cell {
                    1 => red |= bit,
                    2 => {
                        red |= bit;
                        red_kings |= bit;
                    }
                    -1 => black |= bit,
                    -2 => {
                        black |= bit;
                        black_kings |= bit;
                    }
                    _ => {
                        return Err(EngineError::InvalidSquare {
                            row: row as i32,
                            col: col as i32,
                        });
                    }
                }
            }
        }

        Ok(Self::from_bits(red, red_kings, black, black_kings, to_move))
    }

    /// Inverse of [`Position::from_grid`]; exact on dark squares.
    pub fn to_grid(&self) -> Grid {
        let mut grid: Grid = [[0; 8]; 8];
        for sq in 0..SQUARES {
            let (row, col) = sq_rc(sq);
            let bit = 1u32 << sq;
            let cell = if self.red & bit != 0 {
                if self.red_kings & bit != 0 {
                    2
                } else {
                    1
                }
            } else if self.black & bit != 0 {
                if self.black_kings & bit != 0 {
                    -2
                } else {
                    -1
                }
            } else {
                0
            };
            grid[row as usize][col as usize] = cell;
        }
        grid
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Same board with the given side to move. Used by the game-state
    /// classifier to probe both sides' move sets.
    #[inline]
    pub fn with_side(mut self, side: Side) -> Self {
        self.to_move = side;
        self
    }

    #[inline]
    pub fn occupied(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red,
            Side::Black => self.black,
        }
    }

    #[inline]
    pub fn kings(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_kings,
            Side::Black => self.black_kings,
        }
    }

    /// All occupied squares, both sides.
    #[inline]
    pub fn all_occupied(&self) -> u32 {
        self.red | self.black
    }

    #[inline]
    pub fn men_count(&self, side: Side) -> u32 {
        (self.occupied(side) & !self.kings(side)).count_ones()
    }

    #[inline]
    pub fn king_count(&self, side: Side) -> u32 {
        self.kings(side).count_ones()
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.occupied(side).count_ones()
    }

    #[inline]
    pub fn owner_at(&self, sq: u8) -> Option<Side> {
        let bit = 1u32 << sq;
        if self.red & bit != 0 {
            Some(Side::Red)
        } else if self.black & bit != 0 {
            Some(Side::Black)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_king(&self, sq: u8) -> bool {
        (self.red_kings | self.black_kings) & (1 << sq) != 0
    }
}

impl fmt::Display for Position {
    /// Board diagram with row 0 at the top: `r`/`R` red man/king,
    /// `b`/`B` black man/king, `.` empty dark square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.to_grid();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match grid[row as usize][col as usize] {
                    1 => 'r',
                    2 => 'R',
                    -1 => 'b',
                    -2 => 'B',
                    _ if (row + col) % 2 == 1 => '.',
                    _ => ' ',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "{:?} to move", self.to_move)
    }
}

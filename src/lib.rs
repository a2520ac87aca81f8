#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod errors;
pub mod board;
pub mod moves;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod oracle;
pub mod outcome;
pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Position;
pub use crate::engine::apply::apply_move;
pub use crate::engine::score::evaluate;
pub use crate::errors::EngineError;
pub use crate::moves::{legal_moves, Move};
pub use crate::oracle::{EndgameOracle, NullOracle, OracleOutcome};
pub use crate::outcome::{evaluate_game_state, GameOutcome};
pub use crate::solver::{search_root, SearchResult, DEFAULT_DEPTH};
pub use crate::types::{sq_coords, sq_index, Grid, Side};

/// Grid-level AI entry point: converts the host's 8x8 grid and searches.
/// `max_depth` is host-configurable; [`DEFAULT_DEPTH`] is the documented default.
pub fn suggest_move(
    grid: &Grid,
    to_move: Side,
    max_depth: u8,
) -> Result<SearchResult, EngineError> {
    let pos = Position::from_grid(grid, to_move)?;
    search_root(&pos, max_depth, &NullOracle)
}

/// Grid-level outcome classification, used by hosts to stop play.
/// Side-to-move does not influence the classification rules, which probe
/// both sides' move sets explicitly.
pub fn evaluate_game_state_grid(grid: &Grid) -> Result<GameOutcome, EngineError> {
    let pos = Position::from_grid(grid, Side::Red)?;
    Ok(evaluate_game_state(&pos))
}

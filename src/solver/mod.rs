use serde::Serialize;

use crate::board::Position;
use crate::engine::apply::apply_move;
use crate::errors::EngineError;
use crate::moves::{legal_moves, Move};
use crate::oracle::EndgameOracle;
use crate::types::Side;

pub mod negamax;

use negamax::negamax;

/// Magnitude of a decided-game score. Remaining depth is added on top so
/// the search prefers faster wins and slower losses among equal outcomes.
pub const BIG: f32 = 10_000.0;

/// Documented default for the host's difficulty setting.
pub const DEFAULT_DEPTH: u8 = 6;

/// Outcome of one root search. Constructed once per [`search_root`] call
/// and handed to the host; the core keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub best_move: Move,
    /// Signed score, positive favoring red regardless of who moved.
    pub score: f32,
    /// Depth the search was asked for.
    pub depth: u8,
    /// Positions evaluated across the entire tree of this invocation.
    pub nodes: u64,
}

/// Searches `max_depth` plies ahead and returns the best move for the side
/// to move, with its score and the cumulative node count.
///
/// Fails with [`EngineError::NoLegalMoves`] when the mover has no moves;
/// hosts are expected to classify such positions as terminal first.
///
/// Root selection uses strict improvement, so among equal-scoring moves the
/// first-enumerated one wins — deterministic for fixture tests.
pub fn search_root(
    pos: &Position,
    max_depth: u8,
    oracle: &dyn EndgameOracle,
) -> Result<SearchResult, EngineError> {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    // Single accumulator shared by every node of this search; per-call
    // counters would under-report the total.
    let mut nodes: u64 = 0;
    let mut best_score = f32::NEG_INFINITY;
    let mut best_move = &moves[0];

    for mv in &moves {
        let child = apply_move(pos, mv);
        let score = -negamax(
            &child,
            max_depth.saturating_sub(1),
            f32::NEG_INFINITY,
            -best_score,
            oracle,
            &mut nodes,
        );
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    // Internal scores are mover-relative; the reported score is red-positive.
    let score = match pos.to_move() {
        Side::Red => best_score,
        Side::Black => -best_score,
    };

    Ok(SearchResult {
        best_move: best_move.clone(),
        score,
        depth: max_depth,
        nodes,
    })
}

use crate::board::Position;
use crate::engine::apply::apply_move;
use crate::engine::score::evaluate;
use crate::moves::legal_moves;
use crate::oracle::{EndgameOracle, OracleOutcome};

use super::BIG;

/// Negamax with fail-soft alpha-beta pruning. Returns the value of `pos`
/// from the perspective of its side to move.
///
/// Node order at each ply: oracle probe (definitive answers short-circuit
/// without generating moves), static evaluation at depth zero, then the
/// move loop with negated child scores and swapped bounds. A side left
/// without moves has lost. `nodes` is the accumulator shared across the
/// whole search tree.
pub(crate) fn negamax(
    pos: &Position,
    depth: u8,
    mut alpha: f32,
    beta: f32,
    oracle: &dyn EndgameOracle,
    nodes: &mut u64,
) -> f32 {
    *nodes += 1;

    match oracle.probe(pos) {
        OracleOutcome::Win => return BIG + f32::from(depth),
        OracleOutcome::Loss => return -BIG - f32::from(depth),
        OracleOutcome::Draw => return 0.0,
        OracleOutcome::Unknown => {}
    }

    if depth == 0 {
        return pos.to_move().sign() * evaluate(pos);
    }

    let moves = legal_moves(pos);
    if moves.is_empty() {
        return -BIG - f32::from(depth);
    }

    let mut best = f32::NEG_INFINITY;
    for mv in &moves {
        let child = apply_move(pos, mv);
        let score = -negamax(&child, depth - 1, -beta, -alpha, oracle, nodes);
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            // Fail-soft: the best score found so far is still returned.
            break;
        }
    }
    best
}

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// Perfect-play verdict for a position, from the perspective of the side
/// to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OracleOutcome {
    Win,
    Loss,
    Draw,
    /// Position is not covered by the oracle.
    Unknown,
}

/// Capability interface for endgame-outcome lookups.
///
/// The search engine takes the oracle as an injected trait object so a real
/// database loader can be substituted later and tests can supply
/// deterministic fakes. A definitive answer short-circuits the search at
/// that node.
pub trait EndgameOracle {
    fn probe(&self, pos: &Position) -> OracleOutcome;
}

/// Stub oracle: no database is consulted, every probe answers `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOracle;

impl EndgameOracle for NullOracle {
    #[inline]
    fn probe(&self, _pos: &Position) -> OracleOutcome {
        OracleOutcome::Unknown
    }
}

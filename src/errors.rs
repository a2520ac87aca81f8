use thiserror::Error;

/// Failure taxonomy for the engine core.
///
/// Both variants signal host-side misuse of the API; nothing here is
/// transient or retryable, and the core performs no recovery of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate pair does not address a usable dark square, or a bit
    /// index falls outside 0..=31.
    #[error("invalid square: row {row}, col {col} is not a playable dark square")]
    InvalidSquare { row: i32, col: i32 },

    /// The search was invoked on a position where the side to move has no
    /// legal moves. Callers are expected to classify the game as terminal
    /// before asking for a move.
    #[error("no legal moves for the side to move")]
    NoLegalMoves,
}

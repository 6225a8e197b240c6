use crate::types::Side;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("{side} has no legal move")]
    NoLegalMoves { side: Side },

    /// Every root task failed, so no move could be chosen.
    #[error("all {attempted} root searches failed for {side}")]
    AllTasksFailed { side: Side, attempted: usize },

    #[error("illegal move {index} for {side}")]
    IllegalMove { side: Side, index: i32 },

    #[error("game is already over")]
    GameOver,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("it is not an AI player's turn")]
    NotAiTurn,

    #[error("unknown player selector {0} (expected 0..=4)")]
    InvalidPlayerSelector(u8),

    #[error("invalid search config: {message}")]
    InvalidConfig { message: String },

    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

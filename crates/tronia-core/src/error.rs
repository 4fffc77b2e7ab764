//! Error types for the Tronia backend

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum GameError {
    #[error("not in battle")]
    NotInBattle,

    #[error("battle is already finished")]
    BattleFinished,

    #[error("battle is still ongoing")]
    BattleOngoing,

    #[error("invalid bet: {0}")]
    InvalidBet(String),

    #[error("invalid player name: {0}")]
    InvalidName(String),

    #[error("invalid tronium amount")]
    InvalidAmount,

    #[error("channel is not open")]
    ChannelClosed,

    #[error("insufficient tronium: need {required}, have {available}")]
    InsufficientTronium { required: u64, available: u64 },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type GameResult<T> = Result<T, GameError>;

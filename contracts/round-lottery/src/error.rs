use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("invalid payment: expected {expected}, received {received}")]
    InvalidPayment { expected: String, received: String },

    #[error("round is full ({max_players} players)")]
    RoundFull { max_players: u32 },

    #[error("payout failed: {reason}")]
    PayoutFailure { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

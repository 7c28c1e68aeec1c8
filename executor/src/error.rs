use common::ownable::OwnableError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ownable(#[from] OwnableError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid transfer id: expected 32 bytes, got {length}")]
    InvalidTransferId { length: usize },

    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[error("Invalid step amount at index {index}: must be greater than zero")]
    InvalidStepAmount { index: usize },

    #[error("Invalid pull request: native assets cannot be pulled via the custody proxy")]
    InvalidPullRequest,

    #[error("Execution already in progress")]
    ExecutionInProgress,

    #[error("Nothing pending: finalize called without an active execution")]
    NothingPending,

    #[error("Insufficient native funds: expected {expected}, got {got}")]
    InsufficientNativeFunds { expected: Uint128, got: Uint128 },

    #[error("Insufficient output: minimum {min_amount_out}, produced {actual}")]
    InsufficientOutput {
        min_amount_out: Uint128,
        actual: Uint128,
    },
}

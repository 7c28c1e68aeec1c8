use common::ownable::OwnableError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ownable(#[from] OwnableError),

    #[error("Unauthorized: caller is not an authorized puller")]
    Unauthorized,

    #[error("Native funds rejected: this contract does not accept coins")]
    NativeFundsRejected,

    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,
}

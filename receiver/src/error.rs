use common::ownable::OwnableError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ownable(#[from] OwnableError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Payload decode failure: {reason}")]
    DecodeFailure { reason: String },

    #[error("Compose message already processed: {guid}")]
    ComposeAlreadyProcessed { guid: String },

    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    #[error("A delivery is already in flight")]
    DeliveryInFlight,

    #[error("No delivery in flight for this reply")]
    NoDeliveryInFlight,

    #[error("External call failed: value transfer was rejected downstream")]
    ExternalCallFailed,

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },
}

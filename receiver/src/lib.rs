//! Swaplane Receiver - Bridge Receiver Adapters
//!
//! One inbound entry point per bridge provider, each owning exactly its
//! provider's trust-boundary check:
//!
//! - Axelar: the configured gateway validates (and consumes) the command
//!   approval before the payload is acted on.
//! - CCIP: only the configured router may deliver.
//! - Stargate V2 / LayerZero: only the configured endpoint may deliver a
//!   compose message; a per-GUID consumed map blocks replays.
//! - Open-Intent settler: only the configured output settler may notify.
//!
//! Every entry decodes the same inner payload `(transfer_id, steps,
//! receiver)` and forwards it to the executor. Where the bridged asset is
//! already resident in the adapter, execution failures are caught and the
//! raw asset is delivered to the receiver instead (a failed cross-chain swap
//! must never strand the user's funds).

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod reply;
pub mod state;

pub use crate::error::ContractError;

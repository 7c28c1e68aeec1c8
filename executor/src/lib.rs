//! Swaplane Executor - Swap Sequence Execution Engine
//!
//! Executes an ordered list of opaque call descriptors ("swap steps") against
//! caller-supplied liquidity venues, with strict accounting:
//!
//! 1. Funding is either already resident (bridge-delivered assets, attached
//!    native coins) or pulled from the caller via the custody proxy.
//! 2. Steps run strictly in caller order; any venue failure reverts the
//!    entire sequence.
//! 3. A self-addressed `Finalize` message runs after the last step and sweeps
//!    every surplus over the pre-execution snapshot to the receiver, enforcing
//!    the min-out floor on the final step's output asset.
//!
//! Pre-existing engine balances are never swept: the snapshot reserves them,
//! so only value produced (or left over) by the current sequence reaches the
//! receiver.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

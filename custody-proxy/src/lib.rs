//! Swaplane Custody Proxy - Authorized Pull Transfers
//!
//! A minimal holding contract that performs token pulls on behalf of a fixed
//! allow-list of callers. Users grant a long-lived CW20 allowance to this
//! proxy once; only authorized movers (the swap executor) can then spend it,
//! and only by instructing the proxy.
//!
//! The proxy holds no balances of its own and rejects any attached native
//! funds on every message.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

//! State definitions for the executor.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swaplane-executor";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One asset to settle during finalize. Anything at or below `reserved` is
/// pre-existing balance the execution must not touch.
#[cw_serde]
pub struct SweepTarget {
    pub asset: AssetInfo,
    pub reserved: Uint128,
}

/// Finalize plan for the execution currently in flight. Written before any
/// external message runs; removed by `Finalize`. Its presence doubles as the
/// reentrancy guard for `Execute`.
#[cw_serde]
pub struct PendingSweep {
    /// 32-byte correlation id of the transfer
    pub transfer_id: [u8; 32],
    /// Recipient of every surplus
    pub receiver: Addr,
    /// Distinct assets touched by the sequence, in first-touch order
    pub targets: Vec<SweepTarget>,
    /// The final step's output asset (min-out is enforced on this one)
    pub final_output: AssetInfo,
    /// Slippage floor on the final output surplus
    pub min_amount_out: Uint128,
}

/// Custody proxy consulted for pull-based funding
pub const CUSTODY_PROXY: Item<Addr> = Item::new("custody_proxy");

/// In-flight finalize plan (also the reentrancy guard)
pub const PENDING_SWEEP: Item<PendingSweep> = Item::new("pending_sweep");

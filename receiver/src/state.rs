//! State definitions for the receiver.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swaplane-receiver";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the catch-and-recover execution dispatch
pub const DISPATCH_REPLY_ID: u64 = 1;

/// Reply id for owner-recovery value transfers
pub const PULL_TOKEN_REPLY_ID: u64 = 2;

/// Trusted counterparties, one per provider
#[cw_serde]
pub struct Config {
    /// Swap execution engine
    pub executor: Addr,
    /// Axelar gateway (validates and consumes command approvals)
    pub axelar_gateway: Addr,
    /// CCIP router (the only address allowed to deliver CCIP messages)
    pub ccip_router: Addr,
    /// LayerZero endpoint (the only address allowed to deliver composes)
    pub lz_endpoint: Addr,
    /// Open-Intent output settler (the only address allowed to notify fills)
    pub output_settler: Addr,
}

/// The delivery being executed by the current transaction's dispatch
/// submessage. Written before the submessage runs; consumed by the reply.
#[cw_serde]
pub struct InFlightDelivery {
    /// 32-byte transfer id from the decoded payload
    pub transfer_id: [u8; 32],
    /// Recipient of the output (and of the raw asset on recovery)
    pub receiver: Addr,
    /// The raw bridged asset, resident in this contract at dispatch time
    pub source_asset: AssetInfo,
    /// Bridged amount
    pub source_amount: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Compose replay guard: GUID present = consumed
/// Key: 32-byte GUID as &[u8], Value: true
pub const COMPOSE_CONSUMED: Map<&[u8], bool> = Map::new("compose_consumed");

/// Delivery awaiting its dispatch reply (one per transaction)
pub const IN_FLIGHT: Item<InFlightDelivery> = Item::new("in_flight");

use cosmwasm_std::Addr;
use cw_storage_plus::Map;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swaplane-custody-proxy";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Callers allowed to invoke `Pull`
/// Key: caller address, Value: whether authorized
pub const AUTHORIZED: Map<&Addr, bool> = Map::new("authorized");

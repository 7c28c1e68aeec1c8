use common::{AssetInfo, OwnershipResponse, SwapStep};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner
    pub owner: String,
    /// Custody proxy used for pull-based funding
    pub custody_proxy: String,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Run a swap sequence and deliver the output to `receiver`
    ///
    /// Authorization: Anyone. Funding must either be resident already
    /// (bridge-delivered tokens, attached native coins) or pullable from the
    /// sender via the custody proxy.
    Execute {
        /// 32-byte correlation id
        transfer_id: Binary,
        /// Ordered swap steps, all-or-nothing
        steps: Vec<SwapStep>,
        /// Asset funding the sequence
        input_asset: AssetInfo,
        /// Amount funding the sequence
        input_amount: Uint128,
        /// Recipient of the final output and all surpluses
        receiver: String,
        /// Slippage floor on the final step's output (0 = no floor)
        min_amount_out: Uint128,
        /// Pull `input_amount` from the sender via the custody proxy
        /// (same-chain mode, CW20 only) instead of using resident funds
        pull_input: bool,
    },

    /// Settle the in-flight execution: sweep surpluses, enforce min-out
    ///
    /// Authorization: This contract only (self-addressed message)
    Finalize {},

    /// Point the engine at a different custody proxy
    ///
    /// Authorization: Owner only
    SetCustodyProxy { custody_proxy: String },

    /// Propose a new owner (two-step transfer)
    ///
    /// Authorization: Owner only
    ProposeOwner { new_owner: String },

    /// Accept a pending ownership transfer
    ///
    /// Authorization: Pending owner only
    AcceptOwner {},
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Engine configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Current and pending owner
    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub custody_proxy: Addr,
}

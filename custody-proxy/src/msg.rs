use common::OwnershipResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner (manages the allow-list)
    pub owner: String,
    /// Initial allow-list of pull callers (typically just the executor)
    pub authorized: Vec<String>,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Toggle a caller's pull authorization
    ///
    /// Authorization: Owner only
    Authorize {
        /// Caller address to toggle
        caller: String,
        /// Whether the caller may invoke `Pull`
        enabled: bool,
    },

    /// Pull CW20 tokens from `from` to `to` using the allowance `from`
    /// granted to this proxy
    ///
    /// Authorization: Allow-listed callers only
    Pull {
        /// CW20 token contract
        token: String,
        /// Allowance grantor
        from: String,
        /// Transfer destination
        to: String,
        /// Amount to move
        amount: Uint128,
    },

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
    /// Whether a caller is authorized to pull
    #[returns(AuthorizedResponse)]
    Authorized { caller: String },

    /// Paginated list of authorized callers
    #[returns(AuthorizedCallersResponse)]
    AuthorizedCallers {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Current and pending owner
    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct AuthorizedResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct AuthorizedCallersResponse {
    pub callers: Vec<String>,
}

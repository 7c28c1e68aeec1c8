use common::{AssetInfo, OwnershipResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner
    pub owner: String,
    /// Swap execution engine
    pub executor: String,
    /// Axelar gateway
    pub axelar_gateway: String,
    /// CCIP router
    pub ccip_router: String,
    /// LayerZero endpoint
    pub lz_endpoint: String,
    /// Open-Intent output settler
    pub output_settler: String,
}

/// CCIP delivery envelope, constructed by the router
#[cw_serde]
pub struct CcipMessage {
    /// 32-byte CCIP message id
    pub message_id: Binary,
    /// Inner delivery payload
    pub payload: Binary,
    /// Bridged asset, delivered to this contract by the router beforehand
    pub source_asset: AssetInfo,
    /// Bridged amount
    pub source_amount: Uint128,
}

/// LayerZero compose envelope, constructed upstream by `sendCompose`
#[cw_serde]
pub struct ComposeEnvelope {
    /// Bridged asset, delivered alongside the compose
    pub source_asset: AssetInfo,
    /// Bridged amount
    pub source_amount: Uint128,
    /// Inner delivery payload
    pub payload: Binary,
}

/// Messages the adapter sends to the Axelar gateway. Validation consumes
/// the command approval inside the gateway: an unapproved or replayed
/// command makes the gateway revert, aborting the whole delivery.
#[cw_serde]
pub enum AxelarGatewayMsg {
    /// Validate a contract-call command
    ValidateContractCall {
        command_id: Binary,
        source_chain: String,
        source_address: String,
    },
    /// Validate a contract-call-with-mint command; the gateway releases the
    /// bridged asset to the caller on success
    ValidateContractCallAndMint {
        command_id: Binary,
        source_chain: String,
        source_address: String,
        asset: AssetInfo,
        amount: Uint128,
    },
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Axelar contract-call delivery (no attached asset)
    ///
    /// Authorization: Anyone; the gateway validation message reverts
    /// unauthenticated commands. The bridged asset (if any) was routed to
    /// the executor out of band, so there is nothing here to recover —
    /// execution failures propagate and revert the delivery.
    ReceiveAxelar {
        command_id: Binary,
        source_chain: String,
        source_address: String,
        payload: Binary,
        /// Asset funding the swap, already resident in the executor
        source_asset: AssetInfo,
        source_amount: Uint128,
    },

    /// Axelar contract-call-with-token delivery
    ///
    /// Authorization: Anyone; the gateway validate-and-mint message reverts
    /// unauthenticated commands and releases the asset to this contract.
    /// Execution failures are caught and the raw asset goes to the receiver.
    ReceiveAxelarWithToken {
        command_id: Binary,
        source_chain: String,
        source_address: String,
        payload: Binary,
        source_asset: AssetInfo,
        source_amount: Uint128,
    },

    /// CCIP delivery
    ///
    /// Authorization: Configured CCIP router only. The router delivered the
    /// bridged asset to this contract beforehand. Execution failures are
    /// caught and the raw asset goes to the receiver.
    CcipReceive { message: CcipMessage },

    /// LayerZero compose delivery (Stargate V2)
    ///
    /// Authorization: Configured endpoint only. Source authenticity was
    /// established upstream by the endpoint's sendCompose bookkeeping; no
    /// further sender check is performed here by design. A consumed GUID
    /// cannot be delivered twice. Execution failures are caught and the raw
    /// asset goes to the receiver.
    LzCompose {
        /// Composer address recorded by the endpoint
        from: String,
        /// 32-byte message GUID
        guid: Binary,
        /// Compose envelope (asset, amount, inner payload)
        message: Binary,
    },

    /// Open-Intent output-settler fill notification
    ///
    /// Authorization: Configured output settler only. Anyone may call the
    /// settler's own fill; spending the filler's approved tokens happened
    /// there, fully decoupled from this permission check. Execution failures
    /// are caught and the raw asset goes to the receiver.
    OutputFilled {
        /// 32-byte order id
        order_id: Binary,
        source_asset: AssetInfo,
        source_amount: Uint128,
        payload: Binary,
    },

    /// Hand the resident asset to the executor and run the swap sequence
    ///
    /// Authorization: This contract only (self-addressed message, the
    /// atomic subtree the reply handler catches)
    Dispatch {
        transfer_id: Binary,
        steps: Vec<common::SwapStep>,
        receiver: String,
        min_amount_out: Uint128,
        source_asset: AssetInfo,
        source_amount: Uint128,
        /// Move the asset from this contract to the executor first; false
        /// when the asset is already resident in the executor
        move_asset: bool,
    },

    /// Manual sweep for funds stuck in this contract
    ///
    /// Authorization: Owner only. A rejected downstream transfer surfaces
    /// as ExternalCallFailed rather than silently dropping funds.
    PullToken {
        asset: AssetInfo,
        to: String,
        amount: Uint128,
    },

    /// Point the adapter at a different executor
    ///
    /// Authorization: Owner only
    SetExecutor { executor: String },

    /// Replace the trusted Axelar gateway
    ///
    /// Authorization: Owner only
    SetAxelarGateway { gateway: String },

    /// Replace the trusted CCIP router
    ///
    /// Authorization: Owner only
    SetCcipRouter { router: String },

    /// Replace the trusted LayerZero endpoint
    ///
    /// Authorization: Owner only
    SetLzEndpoint { endpoint: String },

    /// Replace the trusted output settler
    ///
    /// Authorization: Owner only
    SetOutputSettler { settler: String },

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
    /// Trusted counterparties
    #[returns(ConfigResponse)]
    Config {},

    /// Whether a compose GUID has been consumed
    #[returns(ComposeConsumedResponse)]
    ComposeConsumed { guid: Binary },

    /// Current and pending owner
    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub executor: Addr,
    pub axelar_gateway: Addr,
    pub ccip_router: Addr,
    pub lz_endpoint: Addr,
    pub output_settler: Addr,
}

#[cw_serde]
pub struct ComposeConsumedResponse {
    pub consumed: bool,
}

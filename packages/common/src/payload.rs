//! Delivery payload shared by every receiver adapter.
//!
//! Bridge providers wrap this payload in their own envelopes; once the
//! provider-specific authenticity check passes, every adapter decodes the
//! same inner format and forwards it to the executor. Payloads exist only
//! for the duration of one transaction and are never persisted.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, Binary, StdError, Uint128};

/// Transfer ids are 32-byte correlation keys shared with the source chain.
pub const TRANSFER_ID_LEN: usize = 32;

/// One atomic instruction to call a liquidity venue with given inputs.
#[cw_serde]
pub struct SwapStep {
    /// Venue contract to invoke
    pub venue: String,
    /// Spender granted the input allowance (often the venue itself, but
    /// periphery routers may pull from a separate target)
    pub approval_target: String,
    /// Asset consumed by this step
    pub input_asset: crate::AssetInfo,
    /// Asset this step is expected to produce
    pub output_asset: crate::AssetInfo,
    /// Exact amount made available to the venue
    pub input_amount: Uint128,
    /// Opaque execute message forwarded to the venue verbatim
    pub call_data: Binary,
    /// Pull the input from the original caller via the custody proxy
    /// instead of consuming engine-held funds
    pub requires_pull: bool,
}

/// Decoded inner payload of a bridge delivery.
#[cw_serde]
pub struct DeliveryPayload {
    /// 32-byte transfer id correlating with the source-chain deposit
    pub transfer_id: Binary,
    /// Ordered swap steps, executed exactly once, all-or-nothing
    pub steps: Vec<SwapStep>,
    /// Final recipient of the output (and of the raw asset on recovery)
    pub receiver: String,
    /// Slippage floor on the final step's output; 0 = no floor
    #[serde(default)]
    pub min_amount_out: Uint128,
}

/// Decode a delivery payload from a provider envelope.
///
/// Any malformed payload is a hard error: no assets have been claimed yet
/// when decoding runs, so reverting the whole delivery is safe and leaves
/// the bridge-level retry mechanism responsible for re-delivery.
pub fn decode_delivery(payload: &Binary) -> Result<DeliveryPayload, StdError> {
    let delivery: DeliveryPayload = from_json(payload)?;
    if delivery.transfer_id.len() != TRANSFER_ID_LEN {
        return Err(StdError::generic_err(format!(
            "transfer_id must be {} bytes, got {}",
            TRANSFER_ID_LEN,
            delivery.transfer_id.len()
        )));
    }
    Ok(delivery)
}

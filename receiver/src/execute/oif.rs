//! Open-Intent output-settler fill notification handler.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use common::AssetInfo;

use crate::error::ContractError;
use crate::execute::dispatch::{decode_payload, stage_recoverable_dispatch};
use crate::state::CONFIG;

/// Settler-gated fill notification: anyone may call the settler's own fill
/// (spending the filler's approved tokens happens there), but only the
/// configured settler may notify this receiver. The filled asset is resident
/// here by the time the notification arrives, so execution failures are
/// caught and the raw asset goes to the receiver.
pub fn execute_output_filled(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    order_id: Binary,
    source_asset: AssetInfo,
    source_amount: Uint128,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.output_settler {
        return Err(ContractError::Unauthorized);
    }

    let delivery = decode_payload(&payload)?;
    let transfer_id = hex::encode(delivery.transfer_id.as_slice());

    let dispatch = stage_recoverable_dispatch(deps, &env, delivery, source_asset, source_amount)?;

    Ok(Response::new()
        .add_submessage(dispatch)
        .add_attribute("action", "output_filled")
        .add_attribute("order_id", order_id.to_base64())
        .add_attribute("transfer_id", format!("0x{transfer_id}")))
}

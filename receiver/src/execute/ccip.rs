//! CCIP delivery handler.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::dispatch::{decode_payload, stage_recoverable_dispatch};
use crate::msg::CcipMessage;
use crate::state::CONFIG;

/// Router-gated delivery: only the configured CCIP router may invoke the
/// receive entry point. The router delivered the bridged asset to this
/// contract beforehand, so execution failures are caught and the raw asset
/// goes to the receiver.
pub fn execute_ccip_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message: CcipMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.ccip_router {
        return Err(ContractError::Unauthorized);
    }

    let delivery = decode_payload(&message.payload)?;
    let transfer_id = hex::encode(delivery.transfer_id.as_slice());

    let dispatch = stage_recoverable_dispatch(
        deps,
        &env,
        delivery,
        message.source_asset,
        message.source_amount,
    )?;

    Ok(Response::new()
        .add_submessage(dispatch)
        .add_attribute("action", "ccip_receive")
        .add_attribute("message_id", message.message_id.to_base64())
        .add_attribute("transfer_id", format!("0x{transfer_id}")))
}

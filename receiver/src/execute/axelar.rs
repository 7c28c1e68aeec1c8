//! Axelar delivery handlers.
//!
//! Authenticity is delegated to the configured gateway: the validation
//! message consumes the command approval inside the gateway and reverts for
//! unapproved or replayed commands, aborting the whole delivery before the
//! payload is acted on.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};

use common::AssetInfo;

use crate::error::ContractError;
use crate::execute::dispatch::{decode_payload, plain_executor_msg, stage_recoverable_dispatch};
use crate::msg::AxelarGatewayMsg;
use crate::state::CONFIG;

/// Contract-call delivery: the bridged asset was routed to the executor out
/// of band, so execution failures propagate — there is nothing resident here
/// to recover.
#[allow(clippy::too_many_arguments)]
pub fn execute_receive_axelar(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    command_id: Binary,
    source_chain: String,
    source_address: String,
    payload: Binary,
    source_asset: AssetInfo,
    source_amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let delivery = decode_payload(&payload)?;
    let transfer_id = hex::encode(delivery.transfer_id.as_slice());

    let validate = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.axelar_gateway.to_string(),
        msg: to_json_binary(&AxelarGatewayMsg::ValidateContractCall {
            command_id: command_id.clone(),
            source_chain: source_chain.clone(),
            source_address,
        })?,
        funds: vec![],
    });

    let execute = plain_executor_msg(&deps, delivery, source_asset, source_amount)?;

    Ok(Response::new()
        .add_message(validate)
        .add_message(execute)
        .add_attribute("action", "receive_axelar")
        .add_attribute("command_id", command_id.to_base64())
        .add_attribute("source_chain", source_chain)
        .add_attribute("transfer_id", format!("0x{transfer_id}")))
}

/// Contract-call-with-token delivery: the gateway releases the bridged asset
/// to this contract on validation, then the dispatch submessage runs the
/// swaps; on failure the raw asset goes to the receiver.
#[allow(clippy::too_many_arguments)]
pub fn execute_receive_axelar_with_token(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    command_id: Binary,
    source_chain: String,
    source_address: String,
    payload: Binary,
    source_asset: AssetInfo,
    source_amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let delivery = decode_payload(&payload)?;
    let transfer_id = hex::encode(delivery.transfer_id.as_slice());

    let validate = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.axelar_gateway.to_string(),
        msg: to_json_binary(&AxelarGatewayMsg::ValidateContractCallAndMint {
            command_id: command_id.clone(),
            source_chain: source_chain.clone(),
            source_address,
            asset: source_asset.clone(),
            amount: source_amount,
        })?,
        funds: vec![],
    });

    let dispatch = stage_recoverable_dispatch(deps, &env, delivery, source_asset, source_amount)?;

    Ok(Response::new()
        .add_message(validate)
        .add_submessage(dispatch)
        .add_attribute("action", "receive_axelar_with_token")
        .add_attribute("command_id", command_id.to_base64())
        .add_attribute("source_chain", source_chain)
        .add_attribute("transfer_id", format!("0x{transfer_id}")))
}

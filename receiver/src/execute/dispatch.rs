//! Execution hand-off shared by all provider entry points.
//!
//! The catch-and-recover path wraps a self-addressed `Dispatch` in a
//! `reply_always` submessage: the asset hand-off and the swap sequence form
//! one atomic subtree, so on failure everything rolls back and the raw
//! bridged asset is still resident here for the reply handler to pay out.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, SubMsg, Uint128,
    WasmMsg,
};

use common::{decode_delivery, AssetInfo, DeliveryPayload, SwapStep};

use crate::error::ContractError;
use crate::state::{InFlightDelivery, CONFIG, DISPATCH_REPLY_ID, IN_FLIGHT};

/// Decode the shared inner payload; any malformed payload hard-reverts the
/// delivery before assets are claimed.
pub fn decode_payload(payload: &Binary) -> Result<DeliveryPayload, ContractError> {
    decode_delivery(payload).map_err(|err| ContractError::DecodeFailure {
        reason: err.to_string(),
    })
}

/// Stage a catch-and-recover execution of `delivery`, funded by the asset
/// currently resident in this contract.
///
/// Writes `IN_FLIGHT` before the submessage runs (checks-effects-
/// interactions), then returns the `reply_always` submessage to attach.
pub fn stage_recoverable_dispatch(
    deps: DepsMut,
    env: &Env,
    delivery: DeliveryPayload,
    source_asset: AssetInfo,
    source_amount: Uint128,
) -> Result<SubMsg, ContractError> {
    if source_amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let receiver = deps.api.addr_validate(&delivery.receiver)?;

    if IN_FLIGHT.may_load(deps.storage)?.is_some() {
        return Err(ContractError::DeliveryInFlight);
    }

    let transfer_id: [u8; 32] =
        delivery
            .transfer_id
            .to_vec()
            .try_into()
            .map_err(|v: Vec<u8>| ContractError::DecodeFailure {
                reason: format!("transfer_id must be 32 bytes, got {}", v.len()),
            })?;

    IN_FLIGHT.save(
        deps.storage,
        &InFlightDelivery {
            transfer_id,
            receiver,
            source_asset: source_asset.clone(),
            source_amount,
        },
    )?;

    let dispatch = WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&crate::msg::ExecuteMsg::Dispatch {
            transfer_id: delivery.transfer_id,
            steps: delivery.steps,
            receiver: delivery.receiver,
            min_amount_out: delivery.min_amount_out,
            source_asset,
            source_amount,
            move_asset: true,
        })?,
        funds: vec![],
    };

    Ok(SubMsg::reply_always(dispatch, DISPATCH_REPLY_ID))
}

/// Build a plain (uncaught) executor invocation for deliveries whose asset
/// is already resident in the executor. Failures propagate and revert the
/// whole delivery — there is nothing here to recover.
pub fn plain_executor_msg(
    deps: &DepsMut,
    delivery: DeliveryPayload,
    source_asset: AssetInfo,
    source_amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    if source_amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    deps.api.addr_validate(&delivery.receiver)?;

    let config = CONFIG.load(deps.storage)?;
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.executor.to_string(),
        msg: to_json_binary(&executor::msg::ExecuteMsg::Execute {
            transfer_id: delivery.transfer_id,
            steps: delivery.steps,
            input_asset: source_asset,
            input_amount: source_amount,
            receiver: delivery.receiver,
            min_amount_out: delivery.min_amount_out,
            pull_input: false,
        })?,
        funds: vec![],
    }))
}

/// Self-addressed hand-off: move the resident asset to the executor and run
/// the swap sequence. Only this contract may call it.
#[allow(clippy::too_many_arguments)]
pub fn execute_dispatch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer_id: Binary,
    steps: Vec<SwapStep>,
    receiver: String,
    min_amount_out: Uint128,
    source_asset: AssetInfo,
    source_amount: Uint128,
    move_asset: bool,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized);
    }

    let config = CONFIG.load(deps.storage)?;
    let mut messages: Vec<CosmosMsg> = vec![];

    // Native funding rides in on the executor call itself; CW20 funding is
    // transferred over first so it is resident when the executor runs.
    let mut funds = vec![];
    if move_asset {
        match &source_asset {
            AssetInfo::Native { denom } => {
                funds = cosmwasm_std::coins(source_amount.u128(), denom);
            }
            AssetInfo::Cw20 { .. } => {
                messages.push(source_asset.transfer_msg(&config.executor, source_amount)?);
            }
        }
    }

    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.executor.to_string(),
        msg: to_json_binary(&executor::msg::ExecuteMsg::Execute {
            transfer_id,
            steps,
            input_asset: source_asset,
            input_amount: source_amount,
            receiver,
            min_amount_out,
            pull_input: false,
        })?,
        funds,
    }));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "dispatch"))
}

//! Swap-sequence execution and settlement handlers.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};

use common::{AssetInfo, SwapStep, TRANSFER_ID_LEN};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::state::{PendingSweep, SweepTarget, CUSTODY_PROXY, PENDING_SWEEP};

// ============================================================================
// Execute — run a swap sequence
// ============================================================================

/// Run a swap sequence.
///
/// Composes, in order: optional custody-proxy pulls, per-step allowance
/// grants and venue invocations, and a trailing self-addressed `Finalize`.
/// The finalize plan is persisted before any external message runs
/// (checks-effects-interactions); its presence blocks overlapping executions.
#[allow(clippy::too_many_arguments)]
pub fn execute_swap_sequence(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer_id: cosmwasm_std::Binary,
    steps: Vec<SwapStep>,
    input_asset: AssetInfo,
    input_amount: Uint128,
    receiver: String,
    min_amount_out: Uint128,
    pull_input: bool,
) -> Result<Response, ContractError> {
    let transfer_id: [u8; TRANSFER_ID_LEN] =
        transfer_id
            .to_vec()
            .try_into()
            .map_err(|v: Vec<u8>| ContractError::InvalidTransferId { length: v.len() })?;

    if PENDING_SWEEP.may_load(deps.storage)?.is_some() {
        return Err(ContractError::ExecutionInProgress);
    }

    if input_amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    if pull_input && input_asset.is_native() {
        return Err(ContractError::InvalidPullRequest);
    }

    let receiver = deps.api.addr_validate(&receiver)?;
    let custody_proxy = CUSTODY_PROXY.load(deps.storage)?;

    // Native funding must ride in on this call; resident CW20 funding was
    // transferred in by the caller (bridge adapter) beforehand.
    if let AssetInfo::Native { denom } = &input_asset {
        let attached = info
            .funds
            .iter()
            .find(|c| &c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(Uint128::zero());
        if attached < input_amount {
            return Err(ContractError::InsufficientNativeFunds {
                expected: input_amount,
                got: attached,
            });
        }
    }

    // Zero steps: a plain transfer of the input to the receiver.
    if steps.is_empty() {
        return execute_no_op_transfer(
            deps,
            env,
            info,
            transfer_id,
            input_asset,
            input_amount,
            receiver,
            min_amount_out,
            pull_input,
            custody_proxy,
        );
    }

    let final_output = steps[steps.len() - 1].output_asset.clone();

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut events: Vec<Event> = vec![];

    if pull_input {
        messages.push(proxy_pull_msg(
            &custody_proxy,
            &input_asset,
            &info.sender,
            &env.contract.address,
            input_amount,
        )?);
    }

    // Reserved-balance snapshot: everything the engine holds right now minus
    // the resident input is pre-existing balance this execution must not
    // touch. Pulled amounts are not resident yet, so nothing to subtract.
    let mut targets: Vec<SweepTarget> = vec![];
    let mut track = |deps: &DepsMut, asset: &AssetInfo| -> Result<(), ContractError> {
        if targets.iter().any(|t| t.asset == *asset) {
            return Ok(());
        }
        let balance = asset.query_balance(&deps.querier, &env.contract.address)?;
        let reserved = if *asset == input_asset && !pull_input {
            balance.saturating_sub(input_amount)
        } else {
            balance
        };
        targets.push(SweepTarget {
            asset: asset.clone(),
            reserved,
        });
        Ok(())
    };

    track(&deps, &input_asset)?;
    for step in &steps {
        track(&deps, &step.input_asset)?;
        track(&deps, &step.output_asset)?;
    }

    // Steps run strictly in caller order. A failing venue reverts the whole
    // sequence; the adapter layer decides whether to catch.
    for (index, step) in steps.iter().enumerate() {
        if step.input_amount.is_zero() {
            return Err(ContractError::InvalidStepAmount { index });
        }

        let venue = deps.api.addr_validate(&step.venue)?;
        let approval_target = deps.api.addr_validate(&step.approval_target)?;

        if step.requires_pull {
            if step.input_asset.is_native() {
                return Err(ContractError::InvalidPullRequest);
            }
            messages.push(proxy_pull_msg(
                &custody_proxy,
                &step.input_asset,
                &info.sender,
                &env.contract.address,
                step.input_amount,
            )?);
        }

        if let Some(allowance) = step
            .input_asset
            .increase_allowance_msg(&approval_target, step.input_amount)?
        {
            messages.push(allowance);
        }

        let funds = match &step.input_asset {
            AssetInfo::Native { denom } => cosmwasm_std::coins(step.input_amount.u128(), denom),
            AssetInfo::Cw20 { .. } => vec![],
        };
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: venue.to_string(),
            msg: step.call_data.clone(),
            funds,
        }));

        events.push(
            Event::new("asset_swapped")
                .add_attribute("transfer_id", format!("0x{}", hex::encode(transfer_id)))
                .add_attribute("venue", venue)
                .add_attribute("from_asset", step.input_asset.key())
                .add_attribute("to_asset", step.output_asset.key())
                .add_attribute("from_amount", step.input_amount)
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );
    }

    PENDING_SWEEP.save(
        deps.storage,
        &PendingSweep {
            transfer_id,
            receiver: receiver.clone(),
            targets,
            final_output,
            min_amount_out,
        },
    )?;

    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::Finalize {})?,
        funds: vec![],
    }));

    Ok(Response::new()
        .add_messages(messages)
        .add_events(events)
        .add_attribute("action", "execute")
        .add_attribute("transfer_id", format!("0x{}", hex::encode(transfer_id)))
        .add_attribute("steps", steps.len().to_string())
        .add_attribute("receiver", receiver))
}

/// Zero-step execution: deliver the input to the receiver unchanged.
#[allow(clippy::too_many_arguments)]
fn execute_no_op_transfer(
    _deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer_id: [u8; TRANSFER_ID_LEN],
    input_asset: AssetInfo,
    input_amount: Uint128,
    receiver: Addr,
    min_amount_out: Uint128,
    pull_input: bool,
    custody_proxy: Addr,
) -> Result<Response, ContractError> {
    if input_amount < min_amount_out {
        return Err(ContractError::InsufficientOutput {
            min_amount_out,
            actual: input_amount,
        });
    }

    let message = if pull_input {
        // Pull straight from the caller to the receiver; the engine never
        // holds the funds.
        proxy_pull_msg(
            &custody_proxy,
            &input_asset,
            &info.sender,
            &receiver,
            input_amount,
        )?
    } else {
        input_asset.transfer_msg(&receiver, input_amount)?
    };

    Ok(Response::new()
        .add_message(message)
        .add_event(transfer_completed_event(
            &transfer_id,
            &input_asset,
            &receiver,
            input_amount,
            env.block.time.seconds(),
        ))
        .add_attribute("action", "execute")
        .add_attribute("transfer_id", format!("0x{}", hex::encode(transfer_id)))
        .add_attribute("steps", "0"))
}

// ============================================================================
// Finalize — settle surpluses after the sequence
// ============================================================================

/// Settle the in-flight execution.
///
/// Runs as a self-addressed message after the last venue call. Sweeps every
/// surplus over the reserved snapshot to the receiver — surplus beyond the
/// declared minimum is positive slippage and is forwarded in full — and
/// enforces the min-out floor on the final output asset.
pub fn execute_finalize(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized);
    }

    let plan = PENDING_SWEEP
        .may_load(deps.storage)?
        .ok_or(ContractError::NothingPending)?;
    PENDING_SWEEP.remove(deps.storage);

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut response = Response::new()
        .add_attribute("action", "finalize")
        .add_attribute(
            "transfer_id",
            format!("0x{}", hex::encode(plan.transfer_id)),
        );

    let mut final_amount = Uint128::zero();

    for target in &plan.targets {
        let balance = target
            .asset
            .query_balance(&deps.querier, &env.contract.address)?;
        let surplus = balance.saturating_sub(target.reserved);

        if target.asset == plan.final_output {
            if surplus < plan.min_amount_out {
                return Err(ContractError::InsufficientOutput {
                    min_amount_out: plan.min_amount_out,
                    actual: surplus,
                });
            }
            final_amount = surplus;
            if !surplus.is_zero() {
                messages.push(target.asset.transfer_msg(&plan.receiver, surplus)?);
            }
        } else if !surplus.is_zero() {
            messages.push(target.asset.transfer_msg(&plan.receiver, surplus)?);
            response = response
                .add_attribute("swept_asset", target.asset.key())
                .add_attribute("swept_amount", surplus);
        }
    }

    Ok(response
        .add_messages(messages)
        .add_event(transfer_completed_event(
            &plan.transfer_id,
            &plan.final_output,
            &plan.receiver,
            final_amount,
            env.block.time.seconds(),
        )))
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Build a custody-proxy pull moving `amount` of a CW20 asset from `from`
/// to `to`. Native assets never reach this path.
fn proxy_pull_msg(
    custody_proxy: &Addr,
    asset: &AssetInfo,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    let token = match asset {
        AssetInfo::Cw20 { contract_addr } => contract_addr,
        AssetInfo::Native { .. } => return Err(ContractError::InvalidPullRequest),
    };
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: custody_proxy.to_string(),
        msg: to_json_binary(&custody_proxy::msg::ExecuteMsg::Pull {
            token: token.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

fn transfer_completed_event(
    transfer_id: &[u8; TRANSFER_ID_LEN],
    asset: &AssetInfo,
    receiver: &Addr,
    amount: Uint128,
    timestamp: u64,
) -> Event {
    Event::new("transfer_completed")
        .add_attribute("transfer_id", format!("0x{}", hex::encode(transfer_id)))
        .add_attribute("asset", asset.key())
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount)
        .add_attribute("timestamp", timestamp.to_string())
}

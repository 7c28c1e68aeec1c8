//! Executor entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::ownable;

use crate::error::ContractError;
use crate::execute::{execute_finalize, execute_swap_sequence};
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, CUSTODY_PROXY};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    ownable::initialize(deps.storage, owner.clone())?;

    let custody_proxy = deps.api.addr_validate(&msg.custody_proxy)?;
    CUSTODY_PROXY.save(deps.storage, &custody_proxy)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("custody_proxy", custody_proxy))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Execute {
            transfer_id,
            steps,
            input_asset,
            input_amount,
            receiver,
            min_amount_out,
            pull_input,
        } => execute_swap_sequence(
            deps,
            env,
            info,
            transfer_id,
            steps,
            input_asset,
            input_amount,
            receiver,
            min_amount_out,
            pull_input,
        ),
        ExecuteMsg::Finalize {} => execute_finalize(deps, env, info),
        ExecuteMsg::SetCustodyProxy { custody_proxy } => {
            execute_set_custody_proxy(deps, info, custody_proxy)
        }
        ExecuteMsg::ProposeOwner { new_owner } => Ok(ownable::execute_propose_owner(
            deps.storage,
            deps.api,
            &info.sender,
            &new_owner,
        )?),
        ExecuteMsg::AcceptOwner {} => {
            Ok(ownable::execute_accept_owner(deps.storage, &info.sender)?)
        }
    }
}

/// Point the engine at a different custody proxy.
fn execute_set_custody_proxy(
    deps: DepsMut,
    info: MessageInfo,
    custody_proxy: String,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let custody_proxy = deps.api.addr_validate(&custody_proxy)?;
    CUSTODY_PROXY.save(deps.storage, &custody_proxy)?;

    Ok(Response::new()
        .add_attribute("action", "set_custody_proxy")
        .add_attribute("custody_proxy", custody_proxy))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&ownable::query_ownership(deps.storage)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let ownership = ownable::OWNERSHIP.load(deps.storage)?;
    let custody_proxy = CUSTODY_PROXY.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: ownership.owner,
        custody_proxy,
    })
}

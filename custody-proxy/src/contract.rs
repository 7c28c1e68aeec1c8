//! Custody proxy entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Bound;

use common::ownable;

use crate::error::ContractError;
use crate::msg::{
    AuthorizedCallersResponse, AuthorizedResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};
use crate::state::{AUTHORIZED, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    reject_native_funds(&info)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    ownable::initialize(deps.storage, owner.clone())?;

    let mut count = 0u32;
    for caller in msg.authorized {
        let caller = deps.api.addr_validate(&caller)?;
        AUTHORIZED.save(deps.storage, &caller, &true)?;
        count += 1;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("authorized_count", count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // No payable surface: the proxy never holds value of its own.
    reject_native_funds(&info)?;

    match msg {
        ExecuteMsg::Authorize { caller, enabled } => {
            execute_authorize(deps, info, caller, enabled)
        }
        ExecuteMsg::Pull {
            token,
            from,
            to,
            amount,
        } => execute_pull(deps, info, token, from, to, amount),
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

/// Toggle a caller's pull authorization.
fn execute_authorize(
    deps: DepsMut,
    info: MessageInfo,
    caller: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let caller = deps.api.addr_validate(&caller)?;
    AUTHORIZED.save(deps.storage, &caller, &enabled)?;

    Ok(Response::new()
        .add_attribute("action", "authorize")
        .add_attribute("caller", caller)
        .add_attribute("enabled", enabled.to_string()))
}

/// Move `amount` of `token` from `from` to `to` under the allowance `from`
/// granted to this proxy. The allow-list excludes everyone by default; only
/// explicitly authorized movers may trigger a pull.
fn execute_pull(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    from: String,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let authorized = AUTHORIZED
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !authorized {
        return Err(ContractError::Unauthorized);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    let token = deps.api.addr_validate(&token)?;
    let from = deps.api.addr_validate(&from)?;
    let to = deps.api.addr_validate(&to)?;

    let transfer_from: CosmosMsg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: to.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_from)
        .add_attribute("action", "pull")
        .add_attribute("caller", info.sender)
        .add_attribute("token", token)
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", amount))
}

fn reject_native_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::NativeFundsRejected);
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Authorized { caller } => to_json_binary(&query_authorized(deps, caller)?),
        QueryMsg::AuthorizedCallers { start_after, limit } => {
            to_json_binary(&query_authorized_callers(deps, start_after, limit)?)
        }
        QueryMsg::Ownership {} => to_json_binary(&ownable::query_ownership(deps.storage)?),
    }
}

fn query_authorized(deps: Deps, caller: String) -> StdResult<AuthorizedResponse> {
    let caller = deps.api.addr_validate(&caller)?;
    let authorized = AUTHORIZED
        .may_load(deps.storage, &caller)?
        .unwrap_or(false);
    Ok(AuthorizedResponse { authorized })
}

fn query_authorized_callers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AuthorizedCallersResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let callers: Vec<String> = AUTHORIZED
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| matches!(item, Ok((_, true))))
        .take(limit)
        .map(|item| Ok(item?.0.to_string()))
        .collect::<StdResult<_>>()?;

    Ok(AuthorizedCallersResponse { callers })
}

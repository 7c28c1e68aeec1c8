//! Receiver entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use common::ownable;

use crate::error::ContractError;
use crate::execute::{
    execute_ccip_receive, execute_dispatch, execute_lz_compose, execute_output_filled,
    execute_pull_token, execute_receive_axelar, execute_receive_axelar_with_token,
    execute_set_axelar_gateway, execute_set_ccip_router, execute_set_executor,
    execute_set_lz_endpoint, execute_set_output_settler,
};
use crate::msg::{
    ComposeConsumedResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};
use crate::reply::handle_reply;
use crate::state::{Config, COMPOSE_CONSUMED, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let config = Config {
        executor: deps.api.addr_validate(&msg.executor)?,
        axelar_gateway: deps.api.addr_validate(&msg.axelar_gateway)?,
        ccip_router: deps.api.addr_validate(&msg.ccip_router)?,
        lz_endpoint: deps.api.addr_validate(&msg.lz_endpoint)?,
        output_settler: deps.api.addr_validate(&msg.output_settler)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("executor", config.executor)
        .add_attribute("axelar_gateway", config.axelar_gateway)
        .add_attribute("ccip_router", config.ccip_router)
        .add_attribute("lz_endpoint", config.lz_endpoint)
        .add_attribute("output_settler", config.output_settler))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ReceiveAxelar {
            command_id,
            source_chain,
            source_address,
            payload,
            source_asset,
            source_amount,
        } => execute_receive_axelar(
            deps,
            env,
            info,
            command_id,
            source_chain,
            source_address,
            payload,
            source_asset,
            source_amount,
        ),
        ExecuteMsg::ReceiveAxelarWithToken {
            command_id,
            source_chain,
            source_address,
            payload,
            source_asset,
            source_amount,
        } => execute_receive_axelar_with_token(
            deps,
            env,
            info,
            command_id,
            source_chain,
            source_address,
            payload,
            source_asset,
            source_amount,
        ),
        ExecuteMsg::CcipReceive { message } => execute_ccip_receive(deps, env, info, message),
        ExecuteMsg::LzCompose {
            from,
            guid,
            message,
        } => execute_lz_compose(deps, env, info, from, guid, message),
        ExecuteMsg::OutputFilled {
            order_id,
            source_asset,
            source_amount,
            payload,
        } => execute_output_filled(
            deps,
            env,
            info,
            order_id,
            source_asset,
            source_amount,
            payload,
        ),
        ExecuteMsg::Dispatch {
            transfer_id,
            steps,
            receiver,
            min_amount_out,
            source_asset,
            source_amount,
            move_asset,
        } => execute_dispatch(
            deps,
            env,
            info,
            transfer_id,
            steps,
            receiver,
            min_amount_out,
            source_asset,
            source_amount,
            move_asset,
        ),
        ExecuteMsg::PullToken { asset, to, amount } => {
            execute_pull_token(deps, info, asset, to, amount)
        }
        ExecuteMsg::SetExecutor { executor } => execute_set_executor(deps, info, executor),
        ExecuteMsg::SetAxelarGateway { gateway } => {
            execute_set_axelar_gateway(deps, info, gateway)
        }
        ExecuteMsg::SetCcipRouter { router } => execute_set_ccip_router(deps, info, router),
        ExecuteMsg::SetLzEndpoint { endpoint } => execute_set_lz_endpoint(deps, info, endpoint),
        ExecuteMsg::SetOutputSettler { settler } => {
            execute_set_output_settler(deps, info, settler)
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

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_reply(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ComposeConsumed { guid } => to_json_binary(&ComposeConsumedResponse {
            consumed: COMPOSE_CONSUMED
                .may_load(deps.storage, guid.as_slice())?
                .unwrap_or(false),
        }),
        QueryMsg::Ownership {} => to_json_binary(&ownable::query_ownership(deps.storage)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let ownership = ownable::OWNERSHIP.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: ownership.owner,
        executor: config.executor,
        axelar_gateway: config.axelar_gateway,
        ccip_router: config.ccip_router,
        lz_endpoint: config.lz_endpoint,
        output_settler: config.output_settler,
    })
}

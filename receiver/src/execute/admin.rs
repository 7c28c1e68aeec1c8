//! Owner recovery sweep and trusted-address setters.

use cosmwasm_std::{DepsMut, MessageInfo, Response, SubMsg, Uint128};

use common::{ownable, AssetInfo};

use crate::error::ContractError;
use crate::state::{CONFIG, PULL_TOKEN_REPLY_ID};

/// Manual sweep for funds stuck in this contract (adapter bugs, short gas
/// stipends). The transfer runs as a reply-on-error submessage: a downstream
/// rejection surfaces as `ExternalCallFailed` instead of silently dropping
/// the funds.
pub fn execute_pull_token(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let to = deps.api.addr_validate(&to)?;

    let transfer = SubMsg::reply_on_error(asset.transfer_msg(&to, amount)?, PULL_TOKEN_REPLY_ID);

    Ok(Response::new()
        .add_submessage(transfer)
        .add_attribute("action", "pull_token")
        .add_attribute("asset", asset.key())
        .add_attribute("to", to)
        .add_attribute("amount", amount))
}

/// Point the adapter at a different executor.
pub fn execute_set_executor(
    deps: DepsMut,
    info: MessageInfo,
    executor: String,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let executor = deps.api.addr_validate(&executor)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.executor = executor.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "executor_set")
        .add_attribute("executor", executor))
}

/// Replace the trusted Axelar gateway.
pub fn execute_set_axelar_gateway(
    deps: DepsMut,
    info: MessageInfo,
    gateway: String,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let gateway = deps.api.addr_validate(&gateway)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.axelar_gateway = gateway.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "axelar_gateway_set")
        .add_attribute("gateway", gateway))
}

/// Replace the trusted CCIP router.
pub fn execute_set_ccip_router(
    deps: DepsMut,
    info: MessageInfo,
    router: String,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let router = deps.api.addr_validate(&router)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.ccip_router = router.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "ccip_router_set")
        .add_attribute("router", router))
}

/// Replace the trusted LayerZero endpoint.
pub fn execute_set_lz_endpoint(
    deps: DepsMut,
    info: MessageInfo,
    endpoint: String,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let endpoint = deps.api.addr_validate(&endpoint)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.lz_endpoint = endpoint.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "lz_endpoint_set")
        .add_attribute("endpoint", endpoint))
}

/// Replace the trusted output settler.
pub fn execute_set_output_settler(
    deps: DepsMut,
    info: MessageInfo,
    settler: String,
) -> Result<Response, ContractError> {
    ownable::assert_owner(deps.storage, &info.sender)?;

    let settler = deps.api.addr_validate(&settler)?;
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.output_settler = settler.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "output_settler_set")
        .add_attribute("settler", settler))
}

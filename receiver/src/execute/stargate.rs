//! LayerZero compose delivery handler (Stargate V2).

use cosmwasm_std::{from_json, Binary, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::dispatch::{decode_payload, stage_recoverable_dispatch};
use crate::msg::ComposeEnvelope;
use crate::state::{COMPOSE_CONSUMED, CONFIG};

/// Compose delivery: only the configured endpoint may call. Source
/// authenticity was established upstream when the endpoint recorded the
/// message hash in sendCompose; the entry point deliberately adds no sender
/// check beyond "caller is the endpoint", so the trust boundary stays in one
/// place.
///
/// The GUID consumed-map is written before the dispatch submessage runs: a
/// reentrant or repeated delivery of the same compose message fails with
/// `ComposeAlreadyProcessed`, distinct from an authorization failure.
pub fn execute_lz_compose(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    guid: Binary,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.lz_endpoint {
        return Err(ContractError::Unauthorized);
    }

    if COMPOSE_CONSUMED
        .may_load(deps.storage, guid.as_slice())?
        .unwrap_or(false)
    {
        return Err(ContractError::ComposeAlreadyProcessed {
            guid: format!("0x{}", hex::encode(guid.as_slice())),
        });
    }
    COMPOSE_CONSUMED.save(deps.storage, guid.as_slice(), &true)?;

    let envelope: ComposeEnvelope =
        from_json(&message).map_err(|err| ContractError::DecodeFailure {
            reason: err.to_string(),
        })?;
    let delivery = decode_payload(&envelope.payload)?;
    let transfer_id = hex::encode(delivery.transfer_id.as_slice());

    let dispatch = stage_recoverable_dispatch(
        deps,
        &env,
        delivery,
        envelope.source_asset,
        envelope.source_amount,
    )?;

    Ok(Response::new()
        .add_submessage(dispatch)
        .add_attribute("action", "lz_compose")
        .add_attribute("from", from)
        .add_attribute("guid", guid.to_base64())
        .add_attribute("transfer_id", format!("0x{transfer_id}")))
}

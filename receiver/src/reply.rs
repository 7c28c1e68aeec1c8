//! Reply handlers: the catch side of the recovery path.

use cosmwasm_std::{DepsMut, Env, Event, Reply, Response, SubMsgResult};

use crate::error::ContractError;
use crate::state::{DISPATCH_REPLY_ID, IN_FLIGHT, PULL_TOKEN_REPLY_ID};

pub fn handle_reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        DISPATCH_REPLY_ID => handle_dispatch_reply(deps, env, msg.result),
        // The owner-recovery transfer failed downstream; never swallow it.
        PULL_TOKEN_REPLY_ID => Err(ContractError::ExternalCallFailed),
        id => Err(ContractError::UnknownReply { id }),
    }
}

/// Settle the dispatch submessage. On success the executor already delivered
/// and emitted its events; on failure the whole dispatch subtree rolled back,
/// so the raw bridged asset is still resident here and goes to the receiver.
fn handle_dispatch_reply(
    deps: DepsMut,
    env: Env,
    result: SubMsgResult,
) -> Result<Response, ContractError> {
    let delivery = IN_FLIGHT
        .may_load(deps.storage)?
        .ok_or(ContractError::NoDeliveryInFlight)?;
    IN_FLIGHT.remove(deps.storage);

    let transfer_id = format!("0x{}", hex::encode(delivery.transfer_id));

    match result {
        SubMsgResult::Ok(_) => Ok(Response::new()
            .add_attribute("action", "delivery_executed")
            .add_attribute("transfer_id", transfer_id)),
        SubMsgResult::Err(err) => {
            let recover = delivery
                .source_asset
                .transfer_msg(&delivery.receiver, delivery.source_amount)?;

            Ok(Response::new()
                .add_message(recover)
                .add_event(
                    Event::new("transfer_recovered")
                        .add_attribute("transfer_id", transfer_id.clone())
                        .add_attribute("asset", delivery.source_asset.key())
                        .add_attribute("receiver", delivery.receiver)
                        .add_attribute("amount", delivery.source_amount)
                        .add_attribute("timestamp", env.block.time.seconds().to_string()),
                )
                .add_attribute("action", "delivery_recovered")
                .add_attribute("transfer_id", transfer_id)
                .add_attribute("error", err))
        }
    }
}

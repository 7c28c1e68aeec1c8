//! Two-step ownership shared by all Swaplane contracts.
//!
//! Transfers are explicit propose-then-accept: proposing alone never changes
//! the owner, and only the pending owner may accept. Proposing again simply
//! overwrites the previous proposal.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Response, StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OwnableError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    NotOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    #[error("Unauthorized: only pending owner can accept")]
    NotPendingOwner,

    #[error("Cannot transfer ownership to the current owner")]
    CannotTransferToSelf,
}

/// Ownership record: the current owner plus an optional pending transfer.
#[cw_serde]
pub struct Ownership {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

/// Ownership storage, shared key across contracts.
pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

/// Initialize ownership at instantiation.
pub fn initialize(storage: &mut dyn Storage, owner: Addr) -> Result<(), OwnableError> {
    OWNERSHIP.save(
        storage,
        &Ownership {
            owner,
            pending_owner: None,
        },
    )?;
    Ok(())
}

/// Assert `sender` is the current owner.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), OwnableError> {
    let ownership = OWNERSHIP.load(storage)?;
    if *sender != ownership.owner {
        return Err(OwnableError::NotOwner);
    }
    Ok(())
}

/// Propose a new owner (owner only). Does not change the owner.
pub fn execute_propose_owner(
    storage: &mut dyn Storage,
    api: &dyn Api,
    sender: &Addr,
    new_owner: &str,
) -> Result<Response, OwnableError> {
    let mut ownership = OWNERSHIP.load(storage)?;
    if *sender != ownership.owner {
        return Err(OwnableError::NotOwner);
    }

    let new_owner = api.addr_validate(new_owner)?;
    if new_owner == ownership.owner {
        return Err(OwnableError::CannotTransferToSelf);
    }

    ownership.pending_owner = Some(new_owner.clone());
    OWNERSHIP.save(storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "propose_ownership")
        .add_attribute("pending_owner", new_owner))
}

/// Accept a pending ownership transfer (pending owner only).
pub fn execute_accept_owner(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Response, OwnableError> {
    let mut ownership = OWNERSHIP.load(storage)?;
    let pending = ownership
        .pending_owner
        .clone()
        .ok_or(OwnableError::NoPendingOwner)?;

    if *sender != pending {
        return Err(OwnableError::NotPendingOwner);
    }

    ownership.owner = pending.clone();
    ownership.pending_owner = None;
    OWNERSHIP.save(storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("owner", pending))
}

/// Query the ownership record.
pub fn query_ownership(storage: &dyn Storage) -> Result<OwnershipResponse, StdError> {
    let ownership = OWNERSHIP.load(storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner,
        pending_owner: ownership.pending_owner,
    })
}

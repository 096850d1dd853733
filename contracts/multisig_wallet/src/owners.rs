//! Owner registry and the self-amendment operations.
//!
//! The mutators here are crate-private. Nothing outside the executor calls
//! them, so the owner set only changes through an executed transaction that
//! targets the wallet itself.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::events::{OwnerAddition, OwnerRemoval, RequirementChange};
use crate::storage;
use crate::types::Payload;

pub const MAX_OWNERS: u32 = 20;

/// Checks an owner list and threshold before they are stored.
pub fn validate(env: &Env, owners: &Vec<Address>, required: u32) -> Result<(), WalletError> {
    if owners.is_empty() {
        return Err(WalletError::EmptyOwnerList);
    }

    if owners.len() > MAX_OWNERS {
        return Err(WalletError::TooManyOwners);
    }

    let wallet = env.current_contract_address();
    let mut seen: Vec<Address> = Vec::new(env);
    for owner in owners.iter() {
        if owner == wallet {
            return Err(WalletError::InvalidOwner);
        }
        if seen.contains(&owner) {
            return Err(WalletError::DuplicateOwner);
        }
        seen.push_back(owner);
    }

    validate_requirement(owners.len(), required)
}

fn validate_requirement(owner_count: u32, required: u32) -> Result<(), WalletError> {
    if required == 0 || required > owner_count {
        return Err(WalletError::InvalidRequirement);
    }
    Ok(())
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    storage::get_owners(env).contains(address)
}

pub fn require_owner(env: &Env, address: &Address) -> Result<(), WalletError> {
    if !is_owner(env, address) {
        return Err(WalletError::NotOwner);
    }
    Ok(())
}

pub fn required(env: &Env) -> Result<u32, WalletError> {
    Ok(storage::get_config(env)?.required)
}

/// Applies an owner-set payload. Every check runs before the first write.
pub(crate) fn apply(env: &Env, payload: &Payload) -> Result<(), WalletError> {
    match payload {
        Payload::AddOwner(owner) => add_owner(env, owner),
        Payload::RemoveOwner(owner) => remove_owner(env, owner),
        Payload::ReplaceOwner(old, new) => replace_owner(env, old, new),
        Payload::ChangeRequirement(required) => change_requirement(env, *required),
        Payload::Transfer | Payload::Invoke(..) => Err(WalletError::InvalidPayload),
    }
}

fn add_owner(env: &Env, owner: &Address) -> Result<(), WalletError> {
    let mut owners = storage::get_owners(env);

    if *owner == env.current_contract_address() {
        return Err(WalletError::InvalidOwner);
    }
    if owners.contains(owner) {
        return Err(WalletError::DuplicateOwner);
    }
    if owners.len() >= MAX_OWNERS {
        return Err(WalletError::TooManyOwners);
    }

    owners.push_back(owner.clone());
    storage::set_owners(env, &owners);

    OwnerAddition {
        owner: owner.clone(),
    }
    .publish(env);

    Ok(())
}

fn remove_owner(env: &Env, owner: &Address) -> Result<(), WalletError> {
    let mut owners = storage::get_owners(env);
    let index = owners
        .first_index_of(owner)
        .ok_or(WalletError::OwnerNotFound)?;

    if owners.len() <= 1 {
        return Err(WalletError::CannotRemoveLastOwner);
    }

    let mut config = storage::get_config(env)?;

    owners.remove(index);
    storage::set_owners(env, &owners);

    OwnerRemoval {
        owner: owner.clone(),
    }
    .publish(env);

    if config.required > owners.len() {
        config.required = owners.len();
        storage::set_config(env, &config);

        RequirementChange {
            required: config.required,
        }
        .publish(env);
    }

    Ok(())
}

fn replace_owner(env: &Env, old: &Address, new: &Address) -> Result<(), WalletError> {
    let mut owners = storage::get_owners(env);
    let index = owners.first_index_of(old).ok_or(WalletError::OwnerNotFound)?;

    if owners.contains(new) {
        return Err(WalletError::DuplicateOwner);
    }
    if *new == env.current_contract_address() {
        return Err(WalletError::InvalidOwner);
    }

    owners.set(index, new.clone());
    storage::set_owners(env, &owners);

    OwnerRemoval { owner: old.clone() }.publish(env);
    OwnerAddition { owner: new.clone() }.publish(env);

    Ok(())
}

fn change_requirement(env: &Env, required: u32) -> Result<(), WalletError> {
    let owner_count = storage::get_owners(env).len();
    validate_requirement(owner_count, required)?;

    let mut config = storage::get_config(env)?;
    config.required = required;
    storage::set_config(env, &config);

    RequirementChange { required }.publish(env);

    Ok(())
}

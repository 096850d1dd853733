//! Per-transaction confirmation records.
//!
//! Records are kept apart from the owner list and are never pruned when an
//! owner leaves. Quorum counts only confirmers who are owners at read time.

use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::owners;
use crate::storage;

pub fn has_confirmed(env: &Env, transaction_id: u64, owner: &Address) -> bool {
    storage::get_confirmations(env, transaction_id).contains(owner)
}

pub fn add(env: &Env, transaction_id: u64, owner: &Address) -> Result<(), WalletError> {
    let mut confirmations = storage::get_confirmations(env, transaction_id);
    if confirmations.contains(owner) {
        return Err(WalletError::AlreadyConfirmed);
    }

    confirmations.push_back(owner.clone());
    storage::set_confirmations(env, transaction_id, &confirmations);
    Ok(())
}

pub fn remove(env: &Env, transaction_id: u64, owner: &Address) -> Result<(), WalletError> {
    let mut confirmations = storage::get_confirmations(env, transaction_id);
    let index = confirmations
        .first_index_of(owner)
        .ok_or(WalletError::NotConfirmed)?;

    confirmations.remove(index);
    storage::set_confirmations(env, transaction_id, &confirmations);
    Ok(())
}

pub fn count(env: &Env, transaction_id: u64) -> u32 {
    let owners = storage::get_owners(env);
    storage::get_confirmations(env, transaction_id)
        .iter()
        .filter(|confirmer| owners.contains(confirmer))
        .count() as u32
}

pub fn is_confirmed(env: &Env, transaction_id: u64) -> Result<bool, WalletError> {
    Ok(count(env, transaction_id) >= owners::required(env)?)
}

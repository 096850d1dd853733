use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{DataKey, Transaction, WalletConfig};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Result<WalletConfig, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub fn set_owners(env: &Env, owners: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Owners, owners);
}

pub fn transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

/// Hands out the next transaction id. Ids start at 0 and are never reused.
pub fn next_transaction_id(env: &Env) -> u64 {
    let id = transaction_count(env);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(id + 1));
    id
}

pub fn get_transaction(env: &Env, id: u64) -> Result<Transaction, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(id))
        .ok_or(WalletError::TransactionNotFound)
}

pub fn set_transaction(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id);
    env.storage().persistent().set(&key, transaction);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn get_confirmations(env: &Env, id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Confirmations(id))
        .unwrap_or(Vec::new(env))
}

pub fn set_confirmations(env: &Env, id: u64, confirmations: &Vec<Address>) {
    let key = DataKey::Confirmations(id);
    env.storage().persistent().set(&key, confirmations);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

use crate::confirmations;
use crate::errors::WalletError;
use crate::events::{Confirmation, Deposit, Initialized, Invalidation, Revocation, Submission};
use crate::executor;
use crate::expiry;
use crate::owners;
use crate::storage;
use crate::types::{ExecutionStatus, Payload, Transaction, WalletConfig};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        asset: Address,
    ) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        owners::validate(&env, &owners, required)?;

        storage::set_owners(&env, &owners);
        storage::set_config(
            &env,
            &WalletConfig {
                required,
                asset: asset.clone(),
            },
        );
        storage::extend_instance(&env);

        Initialized {
            owner_count: owners.len(),
            required,
            asset,
        }
        .publish(&env);

        Ok(())
    }

    /// Moves `amount` of the wallet's asset from `from` into the wallet.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        let config = storage::get_config(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        token::TokenClient::new(&env, &config.asset).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        Deposit {
            sender: from,
            value: amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Proposes a call and counts it as the submitter's confirmation.
    ///
    /// With a threshold of one the transaction is executed right away.
    pub fn submit_transaction(
        env: Env,
        submitter: Address,
        target: Address,
        value: i128,
        payload: Payload,
        expires_at: u64,
        memo: String,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        submitter.require_auth();
        owners::require_owner(&env, &submitter)?;

        if value < 0 {
            return Err(WalletError::InvalidAmount);
        }

        let transaction_id = storage::next_transaction_id(&env);
        let transaction = Transaction {
            id: transaction_id,
            submitter: submitter.clone(),
            target: target.clone(),
            value,
            payload,
            expires_at,
            memo,
            created_at: env.ledger().timestamp(),
            executed: false,
            invalidated: false,
            failed_attempts: 0,
        };
        storage::set_transaction(&env, &transaction);
        storage::extend_instance(&env);

        Submission {
            transaction_id,
            submitter: submitter.clone(),
            target,
        }
        .publish(&env);

        confirmations::add(&env, transaction_id, &submitter)?;
        Confirmation {
            transaction_id,
            owner: submitter,
        }
        .publish(&env);

        executor::execute(&env, transaction_id)?;

        Ok(transaction_id)
    }

    pub fn confirm_transaction(
        env: Env,
        owner: Address,
        transaction_id: u64,
    ) -> Result<ExecutionStatus, WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        let transaction = storage::get_transaction(&env, transaction_id)?;
        expiry::ensure_live(&env, &transaction)?;

        confirmations::add(&env, transaction_id, &owner)?;
        Confirmation {
            transaction_id,
            owner,
        }
        .publish(&env);

        executor::execute(&env, transaction_id)
    }

    pub fn revoke_confirmation(
        env: Env,
        owner: Address,
        transaction_id: u64,
    ) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        let transaction = storage::get_transaction(&env, transaction_id)?;
        expiry::ensure_live(&env, &transaction)?;

        confirmations::remove(&env, transaction_id, &owner)?;
        Revocation {
            transaction_id,
            owner,
        }
        .publish(&env);

        Ok(())
    }

    /// Kills a pending transaction. Any single owner may do this.
    pub fn invalidate_transaction(
        env: Env,
        owner: Address,
        transaction_id: u64,
    ) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        let mut transaction = storage::get_transaction(&env, transaction_id)?;
        expiry::ensure_live(&env, &transaction)?;

        transaction.invalidated = true;
        storage::set_transaction(&env, &transaction);

        Invalidation {
            transaction_id,
            owner,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        Ok(storage::get_owners(&env))
    }

    pub fn get_owner(env: Env, index: u32) -> Result<Address, WalletError> {
        Self::require_initialized(&env)?;
        storage::get_owners(&env)
            .get(index)
            .ok_or(WalletError::IndexOutOfBounds)
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        owners::is_owner(&env, &address)
    }

    pub fn owner_count(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(storage::get_owners(&env).len())
    }

    pub fn required(env: Env) -> Result<u32, WalletError> {
        owners::required(&env)
    }

    pub fn asset(env: Env) -> Result<Address, WalletError> {
        Ok(storage::get_config(&env)?.asset)
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        let config = storage::get_config(&env)?;
        Ok(token::TokenClient::new(&env, &config.asset).balance(&env.current_contract_address()))
    }

    pub fn get_transaction(env: Env, transaction_id: u64) -> Result<Transaction, WalletError> {
        Self::require_initialized(&env)?;
        storage::get_transaction(&env, transaction_id)
    }

    pub fn is_invalidated(env: Env, transaction_id: u64) -> Result<bool, WalletError> {
        Ok(Self::get_transaction(env, transaction_id)?.invalidated)
    }

    pub fn is_expired(env: Env, transaction_id: u64) -> Result<bool, WalletError> {
        let transaction = Self::get_transaction(env.clone(), transaction_id)?;
        Ok(expiry::is_expired(&transaction, env.ledger().timestamp()))
    }

    /// Number of transactions matching the filters. `pending` selects
    /// transactions that are neither executed nor invalidated.
    pub fn get_transaction_count(env: Env, pending: bool, executed: bool) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        let mut count = 0u32;
        for id in 0..storage::transaction_count(&env) {
            let transaction = storage::get_transaction(&env, id)?;
            if Self::matches(&transaction, pending, executed) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Ids of matching transactions in submission order, paged over the
    /// filtered view.
    pub fn get_transaction_ids(
        env: Env,
        offset: u32,
        limit: u32,
        pending: bool,
        executed: bool,
    ) -> Result<Vec<u64>, WalletError> {
        Self::require_initialized(&env)?;
        let mut ids: Vec<u64> = Vec::new(&env);
        let mut skipped = 0u32;
        for id in 0..storage::transaction_count(&env) {
            if ids.len() >= limit {
                break;
            }
            let transaction = storage::get_transaction(&env, id)?;
            if !Self::matches(&transaction, pending, executed) {
                continue;
            }
            if skipped < offset {
                skipped += 1;
                continue;
            }
            ids.push_back(id);
        }
        Ok(ids)
    }

    /// Every owner that has confirmed, including ones since removed.
    pub fn get_confirmations(env: Env, transaction_id: u64) -> Result<Vec<Address>, WalletError> {
        Self::require_transaction(&env, transaction_id)?;
        Ok(storage::get_confirmations(&env, transaction_id))
    }

    pub fn get_confirmation_count(env: Env, transaction_id: u64) -> Result<u32, WalletError> {
        Self::require_transaction(&env, transaction_id)?;
        Ok(confirmations::count(&env, transaction_id))
    }

    pub fn is_confirmed(env: Env, transaction_id: u64) -> Result<bool, WalletError> {
        Self::require_transaction(&env, transaction_id)?;
        confirmations::is_confirmed(&env, transaction_id)
    }

    pub fn has_confirmed(
        env: Env,
        transaction_id: u64,
        owner: Address,
    ) -> Result<bool, WalletError> {
        Self::require_transaction(&env, transaction_id)?;
        Ok(confirmations::has_confirmed(&env, transaction_id, &owner))
    }

    fn require_initialized(env: &Env) -> Result<(), WalletError> {
        if !storage::is_initialized(env) {
            return Err(WalletError::NotInitialized);
        }
        Ok(())
    }

    fn require_transaction(env: &Env, transaction_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(env)?;
        storage::get_transaction(env, transaction_id).map(|_| ())
    }

    fn matches(transaction: &Transaction, pending: bool, executed: bool) -> bool {
        (pending && transaction.is_pending()) || (executed && transaction.executed)
    }
}

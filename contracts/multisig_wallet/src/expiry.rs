use soroban_sdk::Env;

use crate::errors::WalletError;
use crate::types::Transaction;

pub fn is_expired(transaction: &Transaction, now: u64) -> bool {
    transaction.expires_at != 0 && now > transaction.expires_at
}

/// Fails unless the transaction can still change state.
///
/// Runs ahead of confirm, revoke, invalidate and execute. Queries skip it so
/// a dead transaction stays readable.
pub fn ensure_live(env: &Env, transaction: &Transaction) -> Result<(), WalletError> {
    if transaction.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    if transaction.invalidated {
        return Err(WalletError::TransactionInvalidated);
    }
    if is_expired(transaction, env.ledger().timestamp()) {
        return Err(WalletError::TransactionExpired);
    }
    Ok(())
}

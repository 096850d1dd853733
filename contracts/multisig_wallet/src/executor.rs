//! Execution of confirmed transactions.
//!
//! The call boundary reports failure as a value. A failed call leaves the
//! transaction pending with its confirmations intact and bumps
//! `failed_attempts`; it never aborts the confirm or submit that triggered it.

use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, symbol_short, token, vec, Address, Env, IntoVal, InvokeError, Val,
};

use crate::confirmations;
use crate::errors::WalletError;
use crate::events::{Execution, ExecutionFailure};
use crate::expiry;
use crate::owners;
use crate::storage;
use crate::types::{ExecutionStatus, Payload, Transaction};

/// Runs the transaction if it is live and has quorum.
///
/// Returns `Pending` without calling anything when the preconditions do not
/// hold. The host rejects contract re-entry, so the target cannot call back
/// into the wallet while `executed` is still false.
pub(crate) fn execute(env: &Env, transaction_id: u64) -> Result<ExecutionStatus, WalletError> {
    let mut transaction = storage::get_transaction(env, transaction_id)?;

    if expiry::ensure_live(env, &transaction).is_err()
        || !confirmations::is_confirmed(env, transaction_id)?
    {
        return Ok(ExecutionStatus::Pending);
    }

    log!(env, "executing transaction", transaction_id);

    match dispatch(env, &transaction) {
        Ok(()) => {
            transaction.executed = true;
            storage::set_transaction(env, &transaction);

            Execution { transaction_id }.publish(env);

            Ok(ExecutionStatus::Executed)
        }
        Err(err) => {
            transaction.failed_attempts = transaction.failed_attempts.saturating_add(1);
            storage::set_transaction(env, &transaction);

            let code = match err {
                InvokeError::Contract(code) => Some(code),
                InvokeError::Abort => None,
            };
            log!(env, "execution failed", transaction_id, code);

            ExecutionFailure {
                transaction_id,
                code,
            }
            .publish(env);

            Ok(ExecutionStatus::Failed)
        }
    }
}

fn dispatch(env: &Env, transaction: &Transaction) -> Result<(), InvokeError> {
    let wallet = env.current_contract_address();

    if transaction.target == wallet {
        return match &transaction.payload {
            Payload::Transfer => Ok(()),
            Payload::Invoke(..) => Err(rejected(WalletError::InvalidPayload)),
            amendment => owners::apply(env, amendment).map_err(rejected),
        };
    }

    match &transaction.payload {
        Payload::Transfer => transfer_value(env, &wallet, transaction),
        Payload::Invoke(function, args) => {
            if transaction.value > 0 {
                authorize_value(env, &wallet, transaction)?;
            }
            match env.try_invoke_contract::<Val, InvokeError>(
                &transaction.target,
                function,
                args.clone(),
            ) {
                Ok(Ok(_)) => Ok(()),
                Ok(Err(_)) => Err(InvokeError::Abort),
                Err(Ok(err)) => Err(err),
                Err(Err(err)) => Err(err.into()),
            }
        }
        // owner-set payloads only make sense against the wallet itself
        _ => Err(rejected(WalletError::InvalidPayload)),
    }
}

fn transfer_value(env: &Env, wallet: &Address, transaction: &Transaction) -> Result<(), InvokeError> {
    if transaction.value == 0 {
        return Ok(());
    }

    let asset = storage::get_config(env).map_err(rejected)?.asset;
    match token::TokenClient::new(env, &asset).try_transfer(
        wallet,
        &transaction.target,
        &transaction.value,
    ) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => Err(InvokeError::Abort),
        Err(Ok(err)) => Err(err.into()),
        Err(Err(err)) => Err(err),
    }
}

/// Lets the callee pull `value` of the wallet's asset during the call.
fn authorize_value(env: &Env, wallet: &Address, transaction: &Transaction) -> Result<(), InvokeError> {
    let asset = storage::get_config(env).map_err(rejected)?.asset;

    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: asset,
                fn_name: symbol_short!("transfer"),
                args: (
                    wallet.clone(),
                    transaction.target.clone(),
                    transaction.value,
                )
                    .into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    Ok(())
}

fn rejected(err: WalletError) -> InvokeError {
    InvokeError::Contract(err as u32)
}

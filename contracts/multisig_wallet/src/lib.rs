#![no_std]

//! Multi-signature wallet contract.
//!
//! A fixed quorum of owners must confirm a proposed call before the wallet
//! makes it. Changes to the owner set and the quorum are themselves proposed
//! calls aimed at the wallet, so they pass through the same approval path.

mod confirmations;
mod errors;
mod events;
mod executor;
mod expiry;
mod multisig;
mod owners;
mod storage;
mod types;

pub use errors::WalletError;
pub use multisig::{MultisigWallet, MultisigWalletClient};
pub use owners::MAX_OWNERS;
pub use types::{ExecutionStatus, Payload, Transaction, WalletConfig};

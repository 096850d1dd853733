use soroban_sdk::{contracttype, Address, String, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Owners,
    TransactionCount,
    Transaction(u64),
    Confirmations(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    pub required: u32,
    /// Token contract whose units back a transaction's `value`.
    pub asset: Address,
}

/// What an executed transaction does to its target.
///
/// The owner-set variants are only meaningful when the target is the wallet
/// itself; they are the sole way to reach the wallet's amendment logic.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    Transfer,
    Invoke(Symbol, Vec<Val>),
    AddOwner(Address),
    RemoveOwner(Address),
    ReplaceOwner(Address, Address),
    ChangeRequirement(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub submitter: Address,
    pub target: Address,
    pub value: i128,
    pub payload: Payload,
    pub expires_at: u64, // 0 = never
    pub memo: String,
    pub created_at: u64,
    pub executed: bool,
    pub invalidated: bool,
    pub failed_attempts: u32,
}

impl Transaction {
    pub fn is_pending(&self) -> bool {
        !self.executed && !self.invalidated
    }
}

/// Outcome of the execution attempt that follows a confirmation.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExecutionStatus {
    /// Quorum not met (or the transaction can no longer run); nothing was called.
    Pending,
    Executed,
    /// The call was made and failed. Confirmations stay recorded.
    Failed,
}

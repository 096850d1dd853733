use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["wallet", "init"])]
pub struct Initialized {
    pub owner_count: u32,
    pub required: u32,
    pub asset: Address,
}

#[contractevent(topics = ["wallet", "deposit"])]
pub struct Deposit {
    pub sender: Address,
    pub value: i128,
}

#[contractevent(topics = ["wallet", "submission"])]
pub struct Submission {
    pub transaction_id: u64,
    pub submitter: Address,
    pub target: Address,
}

#[contractevent(topics = ["wallet", "confirmation"])]
pub struct Confirmation {
    pub transaction_id: u64,
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "revocation"])]
pub struct Revocation {
    pub transaction_id: u64,
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "execution"])]
pub struct Execution {
    pub transaction_id: u64,
}

#[contractevent(topics = ["wallet", "exec_failure"])]
pub struct ExecutionFailure {
    pub transaction_id: u64,
    /// Contract error code reported by the callee, if it returned one.
    pub code: Option<u32>,
}

#[contractevent(topics = ["wallet", "invalidation"])]
pub struct Invalidation {
    pub transaction_id: u64,
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "owner_add"])]
pub struct OwnerAddition {
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "owner_remove"])]
pub struct OwnerRemoval {
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "requirement"])]
pub struct RequirementChange {
    pub required: u32,
}

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    EmptyOwnerList = 3,
    InvalidRequirement = 4,
    DuplicateOwner = 5,
    OwnerNotFound = 6,
    InvalidOwner = 7,
    CannotRemoveLastOwner = 8,
    TooManyOwners = 9,
    NotOwner = 10,
    TransactionNotFound = 11,
    AlreadyExecuted = 12,
    TransactionInvalidated = 13,
    TransactionExpired = 14,
    AlreadyConfirmed = 15,
    NotConfirmed = 16,
    InvalidAmount = 17,
    InvalidPayload = 18,
    IndexOutOfBounds = 19,
}

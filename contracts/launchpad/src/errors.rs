use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidPhase = 4,
    PresaleNotActive = 5,
    PresaleNotEnded = 6,
    ExceedsWalletLimit = 7,
    ExceedsTotalForSale = 8,
    NothingToClaim = 9,
    ExternalTransferFailed = 10,
    InvalidAmount = 11,
    InvalidParams = 12,
}

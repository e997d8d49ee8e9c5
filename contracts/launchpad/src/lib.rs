#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod vesting;


pub use contract::{LaunchpadContract, LaunchpadContractClient};
pub use errors::Error;
pub use types::{PurchaseRecord, SaleConfig, SaleParams, SalePhase, SaleState};

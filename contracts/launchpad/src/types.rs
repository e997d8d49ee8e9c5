use soroban_sdk::{contracttype, Address};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SalePhase {
    NotStarted = 0,
    Active = 1,
    Ended = 2,
}

/// Sale parameters fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub token_price: i128, // stablecoin smallest units per whole sale token
    pub token_decimals: u32,
    pub stable_decimals: u32,
    pub native_decimals: u32,
    pub total_for_sale: i128, // sale token smallest units
    pub bonus_limit: i128,    // tokens eligible for the bonus multiplier
    pub bonus_bps: u32,       // 5000 == +50%
    pub wallet_limit: i128,   // max base+bonus tokens per address
    pub vesting_period: u64,  // seconds per tranche
    pub vesting_duration: u32, // number of tranches
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub owner: Address,
    pub sale_token: Address,
    pub stable_token: Address,
    pub native_token: Address, // wrapped native asset contract
    pub oracle: Address,
    pub params: SaleParams,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub phase: SalePhase,
    pub tokens_sold: i128,
    pub bonus_remaining: i128,
    pub end_time: u64, // ledger timestamp of end_presale; vesting clock origin
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseRecord {
    pub total_purchased: i128, // base + bonus
    pub claimed: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    State,
    Purchase(Address),
}

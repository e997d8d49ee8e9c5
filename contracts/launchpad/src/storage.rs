use crate::errors::Error;
use crate::types::{DataKey, PurchaseRecord, SaleConfig, SaleState};
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_purchase(env: &Env, buyer: &Address) -> Option<PurchaseRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Purchase(buyer.clone()))
}

pub fn set_purchase(env: &Env, buyer: &Address, record: &PurchaseRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Purchase(buyer.clone()), record);
}

use soroban_sdk::{contracttype, Address, Env};

use crate::error::SwapError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Pool,
    Router,
    TokenIn,
    TokenOut,
    PoolType,
    NCoins,
}

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 3 * DAY_IN_LEDGERS;

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_address(e: &Env, key: DataKey, address: &Address) {
    e.storage().instance().set(&key, address);
}

pub fn get_address(e: &Env, key: DataKey) -> Result<Address, SwapError> {
    e.storage()
        .instance()
        .get(&key)
        .ok_or(SwapError::NotInitialized)
}

pub fn set_u32(e: &Env, key: DataKey, value: u32) {
    e.storage().instance().set(&key, &value);
}

pub fn get_u32(e: &Env, key: DataKey) -> Result<u32, SwapError> {
    e.storage()
        .instance()
        .get(&key)
        .ok_or(SwapError::NotInitialized)
}

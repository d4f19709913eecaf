use curve_route::storage::{get_address, get_u32, set_address, set_u32, DataKey};
use curve_route::SwapError;
use soroban_sdk::{Address, Env};

pub use curve_route::storage::extend_instance_ttl;

pub fn set_router_address(e: &Env, router: Address) {
    set_address(e, DataKey::Router, &router);
}

pub fn get_router_address(e: &Env) -> Result<Address, SwapError> {
    get_address(e, DataKey::Router)
}

pub fn set_pool_address(e: &Env, pool: Address) {
    set_address(e, DataKey::Pool, &pool);
}

pub fn get_pool_address(e: &Env) -> Result<Address, SwapError> {
    get_address(e, DataKey::Pool)
}

pub fn set_usdt_address(e: &Env, usdt: Address) {
    set_address(e, DataKey::TokenIn, &usdt);
}

pub fn get_usdt_address(e: &Env) -> Result<Address, SwapError> {
    get_address(e, DataKey::TokenIn)
}

pub fn set_susds_address(e: &Env, susds: Address) {
    set_address(e, DataKey::TokenOut, &susds);
}

pub fn get_susds_address(e: &Env) -> Result<Address, SwapError> {
    get_address(e, DataKey::TokenOut)
}

pub fn set_pool_type(e: &Env, pool_type: u32) {
    set_u32(e, DataKey::PoolType, pool_type);
}

pub fn get_pool_type(e: &Env) -> Result<u32, SwapError> {
    get_u32(e, DataKey::PoolType)
}

pub fn set_n_coins(e: &Env, n_coins: u32) {
    set_u32(e, DataKey::NCoins, n_coins);
}

pub fn get_n_coins(e: &Env) -> Result<u32, SwapError> {
    get_u32(e, DataKey::NCoins)
}

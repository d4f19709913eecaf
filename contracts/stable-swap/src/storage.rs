use curve_route::storage::{get_address, set_address, DataKey};
use curve_route::SwapError;
use soroban_sdk::{Address, Env};

pub use curve_route::storage::extend_instance_ttl;

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

pub fn set_usdc_address(e: &Env, usdc: Address) {
    set_address(e, DataKey::TokenOut, &usdc);
}

pub fn get_usdc_address(e: &Env) -> Result<Address, SwapError> {
    get_address(e, DataKey::TokenOut)
}

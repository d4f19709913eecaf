#![no_std]
//! # Stable Swap - USDT to USDC through a three-coin stableswap pool
//!
//! Same custody flow as the crypto-pool swap, but the pool's `get_dy` and
//! `exchange` take signed indices, so positions are resolved as `i32`.

use curve_route::{
    check_nonnegative_amount, fund_exchange, resolve_pair_signed, settle, StablePoolClient,
    SwapError,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

mod storage;

use storage::{
    extend_instance_ttl, get_pool_address, get_usdc_address, get_usdt_address, set_pool_address,
    set_usdc_address, set_usdt_address,
};

#[contract]
pub struct StableSwap;

#[contractimpl]
impl StableSwap {
    pub fn __constructor(e: Env, pool: Address, usdt: Address, usdc: Address) {
        set_pool_address(&e, pool);
        set_usdt_address(&e, usdt);
        set_usdc_address(&e, usdc);
    }

    pub fn quote_usdt_usdc(e: Env, amount_in: i128) -> Result<i128, SwapError> {
        check_nonnegative_amount(amount_in)?;

        let pool = StablePoolClient::new(&e, &get_pool_address(&e)?);
        let usdt = get_usdt_address(&e)?;
        let usdc = get_usdc_address(&e)?;
        let (i, j) = resolve_pair_signed(&e, &pool, &usdt, &usdc)?;

        Ok(pool.get_dy(&i, &j, &amount_in))
    }

    /// Swap `amount_in` USDT for at least `min_amount_out` USDC and send the
    /// USDC to `caller`. `caller` must have approved this contract for
    /// `amount_in` USDT.
    pub fn swap_usdt_usdc(
        e: Env,
        caller: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, SwapError> {
        caller.require_auth();
        check_nonnegative_amount(amount_in)?;
        check_nonnegative_amount(min_amount_out)?;
        extend_instance_ttl(&e);

        let pool_address = get_pool_address(&e)?;
        let pool = StablePoolClient::new(&e, &pool_address);
        let usdt = get_usdt_address(&e)?;
        let usdc = get_usdc_address(&e)?;
        let (i, j) = resolve_pair_signed(&e, &pool, &usdt, &usdc)?;

        fund_exchange(&e, &usdt, &caller, &pool_address, amount_in);
        let amount_out = pool.exchange(
            &e.current_contract_address(),
            &i,
            &j,
            &amount_in,
            &min_amount_out,
        );
        settle(&e, &caller, &usdt, &usdc, amount_in, amount_out);

        Ok(amount_out)
    }
}

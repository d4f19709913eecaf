#![no_std]
//! # Direct Swap - WETH to USDC through a three-coin crypto pool
//!
//! The contract takes custody for the length of one call:
//! User (WETH) → Contract → Pool → Contract (USDC) → User
//!
//! The pool addresses its coins with unsigned indices. Both indices are looked
//! up in the pool's coin list on every call.

use curve_route::{
    check_nonnegative_amount, fund_exchange, resolve_pair, settle, CryptoPoolClient, SwapError,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

mod storage;

use storage::{
    extend_instance_ttl, get_pool_address, get_usdc_address, get_weth_address, set_pool_address,
    set_usdc_address, set_weth_address,
};

#[contract]
pub struct DirectSwap;

#[contractimpl]
impl DirectSwap {
    /// Wire the pool and both tokens
    pub fn __constructor(e: Env, pool: Address, weth: Address, usdc: Address) {
        set_pool_address(&e, pool);
        set_weth_address(&e, weth);
        set_usdc_address(&e, usdc);
    }

    /// USDC the pool would currently pay for `amount_in` WETH
    pub fn quote_weth_usdc(e: Env, amount_in: i128) -> Result<i128, SwapError> {
        check_nonnegative_amount(amount_in)?;

        let pool = CryptoPoolClient::new(&e, &get_pool_address(&e)?);
        let weth = get_weth_address(&e)?;
        let usdc = get_usdc_address(&e)?;
        let (i, j) = resolve_pair(&e, &pool, &weth, &usdc)?;

        Ok(pool.get_dy(&i, &j, &amount_in))
    }

    /// Swap `amount_in` WETH for at least `min_amount_out` USDC
    ///
    /// ## Authorization Flow:
    /// 1. User signs the transaction (`caller.require_auth()`)
    /// 2. User has approved this contract for `amount_in` WETH beforehand
    /// 3. The contract approves the pool for the same amount and pulls the WETH in
    ///
    /// ## Returns:
    /// Amount of USDC sent to `caller`
    ///
    /// ## Errors:
    /// - `NotFound` if the pool no longer lists WETH or USDC
    /// - the pool aborts the call if it cannot pay `min_amount_out`
    pub fn swap_weth_usdc(
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
        let pool = CryptoPoolClient::new(&e, &pool_address);
        let weth = get_weth_address(&e)?;
        let usdc = get_usdc_address(&e)?;
        let (i, j) = resolve_pair(&e, &pool, &weth, &usdc)?;

        // Steps 1-2: approve the pool, pull WETH in from the caller
        fund_exchange(&e, &weth, &caller, &pool_address, amount_in);

        // Step 3: the pool enforces `min_amount_out` and aborts the whole call if unmet
        let amount_out = pool.exchange(
            &e.current_contract_address(),
            &i,
            &j,
            &amount_in,
            &min_amount_out,
        );

        // Step 4: forward everything received
        settle(&e, &caller, &weth, &usdc, amount_in, amount_out);
        Ok(amount_out)
    }
}

#[cfg(test)]
mod test;

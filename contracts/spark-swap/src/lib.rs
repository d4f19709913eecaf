#![no_std]
//! # Spark Swap - USDT to sUSDS through the generic router
//!
//! The router takes a fixed-shape route descriptor rather than pool indices:
//! 11 token/pool slots, a 5x5 swap parameter table and 5 pool slots. This
//! contract fills in the single hop `USDT -> pool -> sUSDS` and leaves every
//! other slot empty.
//!
//! Token flow: User (USDT) → Contract → Router → Pool → Router → Contract (sUSDS) → User
//!
//! The pool type tag sent in the swap parameters is fixed at deploy time.
//! Two-coin crypto pools use 2 and three-coin crypto pools use 3; pick the
//! one the live router expects for the configured pool.

use curve_route::{
    build_route, check_nonnegative_amount, fund_exchange, settle, CryptoPoolClient, PoolType,
    Route, RouterClient, SwapError, MAX_COINS,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

mod storage;

use storage::{
    extend_instance_ttl, get_n_coins, get_pool_address, get_pool_type, get_router_address,
    get_susds_address, get_usdt_address, set_n_coins, set_pool_address, set_pool_type,
    set_router_address, set_susds_address, set_usdt_address,
};

/// Builds the USDT -> sUSDS route from the pool's current coin list.
fn usdt_susds_route(
    e: &Env,
    usdt: &Address,
    susds: &Address,
) -> Result<Route<Address>, SwapError> {
    let pool_address = get_pool_address(e)?;
    let pool = CryptoPoolClient::new(e, &pool_address);
    let pool_type = PoolType::from_tag(get_pool_type(e)?)?;
    let n_coins = get_n_coins(e)?;

    build_route(&pool, usdt, susds, pool_address.clone(), pool_type, n_coins).map_err(|err| {
        log!(e, "token not found in pool", pool_address, usdt.clone(), susds.clone());
        err
    })
}

#[contract]
pub struct SparkSwap;

#[contractimpl]
impl SparkSwap {
    /// Initialize the contract with the router, the pool it should route
    /// through and both tokens
    ///
    /// ## Parameters:
    /// - `pool_type`: router pool family tag (see `PoolType`)
    /// - `n_coins`: number of coins the pool holds, 2 or 3
    pub fn __constructor(
        e: Env,
        router: Address,
        pool: Address,
        usdt: Address,
        susds: Address,
        pool_type: u32,
        n_coins: u32,
    ) {
        if let Err(err) = PoolType::from_tag(pool_type) {
            panic_with_error!(&e, err);
        }
        if !(2..=MAX_COINS).contains(&n_coins) {
            panic_with_error!(&e, SwapError::InvalidPoolType);
        }

        set_router_address(&e, router);
        set_pool_address(&e, pool);
        set_usdt_address(&e, usdt);
        set_susds_address(&e, susds);
        set_pool_type(&e, pool_type);
        set_n_coins(&e, n_coins);
    }

    /// sUSDS the router would currently pay for `amount_in` USDT
    pub fn quote_usdt_susds(e: Env, amount_in: i128) -> Result<i128, SwapError> {
        check_nonnegative_amount(amount_in)?;

        let router = RouterClient::new(&e, &get_router_address(&e)?);
        let route = usdt_susds_route(&e, &get_usdt_address(&e)?, &get_susds_address(&e)?)?;

        Ok(router.get_dy(
            &route.route_val(&e),
            &route.swap_params_val(&e),
            &amount_in,
            &route.pools_val(&e),
        ))
    }

    /// Swap `amount_in` USDT for at least `min_amount_out` sUSDS via the router
    ///
    /// ## Authorization Flow:
    /// 1. User signs the transaction (`caller.require_auth()`)
    /// 2. User has approved this contract for `amount_in` USDT beforehand
    /// 3. The contract approves the router, which pulls the USDT from the contract
    ///
    /// ## Returns:
    /// Amount of sUSDS sent to `caller`
    pub fn swap_usdt_susds(
        e: Env,
        caller: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, SwapError> {
        caller.require_auth();
        check_nonnegative_amount(amount_in)?;
        check_nonnegative_amount(min_amount_out)?;
        extend_instance_ttl(&e);

        let router_address = get_router_address(&e)?;
        let router = RouterClient::new(&e, &router_address);
        let usdt = get_usdt_address(&e)?;
        let susds = get_susds_address(&e)?;
        let route = usdt_susds_route(&e, &usdt, &susds)?;

        fund_exchange(&e, &usdt, &caller, &router_address, amount_in);

        // The router checks `min_amount_out` after the last hop
        let amount_out = router.exchange(
            &e.current_contract_address(),
            &route.route_val(&e),
            &route.swap_params_val(&e),
            &amount_in,
            &min_amount_out,
        );

        settle(&e, &caller, &usdt, &susds, amount_in, amount_out);
        Ok(amount_out)
    }
}

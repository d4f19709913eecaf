#![cfg(test)]
extern crate std;

use super::*;
use curve_route::{
    testutils::{contract_events, MockCryptoPool},
    SwapExecuted,
};
use soroban_sdk::{
    testutils::{Address as _, Logs as _},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Event as _, InvokeError,
};

const WETH: i128 = 10_000_000;
const USDC_PER_WETH: i128 = 2_500;

fn create_token<'a>(e: &Env) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let admin = Address::generate(e);
    let sac = e.register_stellar_asset_contract_v2(admin);
    (
        TokenClient::new(e, &sac.address()),
        StellarAssetClient::new(e, &sac.address()),
    )
}

struct Setup<'a> {
    e: Env,
    user: Address,
    pool: Address,
    weth: TokenClient<'a>,
    usdc: TokenClient<'a>,
    client: DirectSwapClient<'a>,
}

/// Pool listing [USDC, WBTC, WETH], funded with USDC; user holds 10 WETH.
fn setup<'a>() -> Setup<'a> {
    let e = Env::default();
    e.mock_all_auths();

    let user = Address::generate(&e);
    let (weth, weth_admin) = create_token(&e);
    let (usdc, usdc_admin) = create_token(&e);
    let (wbtc, _) = create_token(&e);

    let pool = e.register(
        MockCryptoPool,
        (
            vec![&e, usdc.address.clone(), wbtc.address.clone(), weth.address.clone()],
            USDC_PER_WETH,
            1i128,
        ),
    );
    usdc_admin.mint(&pool, &(1_000 * USDC_PER_WETH * WETH));
    weth_admin.mint(&user, &(10 * WETH));

    let contract_id = e.register(
        DirectSwap,
        (pool.clone(), weth.address.clone(), usdc.address.clone()),
    );
    let client = DirectSwapClient::new(&e, &contract_id);

    Setup { e, user, pool, weth, usdc, client }
}

fn approve(s: &Setup, amount: i128) {
    let expiration = s.e.ledger().sequence() + 100;
    s.weth.approve(&s.user, &s.client.address, &amount, &expiration);
}

#[test]
fn test_quote_then_swap() {
    let s = setup();
    let dx = WETH;

    let quoted = s.client.quote_weth_usdc(&dx);
    assert_eq!(quoted, USDC_PER_WETH * WETH);

    let init_weth = s.weth.balance(&s.user);
    let init_usdc = s.usdc.balance(&s.user);

    approve(&s, dx);
    let received = s.client.swap_weth_usdc(&s.user, &dx, &0);
    let events = contract_events(&s.e, &s.client.address);

    let executed = SwapExecuted {
        token_in: s.weth.address.clone(),
        token_out: s.usdc.address.clone(),
        caller: s.user.clone(),
        amount_in: dx,
        amount_out: received,
    };
    assert_eq!(events, vec![&s.e, (executed.topics(&s.e), executed.data(&s.e))]);
    assert_eq!(received, quoted);
    assert!(s.e.auths().iter().any(|(address, _)| *address == s.user));
    assert_eq!(s.usdc.balance(&s.user), init_usdc + received);
    assert_eq!(s.weth.balance(&s.user), init_weth - dx);
    assert_eq!(s.weth.balance(&s.pool), dx);
    assert_eq!(s.weth.balance(&s.client.address), 0);
    assert_eq!(s.usdc.balance(&s.client.address), 0);
}

#[test]
fn test_swap_below_min_amount_out_moves_nothing() {
    let s = setup();
    let dx = 2 * WETH;
    let quoted = s.client.quote_weth_usdc(&dx);

    approve(&s, dx);
    let result = s.client.try_swap_weth_usdc(&s.user, &dx, &(quoted + 1));

    assert!(result.is_err());
    assert!(contract_events(&s.e, &s.client.address).is_empty());
    assert_eq!(s.weth.balance(&s.user), 10 * WETH);
    assert_eq!(s.usdc.balance(&s.user), 0);
    assert_eq!(s.weth.balance(&s.pool), 0);
    assert_eq!(s.weth.allowance(&s.user, &s.client.address), dx);
}

#[test]
fn test_swap_without_allowance_fails() {
    let s = setup();

    let result = s.client.try_swap_weth_usdc(&s.user, &WETH, &0);

    assert!(result.is_err());
    assert_eq!(s.weth.balance(&s.user), 10 * WETH);
}

#[test]
fn test_negative_amounts_rejected() {
    let s = setup();

    assert_eq!(
        s.client.try_quote_weth_usdc(&-1),
        Err(Ok(SwapError::NegativeNotAllowed))
    );
    assert_eq!(
        s.client.try_swap_weth_usdc(&s.user, &-1, &0),
        Err(Ok(SwapError::NegativeNotAllowed))
    );
    assert_eq!(
        s.client.try_swap_weth_usdc(&s.user, &WETH, &-1),
        Err(Ok(SwapError::NegativeNotAllowed))
    );
}

#[test]
fn test_token_missing_from_pool() {
    let s = setup();
    let (dai, _) = create_token(&s.e);
    let contract_id = s.e.register(
        DirectSwap,
        (s.pool.clone(), dai.address.clone(), s.usdc.address.clone()),
    );
    let client = DirectSwapClient::new(&s.e, &contract_id);

    assert_eq!(
        client.try_quote_weth_usdc(&WETH),
        Err(Ok(SwapError::NotFound))
    );
    assert!(s
        .e
        .logs()
        .all()
        .iter()
        .any(|line| line.contains("token not found in pool")));
    assert_eq!(
        client.try_swap_weth_usdc(&s.user, &WETH, &0),
        Err(Ok(SwapError::NotFound))
    );
}

#[test]
fn test_two_coin_pool() {
    let s = setup();
    let (weth_admin, usdc_admin) = (
        StellarAssetClient::new(&s.e, &s.weth.address),
        StellarAssetClient::new(&s.e, &s.usdc.address),
    );
    let pool = s.e.register(
        MockCryptoPool,
        (vec![&s.e, s.weth.address.clone(), s.usdc.address.clone()], 3_000i128, 1i128),
    );
    usdc_admin.mint(&pool, &(100 * 3_000 * WETH));
    weth_admin.mint(&s.user, &WETH);

    let contract_id = s.e.register(
        DirectSwap,
        (pool.clone(), s.weth.address.clone(), s.usdc.address.clone()),
    );
    let client = DirectSwapClient::new(&s.e, &contract_id);

    s.weth.approve(&s.user, &contract_id, &WETH, &(s.e.ledger().sequence() + 100));
    assert_eq!(client.swap_weth_usdc(&s.user, &WETH, &(3_000 * WETH)), 3_000 * WETH);
}

#[test]
fn test_pool_without_contract_is_not_reported_as_missing_token() {
    let s = setup();
    let contract_id = s.e.register(
        DirectSwap,
        (Address::generate(&s.e), s.weth.address.clone(), s.usdc.address.clone()),
    );
    let client = DirectSwapClient::new(&s.e, &contract_id);

    assert_eq!(client.try_quote_weth_usdc(&WETH), Err(Err(InvokeError::Abort)));
}

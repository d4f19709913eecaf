//! In-process pool and router contracts for driving the swap contracts in
//! tests. Every pool quotes `dx * rate_num / rate_den` for any pair of its
//! coins and holds enough of each coin to pay out.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, testutils::Events as _,
    token, Address, Env, Val, Vec,
};

use crate::interface::CryptoPoolClient;
use crate::route::{MAX_HOPS, SWAP_TYPE_EXCHANGE};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    /// Output below `min_dy`
    Slippage = 101,
    /// Index outside the pool's coin list
    BadIndex = 102,
    /// Route with a missing token or parameter row
    BadRoute = 103,
    UnsupportedSwapType = 104,
}

#[derive(Clone)]
#[contracttype]
enum MockKey {
    Coins,
    Rate,
}

fn store_pool(e: &Env, coins: Vec<Address>, rate_num: i128, rate_den: i128) {
    e.storage().instance().set(&MockKey::Coins, &coins);
    e.storage().instance().set(&MockKey::Rate, &(rate_num, rate_den));
}

fn coin_at(e: &Env, i: u32) -> Address {
    let coins: Vec<Address> = e.storage().instance().get(&MockKey::Coins).unwrap();
    match coins.get(i) {
        Some(coin) => coin,
        None => panic_with_error!(e, MockError::BadIndex),
    }
}

fn pool_quote(e: &Env, i: u32, j: u32, dx: i128) -> i128 {
    if i == j {
        panic_with_error!(e, MockError::BadIndex);
    }
    coin_at(e, i);
    coin_at(e, j);
    let (num, den): (i128, i128) = e.storage().instance().get(&MockKey::Rate).unwrap();
    dx * num / den
}

fn pool_exchange(e: &Env, sender: &Address, i: u32, j: u32, dx: i128, min_dy: i128) -> i128 {
    let dy = pool_quote(e, i, j, dx);
    if dy < min_dy {
        panic_with_error!(e, MockError::Slippage);
    }

    let pool = e.current_contract_address();
    token::Client::new(e, &coin_at(e, i)).transfer_from(&pool, sender, &pool, &dx);
    token::Client::new(e, &coin_at(e, j)).transfer(&pool, sender, &dy);
    dy
}

fn unsigned(e: &Env, i: i32) -> u32 {
    match u32::try_from(i) {
        Ok(i) => i,
        Err(_) => panic_with_error!(e, MockError::BadIndex),
    }
}

/// `(topics, data)` of the events published by `contract`. Events from
/// failed calls are left out.
pub fn contract_events(e: &Env, contract: &Address) -> Vec<(Vec<Val>, Val)> {
    let mut events = Vec::new(e);
    for (id, topics, data) in e.events().all().iter() {
        if id == *contract {
            events.push_back((topics, data));
        }
    }
    events
}

pub use crypto_pool::{MockCryptoPool, MockCryptoPoolClient};
pub use router::{MockRouter, MockRouterClient};
pub use stable_pool::{MockStablePool, MockStablePoolClient};

// One contract per module: generated interface metadata is keyed by function name.
mod crypto_pool {
    use super::*;

    #[contract]
    pub struct MockCryptoPool;

    #[contractimpl]
    impl MockCryptoPool {
        pub fn __constructor(e: Env, coins: Vec<Address>, rate_num: i128, rate_den: i128) {
            store_pool(&e, coins, rate_num, rate_den);
        }

        pub fn coins(e: Env, i: u32) -> Address {
            coin_at(&e, i)
        }

        pub fn get_dy(e: Env, i: u32, j: u32, dx: i128) -> i128 {
            pool_quote(&e, i, j, dx)
        }

        pub fn exchange(e: Env, sender: Address, i: u32, j: u32, dx: i128, min_dy: i128) -> i128 {
            pool_exchange(&e, &sender, i, j, dx, min_dy)
        }
    }
}

mod stable_pool {
    use super::*;

    #[contract]
    pub struct MockStablePool;

    #[contractimpl]
    impl MockStablePool {
        pub fn __constructor(e: Env, coins: Vec<Address>, rate_num: i128, rate_den: i128) {
            store_pool(&e, coins, rate_num, rate_den);
        }

        pub fn coins(e: Env, i: u32) -> Address {
            coin_at(&e, i)
        }

        pub fn get_dy(e: Env, i: i32, j: i32, dx: i128) -> i128 {
            pool_quote(&e, unsigned(&e, i), unsigned(&e, j), dx)
        }

        pub fn exchange(e: Env, sender: Address, i: i32, j: i32, dx: i128, min_dy: i128) -> i128 {
            pool_exchange(&e, &sender, unsigned(&e, i), unsigned(&e, j), dx, min_dy)
        }
    }
}

/// (pool, i, j, token_out) for every populated hop of a route.
fn route_hops(
    e: &Env,
    route: &Vec<Option<Address>>,
    swap_params: &Vec<Vec<u32>>,
) -> Vec<(Address, u32, u32, Address)> {
    let mut hops = Vec::new(e);
    for k in 0..MAX_HOPS as u32 {
        let Some(pool) = route.get(2 * k + 1).flatten() else {
            break;
        };
        let Some(token_out) = route.get(2 * k + 2).flatten() else {
            panic_with_error!(e, MockError::BadRoute);
        };
        let Some(params) = swap_params.get(k) else {
            panic_with_error!(e, MockError::BadRoute);
        };
        if params.get(2) != Some(SWAP_TYPE_EXCHANGE) {
            panic_with_error!(e, MockError::UnsupportedSwapType);
        }
        let (Some(i), Some(j)) = (params.get(0), params.get(1)) else {
            panic_with_error!(e, MockError::BadRoute);
        };
        hops.push_back((pool, i, j, token_out));
    }
    hops
}

mod router {
    use super::*;

    /// Router that walks a route through [`MockCryptoPool`]s.
    #[contract]
    pub struct MockRouter;

    #[contractimpl]
    impl MockRouter {
        pub fn get_dy(
            e: Env,
            route: Vec<Option<Address>>,
            swap_params: Vec<Vec<u32>>,
            amount: i128,
            _pools: Vec<Option<Address>>,
        ) -> i128 {
            let mut amount = amount;
            for (pool, i, j, _) in route_hops(&e, &route, &swap_params).iter() {
                amount = CryptoPoolClient::new(&e, &pool).get_dy(&i, &j, &amount);
            }
            amount
        }

        pub fn exchange(
            e: Env,
            sender: Address,
            route: Vec<Option<Address>>,
            swap_params: Vec<Vec<u32>>,
            amount: i128,
            min_dy: i128,
        ) -> i128 {
            let router = e.current_contract_address();
            let Some(mut token) = route.get(0).flatten() else {
                panic_with_error!(&e, MockError::BadRoute);
            };
            token::Client::new(&e, &token).transfer_from(&router, &sender, &router, &amount);

            let mut amount = amount;
            for (pool, i, j, token_out) in route_hops(&e, &route, &swap_params).iter() {
                token::Client::new(&e, &token).approve(&router, &pool, &amount, &e.ledger().sequence());
                amount = CryptoPoolClient::new(&e, &pool).exchange(&router, &i, &j, &amount, &0);
                token = token_out;
            }

            if amount < min_dy {
                panic_with_error!(&e, MockError::Slippage);
            }
            token::Client::new(&e, &token).transfer(&router, &sender, &amount);
            amount
        }
    }
}

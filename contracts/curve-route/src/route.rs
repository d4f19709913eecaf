use soroban_sdk::{Address, Env, Vec};

use crate::error::SwapError;
use crate::resolver::{resolve_index, CoinList};

/// Token/pool slots in a route: up to 5 hops, alternating token and pool.
pub const MAX_ROUTE_LEN: usize = 11;
pub const MAX_HOPS: usize = 5;
/// `[i, j, swap_type, pool_type, n_coins]`
pub const SWAP_PARAMS_LEN: usize = 5;
/// Swap type tag for a plain `exchange` on the hop's pool.
pub const SWAP_TYPE_EXCHANGE: u32 = 1;

/// Pool family tag the router uses to pick the pool's call signature.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolType {
    Stable = 1,
    TwoCrypto = 2,
    TriCrypto = 3,
    Llamma = 4,
    StableNg = 10,
    TwoCryptoNg = 20,
    TriCryptoNg = 30,
}

impl PoolType {
    pub fn from_tag(tag: u32) -> Result<Self, SwapError> {
        match tag {
            1 => Ok(PoolType::Stable),
            2 => Ok(PoolType::TwoCrypto),
            3 => Ok(PoolType::TriCrypto),
            4 => Ok(PoolType::Llamma),
            10 => Ok(PoolType::StableNg),
            20 => Ok(PoolType::TwoCryptoNg),
            30 => Ok(PoolType::TriCryptoNg),
            _ => Err(SwapError::InvalidPoolType),
        }
    }

    pub fn tag(self) -> u32 {
        self as u32
    }
}

/// Fixed-shape route descriptor consumed by the router.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Route<A> {
    pub hops: [Option<A>; MAX_ROUTE_LEN],
    pub swap_params: [[u32; SWAP_PARAMS_LEN]; MAX_HOPS],
    pub pools: [Option<A>; MAX_HOPS],
}

impl<A> Route<A> {
    pub fn empty() -> Self {
        Self {
            hops: core::array::from_fn(|_| None),
            swap_params: [[0; SWAP_PARAMS_LEN]; MAX_HOPS],
            pools: core::array::from_fn(|_| None),
        }
    }
}

impl Route<Address> {
    pub fn route_val(&self, e: &Env) -> Vec<Option<Address>> {
        Vec::from_array(e, self.hops.clone())
    }

    pub fn swap_params_val(&self, e: &Env) -> Vec<Vec<u32>> {
        let mut rows = Vec::new(e);
        for row in self.swap_params.iter() {
            rows.push_back(Vec::from_array(e, *row));
        }
        rows
    }

    pub fn pools_val(&self, e: &Env) -> Vec<Option<Address>> {
        Vec::from_array(e, self.pools.clone())
    }
}

/// Single-hop route `source -> pool -> dest`.
///
/// Both tokens are resolved against the pool's coin list first, so a token
/// the pool does not hold yields `NotFound` and no route at all.
pub fn build_route<L>(
    coins: &L,
    source: &L::Coin,
    dest: &L::Coin,
    pool: L::Coin,
    pool_type: PoolType,
    n_coins: u32,
) -> Result<Route<L::Coin>, SwapError>
where
    L: CoinList + ?Sized,
    L::Coin: Clone,
{
    let i = resolve_index(coins, source)?;
    let j = resolve_index(coins, dest)?;

    let mut route = Route::empty();
    route.hops[0] = Some(source.clone());
    route.hops[1] = Some(pool.clone());
    route.hops[2] = Some(dest.clone());
    route.swap_params[0] = [i, j, SWAP_TYPE_EXCHANGE, pool_type.tag(), n_coins];
    route.pools[0] = Some(pool);
    Ok(route)
}

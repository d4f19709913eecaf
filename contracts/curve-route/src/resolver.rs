use soroban_sdk::{
    log, xdr::ScErrorType, Address, ConversionError, Env, Error, InvokeError, Vec,
};

use crate::error::SwapError;
use crate::interface::{CryptoPoolClient, StablePoolClient};

/// Coin slots scanned per pool.
pub const MAX_COINS: u32 = 3;

/// Indexed read access to a pool's ordered coin list.
pub trait CoinList {
    type Coin: PartialEq;

    /// Coin stored at slot `i`, or `None` when the slot is empty.
    fn coin(&self, i: u32) -> Option<Self::Coin>;
}

impl<T: PartialEq + Clone> CoinList for [T] {
    type Coin = T;

    fn coin(&self, i: u32) -> Option<T> {
        self.get(i as usize).cloned()
    }
}

impl<T: PartialEq + Clone, const N: usize> CoinList for [T; N] {
    type Coin = T;

    fn coin(&self, i: u32) -> Option<T> {
        self.get(i as usize).cloned()
    }
}

impl CoinList for Vec<Address> {
    type Coin = Address;

    fn coin(&self, i: u32) -> Option<Address> {
        self.get(i)
    }
}

type CoinsResult = Result<Result<Address, ConversionError>, Result<Error, InvokeError>>;

// Pools with fewer than three coins fail `coins(i)` past their last slot with
// their own contract error. Anything else is re-raised by calling again
// without `try_`.
fn pool_coin(res: CoinsResult, coins: impl FnOnce() -> Address) -> Option<Address> {
    match res {
        Ok(Ok(coin)) => Some(coin),
        Err(Ok(err)) if err.is_type(ScErrorType::Contract) => None,
        _ => Some(coins()),
    }
}

impl CoinList for CryptoPoolClient<'_> {
    type Coin = Address;

    fn coin(&self, i: u32) -> Option<Address> {
        pool_coin(self.try_coins(&i), || self.coins(&i))
    }
}

impl CoinList for StablePoolClient<'_> {
    type Coin = Address;

    fn coin(&self, i: u32) -> Option<Address> {
        pool_coin(self.try_coins(&i), || self.coins(&i))
    }
}

/// Position of `target` in the pool's coin list.
///
/// Scans slots 0, 1, 2 in order and returns the first match. The list is
/// read on every call and never cached.
///
/// # Errors
/// * `NotFound` - If no slot holds `target`
pub fn resolve_index<L>(coins: &L, target: &L::Coin) -> Result<u32, SwapError>
where
    L: CoinList + ?Sized,
{
    for i in 0..MAX_COINS {
        if coins.coin(i).as_ref() == Some(target) {
            return Ok(i);
        }
    }
    Err(SwapError::NotFound)
}

/// Same scan as [`resolve_index`], typed for pools taking signed indices.
pub fn resolve_index_signed<L>(coins: &L, target: &L::Coin) -> Result<i32, SwapError>
where
    L: CoinList + ?Sized,
{
    resolve_index(coins, target).map(|i| i as i32)
}

fn resolve_logged<L>(e: &Env, coins: &L, token: &Address) -> Result<u32, SwapError>
where
    L: CoinList<Coin = Address> + ?Sized,
{
    resolve_index(coins, token).map_err(|err| {
        log!(e, "token not found in pool", token.clone());
        err
    })
}

/// Resolves `(i, j)` for a `token_in -> token_out` exchange, logging
/// whichever token the pool does not list.
pub fn resolve_pair<L>(
    e: &Env,
    coins: &L,
    token_in: &Address,
    token_out: &Address,
) -> Result<(u32, u32), SwapError>
where
    L: CoinList<Coin = Address> + ?Sized,
{
    let i = resolve_logged(e, coins, token_in)?;
    let j = resolve_logged(e, coins, token_out)?;
    Ok((i, j))
}

pub fn resolve_pair_signed<L>(
    e: &Env,
    coins: &L,
    token_in: &Address,
    token_out: &Address,
) -> Result<(i32, i32), SwapError>
where
    L: CoinList<Coin = Address> + ?Sized,
{
    resolve_pair(e, coins, token_in, token_out).map(|(i, j)| (i as i32, j as i32))
}

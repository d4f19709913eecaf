#![no_std]
//! # Curve Route - shared pieces of the fixed-pair swap contracts
//!
//! Every swap contract in this workspace does the same three things:
//! - resolves the positions of its two tokens in a pool's coin list
//!   ([`resolve_index`] / [`resolve_index_signed`]);
//! - for router swaps, packs those positions into the router's fixed-shape
//!   route descriptor ([`build_route`]);
//! - runs approve -> transfer in -> exchange -> transfer out
//!   ([`fund_exchange`] and [`settle`] around the external exchange call).
//!
//! Nothing here holds state between calls. Coin lists are re-read on every
//! call and routes are rebuilt on every call.

#[cfg(test)]
extern crate std;

mod error;
mod events;
mod flow;
mod interface;
mod resolver;
mod route;
pub mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use error::{check_nonnegative_amount, SwapError};
pub use events::SwapExecuted;
pub use flow::{fund_exchange, settle};
pub use interface::{
    CryptoPoolClient, CryptoPoolInterface, RouterClient, RouterInterface, StablePoolClient,
    StablePoolInterface,
};
pub use resolver::{
    resolve_index, resolve_index_signed, resolve_pair, resolve_pair_signed, CoinList, MAX_COINS,
};
pub use route::{
    build_route, PoolType, Route, MAX_HOPS, MAX_ROUTE_LEN, SWAP_PARAMS_LEN, SWAP_TYPE_EXCHANGE,
};

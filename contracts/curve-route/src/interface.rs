use soroban_sdk::{contractclient, Address, Env, Vec};

/// Pool that addresses its coins with unsigned indices (crypto pools).
#[contractclient(name = "CryptoPoolClient")]
#[allow(dead_code)]
pub trait CryptoPoolInterface {
    fn coins(e: Env, i: u32) -> Address;

    fn get_dy(e: Env, i: u32, j: u32, dx: i128) -> i128;

    /// Pulls `dx` of coin `i` from `sender` and pays the output back to it.
    fn exchange(e: Env, sender: Address, i: u32, j: u32, dx: i128, min_dy: i128) -> i128;
}

/// Pool whose exchange entry points take signed indices (stableswap pools).
/// `coins` is still unsigned.
#[contractclient(name = "StablePoolClient")]
#[allow(dead_code)]
pub trait StablePoolInterface {
    fn coins(e: Env, i: u32) -> Address;

    fn get_dy(e: Env, i: i32, j: i32, dx: i128) -> i128;

    fn exchange(e: Env, sender: Address, i: i32, j: i32, dx: i128, min_dy: i128) -> i128;
}

/// Generic multi-hop router.
///
/// `route` holds 11 slots alternating token and pool, `swap_params` is a 5x5
/// table with one row per hop and `pools` holds 5 slots. Empty slots are
/// `None` and empty rows are all zero.
#[contractclient(name = "RouterClient")]
#[allow(dead_code)]
pub trait RouterInterface {
    fn get_dy(
        e: Env,
        route: Vec<Option<Address>>,
        swap_params: Vec<Vec<u32>>,
        amount: i128,
        pools: Vec<Option<Address>>,
    ) -> i128;

    fn exchange(
        e: Env,
        sender: Address,
        route: Vec<Option<Address>>,
        swap_params: Vec<Vec<u32>>,
        amount: i128,
        min_dy: i128,
    ) -> i128;
}

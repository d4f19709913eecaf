use soroban_sdk::{log, token, Address, Env};

use crate::events::SwapExecuted;

/// Steps 1 and 2 of a swap.
///
/// Lets `spender` (the pool or router) draw `amount` of `token` from this
/// contract until the end of the current ledger, then pulls `amount` in from
/// `caller` using the allowance the caller granted this contract.
pub fn fund_exchange(e: &Env, token: &Address, caller: &Address, spender: &Address, amount: i128) {
    let this = e.current_contract_address();
    let token_client = token::Client::new(e, token);

    token_client.approve(&this, spender, &amount, &e.ledger().sequence());
    token_client.transfer_from(&this, caller, &this, &amount);
}

/// Step 4 of a swap: forwards everything the exchange paid out to `caller`
/// and records the swap.
pub fn settle(
    e: &Env,
    caller: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
) {
    token::Client::new(e, token_out).transfer(&e.current_contract_address(), caller, &amount_out);

    log!(e, "swap executed", amount_in, amount_out);
    SwapExecuted {
        token_in: token_in.clone(),
        token_out: token_out.clone(),
        caller: caller.clone(),
        amount_in,
        amount_out,
    }
    .publish(e);
}

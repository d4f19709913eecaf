use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapExecuted {
    #[topic]
    pub token_in: Address,
    #[topic]
    pub token_out: Address,
    pub caller: Address,
    pub amount_in: i128,
    pub amount_out: i128,
}

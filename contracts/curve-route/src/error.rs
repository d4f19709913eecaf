use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    /// Token not found in pool
    NotFound = 1,
    /// Negative amount or slippage bound
    NegativeNotAllowed = 2,
    /// Constructor wiring missing from instance storage
    NotInitialized = 3,
    /// Pool type tag or coin count the router does not understand
    InvalidPoolType = 4,
}

/// Validates that the amount is non-negative
pub fn check_nonnegative_amount(amount: i128) -> Result<(), SwapError> {
    if amount < 0 {
        Err(SwapError::NegativeNotAllowed)
    } else {
        Ok(())
    }
}

//! Error types surfaced by card operations

use crate::domain::types::Amount;
use thiserror::Error;

/// Errors raised by [`Card`](crate::services::Card) operations.
///
/// Both variants are raised synchronously at the offending call with no
/// state mutated, so the caller can recover: top up less after
/// `BalanceExceeded`, top up more before retrying after
/// `InsufficientFunds`. Touch-out never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Top-up would push the balance past the configured ceiling.
    #[error("maximum balance of {maximum} exceeded")]
    BalanceExceeded { maximum: Amount },

    /// Touch-in refused: balance is below the minimum fare.
    #[error("insufficient funds: top up (minimum fare {minimum})")]
    InsufficientFunds { minimum: Amount },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_configured_values() {
        let err = CardError::BalanceExceeded { maximum: Amount(90) };
        assert_eq!(err.to_string(), "maximum balance of £90 exceeded");

        let err = CardError::InsufficientFunds { minimum: Amount(1) };
        assert_eq!(err.to_string(), "insufficient funds: top up (minimum fare £1)");
    }
}

//! Errors returned by account operations.

use thiserror::Error;

use crate::types::Amount;

/// Result type alias using `AccountError`.
pub type AccountResult<T> = Result<T, AccountError>;

/// Reasons an account operation was rejected.
///
/// Every variant describes a rejected call: the account is left exactly as it
/// was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The amount is zero or negative.
    #[error("{amount}: the amount must be a positive value")]
    InvalidAmount { amount: Amount },

    /// The account already holds the maximum number of deposits.
    #[error("already exceeded the {limit} daily deposits")]
    DepositLimitExceeded { limit: usize },

    /// The withdrawal would leave a negative balance.
    #[error("cannot withdraw more than {balance} $")]
    InsufficientBalance { balance: Amount },

    /// The withdrawal exceeds what is left of today's allowance.
    #[error("cannot withdraw more than $ {ceiling} per day, remaining: {remaining}")]
    DailyWithdrawalLimitExceeded { ceiling: Amount, remaining: Amount },

    /// The resulting balance does not fit in a decimal.
    #[error("balance overflow")]
    BalanceOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_report_offending_values() {
        assert_eq!(
            AccountError::InvalidAmount { amount: dec!(-5) }.to_string(),
            "-5: the amount must be a positive value"
        );
        assert_eq!(
            AccountError::DepositLimitExceeded { limit: 3 }.to_string(),
            "already exceeded the 3 daily deposits"
        );
        assert_eq!(
            AccountError::InsufficientBalance { balance: dec!(500) }.to_string(),
            "cannot withdraw more than 500 $"
        );
        assert_eq!(
            AccountError::DailyWithdrawalLimitExceeded {
                ceiling: dec!(1000),
                remaining: dec!(400),
            }
            .to_string(),
            "cannot withdraw more than $ 1000 per day, remaining: 400"
        );
    }
}

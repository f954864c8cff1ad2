//! Business limits enforced by an [`Account`](crate::account::Account).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Amount;

pub const DEFAULT_MAX_DEPOSITS: usize = 3;
pub const DEFAULT_DAILY_WITHDRAWAL_CEILING: i64 = 1000;

/// Limits applied to deposits and withdrawals.
///
/// - `max_deposits`: how many deposits an account may record in total. The
///   check counts every deposit in the history, regardless of its date.
/// - `daily_withdrawal_ceiling`: the maximum sum of withdrawals dated on the
///   same day.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct Limits {
    pub max_deposits: usize,
    pub daily_withdrawal_ceiling: Amount,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_deposits: DEFAULT_MAX_DEPOSITS,
            daily_withdrawal_ceiling: Decimal::from(DEFAULT_DAILY_WITHDRAWAL_CEILING),
        }
    }
}

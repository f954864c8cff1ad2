//! Core data types for the account ledger.
//!
//! # Type Aliases
//!
//! - [`Amount`]: Type alias for monetary amounts (Decimal)
//!
//! # Core Types
//!
//! - [`MovementKind`]: Whether a movement is a deposit or a withdrawal
//! - [`Movement`]: One immutable deposit or withdrawal record on a given date
//!
//! # Serialization
//!
//! Both types implement [`Serialize`] and [`Deserialize`] from `serde`, so a
//! movement history can be read from CSV:
//! - Movement kinds are serialized in lowercase
//! - Amounts are serialized as strings to keep decimal precision
//! - Dates use ISO-8601 (`2024-03-01`)
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use monedero::types::{Movement, MovementKind};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let movement = Movement::withdrawal(date, Decimal::from_str("10.50").unwrap());
//!
//! assert_eq!(movement.kind(), MovementKind::Withdrawal);
//! assert_eq!(movement.signed_amount(), Decimal::from_str("-10.50").unwrap());
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type Amount = Decimal;

/// The direction of a movement.
///
/// - **Deposit**: Adds its amount to the account balance.
/// - **Withdrawal**: Removes its amount from the account balance, and counts
///   toward the daily withdrawal ceiling of the day it is dated on.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// A single deposit or withdrawal recorded on an account.
///
/// Movements are plain values: constructing one performs no validation, and
/// once built it cannot be changed. The account is responsible for checking
/// the amount before it creates a movement and for applying it to the balance.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct Movement {
    date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Amount,
    kind: MovementKind,
}

impl Movement {
    pub fn new(date: NaiveDate, amount: Amount, kind: MovementKind) -> Self {
        Movement { date, amount, kind }
    }

    pub fn deposit(date: NaiveDate, amount: Amount) -> Self {
        Movement::new(date, amount, MovementKind::Deposit)
    }

    pub fn withdrawal(date: NaiveDate, amount: Amount) -> Self {
        Movement::new(date, amount, MovementKind::Withdrawal)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    /// Returns the effect of this movement on a balance: `+amount` for a
    /// deposit and `-amount` for a withdrawal.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }

    /// Returns true if this is a withdrawal dated exactly `date`.
    pub fn is_withdrawal_on(&self, date: NaiveDate) -> bool {
        !self.is_deposit() && self.date == date
    }
}

//! Single-account ledger with deposit and withdrawal rules.
//!
//! An [`Account`] records [`Movement`]s and enforces:
//! - amounts must be positive,
//! - at most three deposits (counted over the whole history),
//! - the balance never goes below zero,
//! - withdrawals dated on the same day add up to at most 1000.
//!
//! Rejected operations return an [`AccountError`] and leave the account unchanged.
//!
//! # Examples
//!
//! ```
//! use monedero::{Account, AccountError};
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::new();
//! account.deposit(Decimal::from(100)).unwrap();
//! account.deposit(Decimal::from(200)).unwrap();
//! account.withdraw(Decimal::from(50)).unwrap();
//! assert_eq!(account.balance(), Decimal::from(250));
//!
//! let err = account.withdraw(Decimal::from(1000)).unwrap_err();
//! assert_eq!(err, AccountError::InsufficientBalance { balance: Decimal::from(250) });
//! ```

pub mod account;
pub mod clock;
pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use account::Account;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Limits;
pub use error::{AccountError, AccountResult};
pub use types::{Amount, Movement, MovementKind};

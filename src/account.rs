//! Account ledger and the business rules for deposits and withdrawals.
//!
//! An [`Account`] owns its movement history and a balance. Deposits and
//! withdrawals are validated against the current state before anything is
//! recorded: the first failing rule rejects the call and leaves the account
//! untouched. On success a [`Movement`] dated "today" is appended and the
//! balance is updated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::Limits;
use crate::error::{AccountError, AccountResult};
use crate::types::{Amount, Movement, MovementKind};

/// A single account with its movement history.
///
/// The balance always equals the initial balance plus the signed sum of all
/// recorded movements. Mutating operations take `&mut self`, so a validation
/// and the append that follows it can never interleave with another call.
#[derive(Debug, Clone)]
pub struct Account<C = SystemClock> {
    initial_balance: Amount,
    balance: Amount,
    movements: Vec<Movement>,
    limits: Limits,
    clock: C,
}

impl Account<SystemClock> {
    /// Creates an empty account with a zero balance.
    pub fn new() -> Self {
        Account::with_balance(Decimal::ZERO)
    }

    /// Creates an empty account starting at `initial_balance`.
    pub fn with_balance(initial_balance: Amount) -> Self {
        Account::with_clock(initial_balance, SystemClock)
    }
}

impl Default for Account<SystemClock> {
    fn default() -> Self {
        Account::new()
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(initial_balance: Amount, clock: C) -> Self {
        Account::with_limits(initial_balance, clock, Limits::default())
    }

    pub fn with_limits(initial_balance: Amount, clock: C, limits: Limits) -> Self {
        Account {
            initial_balance,
            balance: initial_balance,
            movements: Vec::new(),
            limits,
            clock,
        }
    }

    /// Deposits `amount`, dated today.
    ///
    /// # Errors
    ///
    /// - [`AccountError::InvalidAmount`] if `amount <= 0`
    /// - [`AccountError::DepositLimitExceeded`] if the history already holds
    ///   `limits.max_deposits` deposits
    /// - [`AccountError::BalanceOverflow`] if the new balance does not fit
    ///
    /// The deposit limit counts every deposit in the history, whatever its
    /// date, even though its message talks about daily deposits.
    pub fn deposit(&mut self, amount: Amount) -> AccountResult<()> {
        let result = self.try_deposit(amount);
        if let Err(err) = &result {
            debug!(%amount, %err, "deposit rejected");
        }
        result
    }

    fn try_deposit(&mut self, amount: Amount) -> AccountResult<()> {
        ensure_positive(amount)?;

        if self.deposit_count() >= self.limits.max_deposits {
            return Err(AccountError::DepositLimitExceeded {
                limit: self.limits.max_deposits,
            });
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;

        self.movements
            .push(Movement::deposit(self.clock.today(), amount));
        self.balance = balance;

        debug!(%amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraws `amount`, dated today.
    ///
    /// # Errors
    ///
    /// - [`AccountError::InvalidAmount`] if `amount <= 0`
    /// - [`AccountError::InsufficientBalance`] if the balance would go negative
    /// - [`AccountError::DailyWithdrawalLimitExceeded`] if `amount` is more than
    ///   what is left of today's ceiling
    pub fn withdraw(&mut self, amount: Amount) -> AccountResult<()> {
        let result = self.try_withdraw(amount);
        if let Err(err) = &result {
            debug!(%amount, %err, "withdrawal rejected");
        }
        result
    }

    fn try_withdraw(&mut self, amount: Amount) -> AccountResult<()> {
        ensure_positive(amount)?;

        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                balance: self.balance,
            });
        }

        let today = self.clock.today();
        let ceiling = self.limits.daily_withdrawal_ceiling;
        let remaining = ceiling.saturating_sub(self.withdrawn_on(today));
        if amount > remaining {
            return Err(AccountError::DailyWithdrawalLimitExceeded { ceiling, remaining });
        }

        // amount <= balance, so this cannot go below zero
        self.movements.push(Movement::withdrawal(today, amount));
        self.balance -= amount;

        debug!(%amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Replaces the whole movement history and recomputes the balance from it.
    ///
    /// No rule is checked. This is meant for seeding an account with an
    /// existing history, typically in tests.
    pub fn set_movements(&mut self, movements: Vec<Movement>) -> AccountResult<()> {
        let balance = net_balance(self.initial_balance, &movements)?;

        trace!(count = movements.len(), %balance, "movements replaced");
        self.movements = movements;
        self.balance = balance;
        Ok(())
    }

    /// Appends a movement for an arbitrary date and applies it to the balance.
    ///
    /// No rule is checked, so backdated history can be recorded for tests.
    pub fn register_movement(
        &mut self,
        date: NaiveDate,
        amount: Amount,
        kind: MovementKind,
    ) -> AccountResult<()> {
        let movement = Movement::new(date, amount, kind);
        let balance = self
            .balance
            .checked_add(movement.signed_amount())
            .ok_or(AccountError::BalanceOverflow)?;

        trace!(%date, %amount, ?kind, %balance, "movement registered");
        self.movements.push(movement);
        self.balance = balance;
        Ok(())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C> Account<C> {
    /// Sums the withdrawals dated exactly `date`.
    pub fn withdrawn_on(&self, date: NaiveDate) -> Amount {
        self.movements
            .iter()
            .filter(|movement| movement.is_withdrawal_on(date))
            .fold(Decimal::ZERO, |sum, movement| {
                sum.saturating_add(movement.amount())
            })
    }

    /// Number of deposits in the history, across all dates.
    pub fn deposit_count(&self) -> usize {
        self.movements
            .iter()
            .filter(|movement| movement.is_deposit())
            .count()
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn initial_balance(&self) -> Amount {
        self.initial_balance
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}

fn ensure_positive(amount: Amount) -> AccountResult<()> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount { amount });
    }
    Ok(())
}

fn net_balance(initial: Amount, movements: &[Movement]) -> AccountResult<Amount> {
    movements
        .iter()
        .try_fold(initial, |balance, movement| {
            balance.checked_add(movement.signed_amount())
        })
        .ok_or(AccountError::BalanceOverflow)
}

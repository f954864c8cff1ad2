//! Source of the current date for an account.
//!
//! Daily limits and movement dates depend on "today". Accounts read it through
//! the [`Clock`] trait instead of the wall clock, so tests can pin the date
//! with a [`FixedClock`].

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

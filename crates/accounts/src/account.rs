//! A buyer's funds behind a single lock.

use std::sync::Mutex;

use autolot_core::{MarketError, MarketResult};

/// Mutable balance owned by exactly one buyer.
///
/// The balance is the only mutable state and is only ever written through
/// [`Account::debit`], which checks and subtracts under one lock
/// acquisition. Amounts are in the smallest currency unit.
#[derive(Debug)]
pub struct Account {
    balance: Mutex<i64>,
}

impl Account {
    /// Open an account with a non-negative starting balance.
    pub fn open(initial_balance: i64) -> MarketResult<Self> {
        if initial_balance < 0 {
            return Err(MarketError::invalid_argument("balance cannot be negative"));
        }
        Ok(Self {
            balance: Mutex::new(initial_balance),
        })
    }

    /// Balance at the moment of the call.
    pub fn balance(&self) -> i64 {
        *self.balance.lock().expect("account lock poisoned")
    }

    /// Atomically subtract `amount` if the balance covers it.
    ///
    /// Two concurrent debits that individually fit the balance but not
    /// together cannot both succeed; the loser gets
    /// [`MarketError::InsufficientFunds`] and the balance stays unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is negative. Prices are validated non-negative at
    /// construction, so a negative amount here is a programming error, not a
    /// runtime failure path.
    pub fn debit(&self, amount: i64) -> MarketResult<()> {
        assert!(amount >= 0, "debit amount must be non-negative");

        let mut balance = self.balance.lock().expect("account lock poisoned");
        if amount > *balance {
            return Err(MarketError::insufficient_funds(amount, *balance));
        }
        *balance -= amount;
        Ok(())
    }
}

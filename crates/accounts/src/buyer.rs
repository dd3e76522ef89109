//! Registered buyers.

use autolot_core::{BuyerId, IdSequence, MarketError, MarketResult};

use crate::account::Account;

/// A buyer: identity, display name, and funds.
///
/// The name is validated once, at construction; the balance is the only
/// mutable field and lives inside the owned [`Account`].
#[derive(Debug)]
pub struct Buyer {
    id: BuyerId,
    name: String,
    account: Account,
}

impl Buyer {
    /// Register a buyer with a non-empty name and a non-negative opening
    /// balance. The identifier is drawn from the caller-supplied sequence.
    pub fn new(
        ids: &IdSequence<BuyerId>,
        name: impl Into<String>,
        balance: i64,
    ) -> MarketResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MarketError::invalid_argument("name cannot be empty"));
        }
        let account = Account::open(balance)?;
        Ok(Self {
            id: ids.next_id(),
            name,
            account,
        })
    }

    pub fn id(&self) -> BuyerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Balance at the moment of the call.
    pub fn balance(&self) -> i64 {
        self.account.balance()
    }

    /// Atomic balance-checked debit. See [`Account::debit`].
    pub fn debit(&self, amount: i64) -> MarketResult<()> {
        self.account.debit(amount)
    }
}

impl core::fmt::Display for Buyer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Buyer {}, balance: {} UAH", self.name, self.balance())
    }
}

//! The marketplace coordinator.

use std::sync::Arc;

use autolot_accounts::Buyer;
use autolot_contracts::{Contract, ContractLedger};
use autolot_core::{ItemId, MarketResult};
use autolot_inventory::Inventory;

/// Coordinates the inventory, the buyers' accounts and the contract ledger
/// behind the single mutating entry point, [`Marketplace::purchase`].
#[derive(Debug, Default)]
pub struct Marketplace {
    inventory: Inventory,
    ledger: ContractLedger,
}

impl Marketplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock this marketplace sells from. Setup and display go through
    /// here; the only mutating path besides [`Inventory::add`] is
    /// [`Marketplace::purchase`].
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Every recorded sale.
    pub fn ledger(&self) -> &ContractLedger {
        &self.ledger
    }

    /// Buy the item with identity `item_id` for `buyer`.
    ///
    /// The funds check, the debit and the removal run under one critical
    /// section covering the item: the debit happens while the inventory
    /// write lock still pins the item, so no interleaving with another
    /// purchase of the same item, or another debit of the same buyer, can
    /// double-sell, overdraw, or lose an update. A failed debit leaves the
    /// item listed, so no rollback path exists. Lock order is fixed:
    /// inventory first, then the buyer's account; account code never takes
    /// the inventory lock.
    ///
    /// Failures are typed and leave no mutation behind:
    /// [`autolot_core::MarketError::NotFound`] for an unknown or stale id,
    /// [`autolot_core::MarketError::InsufficientFunds`] when the balance
    /// does not cover the price.
    pub fn purchase(&self, item_id: ItemId, buyer: &Arc<Buyer>) -> MarketResult<Contract> {
        let item = self
            .inventory
            .reserve_with(item_id, |item| buyer.debit(item.price()))?;
        Ok(self.ledger.record(buyer, item))
    }
}

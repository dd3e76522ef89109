//! Append-only record of completed sales.

use std::sync::{Arc, RwLock};

use chrono::Utc;

use autolot_accounts::Buyer;
use autolot_core::{BuyerId, ContractId, IdSequence};
use autolot_inventory::Item;

use crate::contract::Contract;

/// Contract factory plus the append-only record of every sale.
///
/// Owns its own id sequence, so contract ids are unique and increasing for
/// the ledger's lifetime, independent of item and buyer ids.
#[derive(Debug, Default)]
pub struct ContractLedger {
    ids: IdSequence<ContractId>,
    contracts: RwLock<Vec<Contract>>,
}

impl ContractLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed sale.
    ///
    /// Pure construction plus one id draw and one wall-clock capture. Only
    /// called after reservation and debit both succeeded, so there is no
    /// failure path.
    pub fn record(&self, buyer: &Arc<Buyer>, item: Item) -> Contract {
        let contract = Contract::new(self.ids.next_id(), Arc::clone(buyer), item, Utc::now());
        self.contracts
            .write()
            .expect("ledger lock poisoned")
            .push(contract.clone());
        contract
    }

    /// Snapshot of all recorded contracts, in recording order.
    pub fn contracts(&self) -> Vec<Contract> {
        self.contracts.read().expect("ledger lock poisoned").clone()
    }

    /// Contracts recorded for one buyer, in recording order.
    pub fn for_buyer(&self, buyer: BuyerId) -> Vec<Contract> {
        self.contracts
            .read()
            .expect("ledger lock poisoned")
            .iter()
            .filter(|contract| contract.buyer().id() == buyer)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contracts.read().expect("ledger lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

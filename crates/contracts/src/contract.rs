//! Records of completed sales.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use autolot_accounts::Buyer;
use autolot_core::ContractId;
use autolot_inventory::Item;

/// Immutable record of one completed purchase.
///
/// Holds the sold item by value (items are immutable) and the buyer as a
/// shared back-reference; the record does not manage the buyer's lifecycle.
#[derive(Debug, Clone)]
pub struct Contract {
    id: ContractId,
    buyer: Arc<Buyer>,
    item: Item,
    signed_at: DateTime<Utc>,
}

impl Contract {
    pub(crate) fn new(
        id: ContractId,
        buyer: Arc<Buyer>,
        item: Item,
        signed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            buyer,
            item,
            signed_at,
        }
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn buyer(&self) -> &Buyer {
        &self.buyer
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn signed_at(&self) -> DateTime<Utc> {
        self.signed_at
    }
}

impl core::fmt::Display for Contract {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Contract {}: {} bought {} on {}",
            self.id,
            self.buyer.name(),
            self.item,
            self.signed_at
        )
    }
}

//! Cars listed for sale.

use serde::Serialize;

use autolot_core::{IdSequence, ItemId, MarketError, MarketResult};

/// A car listed for sale: identity, descriptive fields, price.
///
/// Immutable after construction; "changing" an item means listing a new
/// one. Price is in the smallest currency unit and never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    make: String,
    model: String,
    price: i64,
}

impl Item {
    /// Create an item with validated fields. The identifier is drawn from
    /// the caller-supplied sequence only after validation passes.
    pub fn new(
        ids: &IdSequence<ItemId>,
        make: impl Into<String>,
        model: impl Into<String>,
        price: i64,
    ) -> MarketResult<Self> {
        let make = make.into();
        let model = model.into();
        if make.trim().is_empty() {
            return Err(MarketError::invalid_argument("make cannot be empty"));
        }
        if model.trim().is_empty() {
            return Err(MarketError::invalid_argument("model cannot be empty"));
        }
        if price < 0 {
            return Err(MarketError::invalid_argument("price cannot be negative"));
        }
        Ok(Self {
            id: ids.next_id(),
            make,
            model,
            price,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}, price: {} UAH", self.make, self.model, self.price)
    }
}

//! The shared stock of cars for sale.

use std::collections::HashSet;
use std::sync::RwLock;

use autolot_core::{ItemId, MarketError, MarketResult};

use crate::item::Item;

/// Ordered collection of items currently for sale, shared across purchase
/// threads.
///
/// All mutation happens under the single write lock; reads take snapshots
/// under the read lock. Invariants: no item is present twice, and an item
/// removed by a successful reservation can never be listed again.
#[derive(Debug, Default)]
pub struct Inventory {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order is display order.
    items: Vec<Item>,
    /// Identities consumed by successful reservations.
    sold: HashSet<ItemId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// List an item for sale.
    ///
    /// Rejects an identity that is already listed or was already sold.
    pub fn add(&self, item: Item) -> MarketResult<()> {
        let mut inner = self.inner.write().expect("inventory lock poisoned");
        if inner.sold.contains(&item.id()) || inner.items.iter().any(|it| it.id() == item.id()) {
            return Err(MarketError::invalid_argument(format!(
                "item {} is already listed or sold",
                item.id()
            )));
        }
        inner.items.push(item);
        Ok(())
    }

    /// Atomically remove the item with identity `id`.
    ///
    /// Once removed, no concurrent reservation can observe the item. A
    /// missing or stale id fails with [`MarketError::NotFound`], and keeps
    /// failing the same way on every retry.
    pub fn reserve(&self, id: ItemId) -> MarketResult<Item> {
        self.reserve_with(id, |_| Ok(()))
    }

    /// Remove the item with identity `id` after `guard` approves it.
    ///
    /// The guard runs inside the critical section, before removal. The
    /// purchase path uses it to debit the buyer while the item is still
    /// pinned, so check-funds, debit and removal form one atomic unit. If
    /// the guard fails the item stays listed and nothing is mutated.
    ///
    /// The guard must not call back into this inventory.
    pub fn reserve_with<F>(&self, id: ItemId, guard: F) -> MarketResult<Item>
    where
        F: FnOnce(&Item) -> MarketResult<()>,
    {
        let mut inner = self.inner.write().expect("inventory lock poisoned");
        let position = inner
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(MarketError::NotFound)?;

        guard(&inner.items[position])?;

        let item = inner.items.remove(position);
        inner.sold.insert(id);
        Ok(item)
    }

    /// Snapshot of the current stock, in insertion order.
    ///
    /// Reads are read-committed, not snapshot-isolated: two consecutive
    /// calls may straddle a concurrent reservation.
    pub fn list(&self) -> Vec<Item> {
        self.inner
            .read()
            .expect("inventory lock poisoned")
            .items
            .clone()
    }

    /// Items priced at or above `min_price`, over a snapshot taken at call
    /// time. Same read-committed caveat as [`Inventory::list`].
    pub fn priced_at_least(&self, min_price: i64) -> impl Iterator<Item = Item> {
        self.list()
            .into_iter()
            .filter(move |item| item.price() >= min_price)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.inner
            .read()
            .expect("inventory lock poisoned")
            .items
            .iter()
            .any(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("inventory lock poisoned").items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

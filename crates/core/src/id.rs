//! Strongly-typed identifiers used across the domain.

use core::marker::PhantomData;
use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::MarketError;

/// Identifier of an item listed for sale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

/// Identifier of a buyer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuyerId(u64);

/// Identifier of a recorded contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(u64);

macro_rules! impl_id_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = MarketError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = u64::from_str(s.trim())
                    .map_err(|e| MarketError::invalid_argument(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_id_newtype!(ItemId, "ItemId");
impl_id_newtype!(BuyerId, "BuyerId");
impl_id_newtype!(ContractId, "ContractId");

/// Monotonic identifier source for one entity kind.
///
/// Each sequence is owned by whichever component mints that kind of identity
/// and is passed into constructors explicitly, so tests get isolated
/// sequences instead of sharing hidden process-wide state. Draws are unique
/// and strictly increasing for the lifetime of the sequence, including under
/// concurrent callers.
#[derive(Debug)]
pub struct IdSequence<T> {
    next: AtomicU64,
    _kind: PhantomData<fn() -> T>,
}

impl<T: From<u64>> IdSequence<T> {
    /// Sequence starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
            _kind: PhantomData,
        }
    }

    /// Draw the next identifier.
    pub fn next_id(&self) -> T {
        T::from(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl<T: From<u64>> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn sequence_is_monotonic_from_one() {
        let ids: IdSequence<ItemId> = IdSequence::new();
        assert_eq!(ids.next_id(), ItemId::from(1));
        assert_eq!(ids.next_id(), ItemId::from(2));
        assert_eq!(ids.next_id(), ItemId::from(3));
    }

    #[test]
    fn sequences_of_different_kinds_are_independent() {
        let items: IdSequence<ItemId> = IdSequence::new();
        let buyers: IdSequence<BuyerId> = IdSequence::new();
        items.next_id();
        items.next_id();
        assert_eq!(buyers.next_id(), BuyerId::from(1));
    }

    #[test]
    fn concurrent_draws_are_unique() {
        let ids: Arc<IdSequence<ContractId>> = Arc::new(IdSequence::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let ids = Arc::clone(&ids);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| ids.next_id().as_u64()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn parse_round_trips_through_display() {
        let id = ItemId::from(42);
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        let err = "tesla".parse::<ItemId>().unwrap_err();
        match err {
            MarketError::InvalidArgument(_) => {}
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }
}

//! `autolot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every other
//! crate: the error model and strongly-typed identifiers.

pub mod error;
pub mod id;

pub use error::{MarketError, MarketResult};
pub use id::{BuyerId, ContractId, IdSequence, ItemId};

//! `autolot-market` — the purchase coordinator.

pub mod marketplace;

pub use marketplace::Marketplace;

//! `autolot-contracts` — contracts and the sales ledger.

pub mod contract;
pub mod ledger;

pub use contract::Contract;
pub use ledger::ContractLedger;

//! `autolot-accounts` — buyers and their funds.

pub mod account;
pub mod buyer;

pub use account::Account;
pub use buyer::Buyer;

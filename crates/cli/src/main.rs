//! Demo binary: seed the lot, run one buyer panel per buyer, print the
//! final state.
//!
//! An optional argv[1] names a JSON stock file (`[{"make", "model",
//! "price"}, ...]`); without it the built-in demo stock is used.

mod panel;

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use autolot_accounts::Buyer;
use autolot_core::{BuyerId, IdSequence, ItemId};
use autolot_inventory::Item;
use autolot_market::Marketplace;

/// One entry of a JSON stock file.
#[derive(Debug, Deserialize)]
struct StockEntry {
    make: String,
    model: String,
    price: i64,
}

fn main() -> anyhow::Result<()> {
    autolot_observability::init();

    let market = Arc::new(Marketplace::new());
    let item_ids: IdSequence<ItemId> = IdSequence::new();

    match std::env::args().nth(1) {
        Some(path) => load_stock(&market, &item_ids, &path)?,
        None => seed_demo_stock(&market, &item_ids)?,
    }

    let buyer_ids: IdSequence<BuyerId> = IdSequence::new();
    let buyers = [
        Arc::new(Buyer::new(&buyer_ids, "Alexander", 2_500_000)?),
        Arc::new(Buyer::new(&buyer_ids, "Maria", 3_500_000)?),
        Arc::new(Buyer::new(&buyer_ids, "Ivan", 500_000)?),
    ];

    for buyer in &buyers {
        panel::run(&market, buyer)?;
    }

    println!("\nFinal state of the lot:");
    let remaining = market.inventory().list();
    if remaining.is_empty() {
        println!("  (sold out)");
    }
    for item in &remaining {
        println!("  [{}] {}", item.id(), item);
    }
    for contract in market.ledger().contracts() {
        println!("  {contract}");
    }
    tracing::debug!(stock = %serde_json::to_string(&remaining)?, "final stock");

    Ok(())
}

fn seed_demo_stock(market: &Marketplace, ids: &IdSequence<ItemId>) -> anyhow::Result<()> {
    for (make, model, price) in [
        ("Tesla", "Model S", 3_000_000),
        ("Ford", "Fiesta", 500_000),
    ] {
        market.inventory().add(Item::new(ids, make, model, price)?)?;
    }
    Ok(())
}

fn load_stock(
    market: &Marketplace,
    ids: &IdSequence<ItemId>,
    path: &str,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading stock file {path}"))?;
    let entries: Vec<StockEntry> =
        serde_json::from_str(&raw).with_context(|| format!("parsing stock file {path}"))?;

    for entry in entries {
        let item = Item::new(ids, entry.make, entry.model, entry.price)?;
        market.inventory().add(item)?;
    }
    tracing::info!(count = market.inventory().len(), "loaded stock from {path}");
    Ok(())
}

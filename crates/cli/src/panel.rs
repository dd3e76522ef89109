//! Interactive buyer panel.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use autolot_accounts::Buyer;
use autolot_core::{ItemId, MarketError};
use autolot_market::Marketplace;

/// Run one interactive session for `buyer`: list the stock, read a
/// selection by item id, attempt the purchase, report the outcome.
///
/// Returns after one completed purchase attempt (successful or not) or
/// when the buyer skips; unparsable input re-prompts. Business failures
/// are recoverable and printed; only I/O errors propagate.
pub fn run(market: &Arc<Marketplace>, buyer: &Arc<Buyer>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        let stock = market.inventory().list();
        if stock.is_empty() {
            println!("\nNo cars left for sale.");
            return Ok(());
        }

        println!("\nAvailable cars:");
        for item in &stock {
            println!("  [{}] {}", item.id(), item);
        }
        println!("{}", buyer);
        print!("{}, enter the id of the car you want to buy (q to skip): ", buyer.name());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // stdin closed, treat as a skip
            return Ok(());
        }
        let token = line.trim();
        if token.is_empty() || token == "q" || token == "-1" {
            return Ok(());
        }

        let item_id: ItemId = match token.parse() {
            Ok(id) => id,
            Err(_) => {
                println!("Please enter a valid car id.");
                continue;
            }
        };

        match market.purchase(item_id, buyer) {
            Ok(contract) => {
                tracing::info!(buyer = %buyer.name(), item = %contract.item(), "transaction successful");
                println!("{contract}");
                return Ok(());
            }
            Err(err @ MarketError::InsufficientFunds { .. }) => {
                tracing::warn!(buyer = %buyer.name(), %err, "transaction failed");
                println!("You do not have enough funds to purchase this car.");
                return Ok(());
            }
            Err(MarketError::NotFound) => {
                tracing::warn!(buyer = %buyer.name(), "transaction failed: car no longer available");
                println!("That car is no longer available.");
                return Ok(());
            }
            Err(MarketError::InvalidArgument(msg)) => {
                println!("{msg}");
            }
        }
    }
}

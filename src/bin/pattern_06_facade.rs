//! Pattern 6: Facade
//! One checkout entry point orchestrating four subsystems.
//!
//! Run with: cargo run --bin pattern_06_facade

use colored::Colorize;
use design_patterns::facade::{CheckoutGateway, InventoryService, Order};

fn main() {
    let mut gateway = CheckoutGateway::new(InventoryService::with_stock(&[("Iron Box", 1)]));

    println!("{}", "=== Successful checkout ===".bold());
    let mut order = Order::new("order_id_123", "Iron Box", "ElectricAppliances", 100.0);
    match gateway.place_order(&mut order) {
        Ok(receipt) => {
            println!("order state: {:?}", order.state);
            println!("payment:     {}", receipt.payment.green());
            println!("notify:      {}", receipt.notification.green());
        }
        Err(err) => println!("{}", format!("{err}").red()),
    }

    println!("\n{}", "=== Second unit is out of stock ===".bold());
    let mut repeat = Order::new("order_id_124", "Iron Box", "ElectricAppliances", 100.0);
    if let Err(err) = gateway.place_order(&mut repeat) {
        println!("{}", format!("{err}").red());
        println!("order state stays {:?}", repeat.state);
    }
}

//! Pattern 7: Visitor
//! Invoicing and shipping costs computed over a mixed product list.
//!
//! Run with: cargo run --bin pattern_07_visitor

use colored::Colorize;
use design_patterns::visitor::{
    DigitalProduct, InvoiceVisitor, PhysicalProduct, Product, ShippingCostVisitor,
};

fn main() {
    let products: Vec<Box<dyn Product>> = vec![
        Box::new(DigitalProduct::new("Java Tutorial", 29.99, "java.pdf")),
        Box::new(PhysicalProduct::new("MacBook", 1999.99, 2.5)),
        Box::new(PhysicalProduct::new("iPhone", 999.99, 0.3)),
    ];

    let mut invoice = InvoiceVisitor::default();
    let mut shipping = ShippingCostVisitor::default();

    for product in &products {
        product.accept(&mut invoice);
        product.accept(&mut shipping);
    }

    println!("{}", "=== Totals ===".bold());
    println!("invoice total:  {}", format!("${:.2}", invoice.total()).green());
    println!("shipping total: {}", format!("${:.2}", shipping.total()).green());
    println!("\nA new per-type operation is a new visitor; the products never change.");
}

//! Pattern 9: Parking Lot — Singleton + Strategy + Factory combined.
//! Park through the global system, swap the pricing strategy, unpark.
//!
//! Run with: cargo run --bin pattern_09_parking_lot

use std::time::{Duration, SystemTime};

use colored::Colorize;
use design_patterns::parking_lot::{
    DynamicCharge, ParkingFloor, ParkingSlot, ParkingSystem, SlotType,
};

fn main() {
    let system = ParkingSystem::global();

    {
        let mut lot = system.lock().unwrap();
        let mut floor = ParkingFloor::new();
        floor.add_slot(ParkingSlot::new(SlotType::Medium));
        floor.add_slot(ParkingSlot::new(SlotType::Large));
        lot.add_floor(floor);
    }

    // The demo backdates the ticket two hours so the bill is non-zero.
    let issued_at = SystemTime::now() - Duration::from_secs(2 * 3600);

    println!("{}", "=== Fixed pricing (default strategy) ===".bold());
    let ticket = system
        .lock()
        .unwrap()
        .park_vehicle(SlotType::Medium, "AP27PEK9409", issued_at)
        .expect("the medium slot is free");
    println!("{}", format!("{ticket}").cyan());

    let charge = system
        .lock()
        .unwrap()
        .unpark_vehicle(&ticket, SystemTime::now())
        .expect("ticket is genuine");
    println!("charged: {}", format!("{charge:.2}").green());

    println!("\n{}", "=== Dynamic pricing ===".bold());
    {
        let mut lot = system.lock().unwrap();
        lot.set_strategy(Box::new(DynamicCharge::default()));
    }
    let ticket = system
        .lock()
        .unwrap()
        .park_vehicle(SlotType::Large, "TS27PEK9409", issued_at)
        .expect("the large slot is free");
    let charge = system
        .lock()
        .unwrap()
        .unpark_vehicle(&ticket, SystemTime::now())
        .expect("ticket is genuine");
    println!("charged: {}", format!("{charge:.2}").green());

    println!("\n{}", "=== A full lot refuses the vehicle ===".bold());
    let mut lot = system.lock().unwrap();
    lot.park_vehicle(SlotType::Medium, "KA05AB1234", SystemTime::now())
        .expect("slot was released above");
    if let Err(err) = lot.park_vehicle(SlotType::Medium, "KA05AB5678", SystemTime::now()) {
        println!("{}", format!("{err}").red());
    }
}

//! Object relationships: composition, aggregation, association, dependency.
//!
//! Run with: cargo run --bin pattern_10_relationships

use colored::Colorize;
use design_patterns::relationships::{associate, Book, Doctor, House, Invoice, Library, Patient};

fn main() {
    println!("{}", "=== Composition: House owns its Rooms ===".bold());
    let mut house = House::new("123 Main Street");
    house.add_room("study", 80);
    println!(
        "{} has {} rooms, {} sq ft total",
        house.address,
        house.room_count(),
        house.total_area()
    );
    drop(house);
    println!("{}", "house demolished; every room went with it".yellow());

    println!("\n{}", "=== Aggregation: Libraries share Books ===".bold());
    let book = Book::new("1984", "George Orwell");
    let mut central = Library::new("Central");
    let mut branch = Library::new("Branch");
    central.acquire(book.clone());
    branch.acquire(book.clone());
    println!("central: {} book(s), branch: {} book(s)", central.book_count(), branch.book_count());
    drop(central);
    println!("{}", format!("central closed; '{}' still exists", book.title).yellow());
    branch.remove("1984");

    println!("\n{}", "=== Association: equal partners by name ===".bold());
    let mut doctor = Doctor::new("Smith");
    let mut patient = Patient::new("Alice");
    associate(&mut doctor, &mut patient);
    println!("Dr. {} treats {:?}", doctor.name, doctor.patients());
    println!("{} consults {:?}", patient.name, patient.doctors());

    println!("\n{}", "=== Dependency: a call, not a field ===".bold());
    let invoice = Invoice { amount: 100.0 };
    println!("invoice total with 8.5% tax: {}", format!("{:.2}", invoice.total_with_tax(8.5)).green());
}

//! Pattern 1: Decorator
//! Wrapping a file repository with encryption and compression layers.
//!
//! Run with: cargo run --bin pattern_01_decorator

use colored::Colorize;
use design_patterns::decorator::{Compressor, Encrypter, FileRepository, FileStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("decorator-demo");
    std::fs::create_dir_all(&dir)?;

    println!("{}", "=== Plain FileStore ===".bold());
    let store = FileStore::new(&dir);
    store.write_file("plain.txt", "Hello World")?;
    println!("read back: {}", store.read_file("plain.txt")?.green());

    println!("\n{}", "=== Encrypter around FileStore ===".bold());
    let encrypted: Box<dyn FileRepository> = Box::new(Encrypter::new(Box::new(FileStore::new(&dir))));
    encrypted.write_file("secret.txt", "Hello World")?;
    println!(
        "on disk:   {}",
        FileStore::new(&dir).read_file("secret.txt")?.yellow()
    );
    println!("read back: {}", encrypted.read_file("secret.txt")?.green());

    println!("\n{}", "=== Compressor around Encrypter ===".bold());
    let stacked = Compressor::new(encrypted);
    stacked.write_file("both.txt", "Hello World")?;
    println!(
        "on disk:   {}",
        FileStore::new(&dir).read_file("both.txt")?.yellow()
    );
    println!("read back: {}", stacked.read_file("both.txt")?.green());

    println!("\nEvery layer speaks FileRepository, so the stack order is the caller's choice.");
    Ok(())
}

//! Pattern 8: Builder
//! Chainable construction of an HTTP request, validated at build().
//!
//! Run with: cargo run --bin pattern_08_builder

use colored::Colorize;
use design_patterns::builder::HttpRequest;
use serde_json::json;

fn main() {
    println!("{}", "=== Chained build ===".bold());
    let request = HttpRequest::builder()
        .url("http://localhost:8000/users")
        .method("POST")
        .header("Content-Type", "application/json")
        .param("id", "2")
        .body(json!({ "name": "Vamsi" }).to_string())
        .build()
        .expect("request is fully specified");
    println!("{}", format!("{request}").green());

    println!("\n{}", "=== Defaults ===".bold());
    let minimal = HttpRequest::builder()
        .url("http://localhost:8000/users")
        .build()
        .expect("url alone is enough");
    println!("{}", format!("{minimal}").green());

    println!("\n{}", "=== Invalid builds are errors, not requests ===".bold());
    if let Err(err) = HttpRequest::builder().method("GET").build() {
        println!("{}", format!("{err}").red());
    }
    if let Err(err) = HttpRequest::builder()
        .url("http://localhost:8000")
        .method("FETCH")
        .build()
    {
        println!("{}", format!("{err}").red());
    }
}

//! Pattern 4: Observer
//! A channel notifying its subscribers on every upload.
//!
//! Run with: cargo run --bin pattern_04_observer

use colored::Colorize;
use design_patterns::observer::{Channel, Subscriber, YoutubeUser};

fn main() {
    let mut channel = Channel::new("PrasadTech");
    let vamsi = YoutubeUser::new("Vamsi");
    let krishna = YoutubeUser::new("Krishna");

    channel.subscribe(vamsi.clone());
    channel.subscribe(krishna.clone());

    println!("{}", "=== Upload with two subscribers ===".bold());
    channel.upload("Best mobiles under 10000");

    println!("{}", "=== Krishna unsubscribes ===".bold());
    channel.unsubscribe("Krishna");
    channel.upload("Best laptop deals amazon big billion days");

    println!("\n{}", "=== Delivery log ===".bold());
    for user in [&vamsi, &krishna] {
        println!("{}:", user.id().cyan());
        for message in user.received() {
            println!("  {}", message.green());
        }
    }
}

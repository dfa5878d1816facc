//! Pattern 2: State
//! A task delegating every operation to its current lifecycle state.
//!
//! Run with: cargo run --bin pattern_02_state

use colored::Colorize;
use design_patterns::state::Task;

fn report(task: &Task) {
    println!(
        "task '{}' (assignee: {}) is {}",
        task.name,
        task.assignee,
        task.status().cyan()
    );
}

fn main() {
    println!("{}", "=== Legal lifecycle ===".bold());
    let mut task = Task::new("Fix login bug", "vamsi");
    report(&task);

    task.start().unwrap();
    report(&task);

    task.finish().unwrap();
    report(&task);

    task.reopen().unwrap();
    report(&task);

    println!("\n{}", "=== Rejected transitions ===".bold());
    let mut fresh = Task::new("Write docs", "krishna");
    if let Err(err) = fresh.finish() {
        println!("{}", format!("{err}").red());
    }
    if let Err(err) = fresh.reopen() {
        println!("{}", format!("{err}").red());
    }

    fresh.start().unwrap();
    if let Err(err) = fresh.start() {
        println!("{}", format!("{err}").red());
    }
}

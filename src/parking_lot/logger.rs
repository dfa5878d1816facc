//! The other Singleton of the lesson: one console logger shared everywhere.

use colored::Colorize;
use lazy_static::lazy_static;

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn warn(&self, message: &str);
}

pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn global() -> &'static ConsoleLogger {
        lazy_static! {
            static ref CONSOLE: ConsoleLogger = ConsoleLogger;
        }
        &CONSOLE
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{} {}", "[parking]".green(), message);
    }

    fn warn(&self, message: &str) {
        println!("{} {}", "[parking]".yellow(), message);
    }
}

//! # Classic Design Patterns in Rust
//!
//! A teaching corpus of the object-oriented design patterns, each as a
//! minimal, self-contained module with a runnable console demo:
//!
//! - **Decorator** — wrap a component to add behavior while preserving its
//!   interface ([`decorator`])
//! - **State** — delegate behavior to an interchangeable object representing
//!   the current lifecycle stage ([`state`])
//! - **Abstract Factory** — produce families of related objects without
//!   naming concrete types ([`abstract_factory`])
//! - **Observer** — one-to-many notification between a subject and its
//!   listeners ([`observer`])
//! - **Adapter** — translate one interface to another so incompatible
//!   components interoperate ([`adapter`])
//! - **Facade** — a single entry point hiding orchestration of several
//!   subsystems ([`facade`])
//! - **Visitor** — externalize per-type operations via double dispatch
//!   ([`visitor`])
//! - **Builder** — stepwise, chainable construction of a complex object
//!   ([`builder`])
//!
//! The [`parking_lot`] module combines Singleton, Strategy, and Factory in a
//! small slot-allocation simulation, and [`relationships`] translates the
//! UML relationship vocabulary (composition, aggregation, association,
//! dependency) into Rust ownership vocabulary.
//!
//! Run demos with: `cargo run --bin pattern_01_decorator` (etc.)

pub mod abstract_factory;
pub mod adapter;
pub mod builder;
pub mod decorator;
pub mod facade;
pub mod observer;
pub mod parking_lot;
pub mod relationships;
pub mod state;
pub mod visitor;

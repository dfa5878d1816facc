//! # Parking Lot (Singleton + Strategy + Factory)
//!
//! A single-process, in-memory slot-allocation simulation. A
//! [`ParkingSystem`](system::ParkingSystem) owns floors of typed slots;
//! parking a vehicle is a linear scan for the first empty slot of the
//! requested type, and unparking prices the stay through an interchangeable
//! [`ChargeStrategy`](charge::ChargeStrategy). The system and the console
//! logger are the Singletons of the lesson: one global instance each,
//! reachable from anywhere.

pub mod charge;
pub mod floor;
pub mod logger;
pub mod slot;
pub mod system;
pub mod ticket;

use thiserror::Error;

pub use charge::{ChargeStrategy, DynamicCharge, FixedCharge};
pub use floor::ParkingFloor;
pub use logger::{ConsoleLogger, Logger};
pub use slot::{ParkingSlot, SlotState, SlotType};
pub use system::ParkingSystem;
pub use ticket::{Ticket, TicketRegistry};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParkingError {
    #[error("no {slot_type} slot available")]
    NoSlotAvailable { slot_type: SlotType },

    #[error("invalid ticket: no floor holds slot {slot_id}")]
    InvalidTicket { slot_id: uuid::Uuid },
}

use std::time::SystemTime;

use lazy_static::lazy_static;
use std::sync::Mutex;
use uuid::Uuid;

use super::charge::{ChargeStrategy, FixedCharge};
use super::floor::ParkingFloor;
use super::logger::{ConsoleLogger, Logger};
use super::slot::SlotType;
use super::ticket::{Ticket, TicketRegistry};
use super::ParkingError;

lazy_static! {
    static ref GLOBAL_SYSTEM: Mutex<ParkingSystem> = Mutex::new(ParkingSystem::new());
}

/// The whole lot: floors, ticketing, and the current pricing strategy.
pub struct ParkingSystem {
    id: Uuid,
    floors: Vec<ParkingFloor>,
    strategy: Box<dyn ChargeStrategy>,
    registry: TicketRegistry,
}

impl Default for ParkingSystem {
    fn default() -> Self {
        ParkingSystem::new()
    }
}

impl ParkingSystem {
    /// A fresh, independent system. Tests use this; the demo goes through
    /// [`ParkingSystem::global`].
    pub fn new() -> Self {
        ParkingSystem {
            id: Uuid::new_v4(),
            floors: Vec::new(),
            strategy: Box::new(FixedCharge::default()),
            registry: TicketRegistry::new(),
        }
    }

    /// The Singleton: one shared system for the whole process.
    pub fn global() -> &'static Mutex<ParkingSystem> {
        &GLOBAL_SYSTEM
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn add_floor(&mut self, floor: ParkingFloor) {
        self.floors.push(floor);
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ChargeStrategy>) {
        self.strategy = strategy;
    }

    pub fn tickets_issued(&self) -> usize {
        self.registry.issued_count()
    }

    /// Floors are tried in insertion order; the first one with a free slot
    /// of the requested type wins.
    pub fn park_vehicle(
        &mut self,
        slot_type: SlotType,
        vehicle_number: &str,
        issued_at: SystemTime,
    ) -> Result<Ticket, ParkingError> {
        for floor in &mut self.floors {
            if let Some(slot_id) = floor.book_slot(slot_type) {
                let ticket = self
                    .registry
                    .issue(vehicle_number, slot_id, slot_type, issued_at);
                ConsoleLogger::global().log(&format!("issued {}", ticket));
                return Ok(ticket);
            }
        }
        ConsoleLogger::global().warn(&format!("no {} slot available", slot_type));
        Err(ParkingError::NoSlotAvailable { slot_type })
    }

    /// Frees the ticket's slot and prices the stay with the current
    /// strategy. The slot is immediately bookable again.
    pub fn unpark_vehicle(&mut self, ticket: &Ticket, now: SystemTime) -> Result<f64, ParkingError> {
        for floor in &mut self.floors {
            if floor.release_slot(ticket.slot_id) {
                let charge = self.strategy.calculate_charge(ticket, now);
                ConsoleLogger::global().log(&format!(
                    "released slot {} for vehicle {}",
                    ticket.slot_id, ticket.vehicle_number
                ));
                return Ok(charge);
            }
        }
        Err(ParkingError::InvalidTicket {
            slot_id: ticket.slot_id,
        })
    }
}

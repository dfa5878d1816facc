use std::collections::HashMap;
use std::fmt;
use std::time::SystemTime;

use uuid::Uuid;

use super::slot::SlotType;

/// Issued when a vehicle parks; everything pricing needs later.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: Uuid,
    pub vehicle_number: String,
    pub slot_id: Uuid,
    pub slot_type: SlotType,
    pub issued_at: SystemTime,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticket {} for vehicle {} in {} slot {}",
            self.id, self.vehicle_number, self.slot_type, self.slot_id
        )
    }
}

/// Issues tickets and remembers every ticket it ever issued.
#[derive(Default)]
pub struct TicketRegistry {
    tickets: HashMap<Uuid, Ticket>,
}

impl TicketRegistry {
    pub fn new() -> Self {
        TicketRegistry::default()
    }

    pub fn issue(
        &mut self,
        vehicle_number: &str,
        slot_id: Uuid,
        slot_type: SlotType,
        issued_at: SystemTime,
    ) -> Ticket {
        let ticket = Ticket {
            id: Uuid::new_v4(),
            vehicle_number: vehicle_number.to_string(),
            slot_id,
            slot_type,
            issued_at,
        };
        self.tickets.insert(ticket.id, ticket.clone());
        ticket
    }

    pub fn get(&self, ticket_id: Uuid) -> Option<&Ticket> {
        self.tickets.get(&ticket_id)
    }

    pub fn issued_count(&self) -> usize {
        self.tickets.len()
    }
}

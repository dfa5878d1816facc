use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    Small,
    Medium,
    Large,
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotType::Small => "small",
            SlotType::Medium => "medium",
            SlotType::Large => "large",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Booked,
}

#[derive(Debug, Clone)]
pub struct ParkingSlot {
    id: Uuid,
    slot_type: SlotType,
    state: SlotState,
}

impl ParkingSlot {
    /// New slots start empty.
    pub fn new(slot_type: SlotType) -> Self {
        ParkingSlot {
            id: Uuid::new_v4(),
            slot_type,
            state: SlotState::Empty,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn slot_type(&self) -> SlotType {
        self.slot_type
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn set_state(&mut self, state: SlotState) {
        self.state = state;
    }

    pub fn is_empty(&self) -> bool {
        self.state == SlotState::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slots_are_empty() {
        let slot = ParkingSlot::new(SlotType::Medium);
        assert_eq!(slot.state(), SlotState::Empty);
        assert_eq!(slot.slot_type(), SlotType::Medium);
        assert!(slot.is_empty());
    }

    #[test]
    fn booking_flips_the_state() {
        let mut slot = ParkingSlot::new(SlotType::Small);
        slot.set_state(SlotState::Booked);
        assert!(!slot.is_empty());
    }

    #[test]
    fn slot_ids_are_unique() {
        let a = ParkingSlot::new(SlotType::Large);
        let b = ParkingSlot::new(SlotType::Large);
        assert_ne!(a.id(), b.id());
    }
}

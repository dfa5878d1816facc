use uuid::Uuid;

use super::slot::{ParkingSlot, SlotState, SlotType};

/// One floor of slots. Booking is a linear scan — the lot is small and
/// single-threaded, this is the whole allocator.
pub struct ParkingFloor {
    id: Uuid,
    slots: Vec<ParkingSlot>,
}

impl Default for ParkingFloor {
    fn default() -> Self {
        ParkingFloor::new()
    }
}

impl ParkingFloor {
    pub fn new() -> Self {
        ParkingFloor {
            id: Uuid::new_v4(),
            slots: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn add_slot(&mut self, slot: ParkingSlot) {
        self.slots.push(slot);
    }

    /// Books the first empty slot of the requested type and returns its id,
    /// or `None` when the floor has nothing free for that type.
    pub fn book_slot(&mut self, slot_type: SlotType) -> Option<Uuid> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.slot_type() == slot_type && slot.is_empty())?;
        slot.set_state(SlotState::Booked);
        Some(slot.id())
    }

    /// `false` when this floor does not hold the slot.
    pub fn release_slot(&mut self, slot_id: Uuid) -> bool {
        match self.slots.iter_mut().find(|slot| slot.id() == slot_id) {
            Some(slot) => {
                slot.set_state(SlotState::Empty);
                true
            }
            None => false,
        }
    }

    pub fn empty_count(&self, slot_type: SlotType) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.slot_type() == slot_type && slot.is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_with(slot_types: &[SlotType]) -> ParkingFloor {
        let mut floor = ParkingFloor::new();
        for &slot_type in slot_types {
            floor.add_slot(ParkingSlot::new(slot_type));
        }
        floor
    }

    #[test]
    fn booking_takes_the_first_empty_slot_of_the_type() {
        let mut floor = floor_with(&[SlotType::Small, SlotType::Medium, SlotType::Medium]);

        assert!(floor.book_slot(SlotType::Medium).is_some());
        assert_eq!(floor.empty_count(SlotType::Medium), 1);
        assert_eq!(floor.empty_count(SlotType::Small), 1);
    }

    #[test]
    fn booking_an_exhausted_type_returns_none() {
        let mut floor = floor_with(&[SlotType::Medium]);

        floor.book_slot(SlotType::Medium).unwrap();
        assert!(floor.book_slot(SlotType::Medium).is_none());
        assert!(floor.book_slot(SlotType::Large).is_none());
    }

    #[test]
    fn released_slots_are_bookable_again() {
        let mut floor = floor_with(&[SlotType::Large]);

        let slot_id = floor.book_slot(SlotType::Large).unwrap();
        assert!(floor.release_slot(slot_id));
        assert_eq!(floor.book_slot(SlotType::Large), Some(slot_id));
    }

    #[test]
    fn releasing_an_unknown_slot_is_refused() {
        let mut floor = floor_with(&[SlotType::Small]);
        assert!(!floor.release_slot(Uuid::new_v4()));
    }
}

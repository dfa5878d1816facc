//! Pricing strategies. The system holds one behind a trait object and the
//! caller can swap it at runtime without touching booking code.

use std::collections::HashMap;
use std::time::SystemTime;

use super::slot::SlotType;
use super::ticket::Ticket;

/// Interchangeable pricing algorithm. `Send + Sync` so a strategy can live
/// inside the global system.
pub trait ChargeStrategy: Send + Sync {
    fn calculate_charge(&self, ticket: &Ticket, now: SystemTime) -> f64;
}

/// Hours between issue and now. Clock skew (now before issue) charges 0.
fn elapsed_hours(ticket: &Ticket, now: SystemTime) -> f64 {
    now.duration_since(ticket.issued_at)
        .map(|d| d.as_secs_f64() / 3600.0)
        .unwrap_or(0.0)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One hourly rate for every slot type.
pub struct FixedCharge {
    hourly_rate: f64,
}

impl FixedCharge {
    pub fn new(hourly_rate: f64) -> Self {
        FixedCharge { hourly_rate }
    }
}

impl Default for FixedCharge {
    fn default() -> Self {
        FixedCharge::new(20.0)
    }
}

impl ChargeStrategy for FixedCharge {
    fn calculate_charge(&self, ticket: &Ticket, now: SystemTime) -> f64 {
        round_cents(elapsed_hours(ticket, now) * self.hourly_rate)
    }
}

/// Hourly rate depends on the slot type.
pub struct DynamicCharge {
    hourly_rates: HashMap<SlotType, f64>,
}

impl Default for DynamicCharge {
    fn default() -> Self {
        let mut hourly_rates = HashMap::new();
        hourly_rates.insert(SlotType::Small, 20.0);
        hourly_rates.insert(SlotType::Medium, 30.0);
        hourly_rates.insert(SlotType::Large, 40.0);
        DynamicCharge { hourly_rates }
    }
}

impl DynamicCharge {
    pub fn new() -> Self {
        DynamicCharge::default()
    }

    pub fn with_rate(mut self, slot_type: SlotType, hourly_rate: f64) -> Self {
        self.hourly_rates.insert(slot_type, hourly_rate);
        self
    }
}

impl ChargeStrategy for DynamicCharge {
    fn calculate_charge(&self, ticket: &Ticket, now: SystemTime) -> f64 {
        let rate = self
            .hourly_rates
            .get(&ticket.slot_type)
            .copied()
            .unwrap_or(0.0);
        round_cents(elapsed_hours(ticket, now) * rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};
    use uuid::Uuid;

    fn ticket_at(slot_type: SlotType, issued_at: SystemTime) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            vehicle_number: "AP27PEK9409".to_string(),
            slot_id: Uuid::new_v4(),
            slot_type,
            issued_at,
        }
    }

    #[test]
    fn fixed_charge_bills_by_the_hour() {
        let ticket = ticket_at(SlotType::Medium, UNIX_EPOCH);
        let now = UNIX_EPOCH + Duration::from_secs(2 * 3600);
        assert_eq!(FixedCharge::default().calculate_charge(&ticket, now), 40.0);
    }

    #[test]
    fn fixed_charge_rounds_fractional_hours_to_cents() {
        let ticket = ticket_at(SlotType::Small, UNIX_EPOCH);
        let now = UNIX_EPOCH + Duration::from_secs(90 * 60); // 1.5 h at 20/h
        assert_eq!(FixedCharge::default().calculate_charge(&ticket, now), 30.0);

        let now = UNIX_EPOCH + Duration::from_secs(100); // 0.02777.. h
        assert_eq!(FixedCharge::default().calculate_charge(&ticket, now), 0.56);
    }

    #[test]
    fn dynamic_charge_rates_depend_on_slot_type() {
        let strategy = DynamicCharge::default();
        let now = UNIX_EPOCH + Duration::from_secs(3600);

        let small = ticket_at(SlotType::Small, UNIX_EPOCH);
        let medium = ticket_at(SlotType::Medium, UNIX_EPOCH);
        let large = ticket_at(SlotType::Large, UNIX_EPOCH);

        assert_eq!(strategy.calculate_charge(&small, now), 20.0);
        assert_eq!(strategy.calculate_charge(&medium, now), 30.0);
        assert_eq!(strategy.calculate_charge(&large, now), 40.0);
    }

    #[test]
    fn clock_skew_charges_nothing() {
        let ticket = ticket_at(SlotType::Large, UNIX_EPOCH + Duration::from_secs(3600));
        assert_eq!(
            DynamicCharge::default().calculate_charge(&ticket, UNIX_EPOCH),
            0.0
        );
    }

    #[test]
    fn custom_rate_overrides_the_default() {
        let strategy = DynamicCharge::new().with_rate(SlotType::Small, 5.0);
        let ticket = ticket_at(SlotType::Small, UNIX_EPOCH);
        let now = UNIX_EPOCH + Duration::from_secs(3600);
        assert_eq!(strategy.calculate_charge(&ticket, now), 5.0);
    }
}

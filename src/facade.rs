//! # Facade
//!
//! Checkout touches four subsystems: inventory, payment, order placement,
//! and notification. [`CheckoutGateway`] is the single entry point that
//! hides the orchestration; callers hand it an [`Order`] and get a
//! [`CheckoutReceipt`] back, never talking to the subsystems directly.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("item '{item}' is out of stock")]
    OutOfStock { item: String },

    #[error("cannot charge a non-positive amount: {amount}")]
    InvalidAmount { amount: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Pending,
    Placed,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub state: OrderState,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Order {
            order_id: order_id.into(),
            name: name.into(),
            category: category.into(),
            price,
            state: OrderState::Pending,
        }
    }
}

// --- Subsystems ---

pub struct InventoryService {
    stock: HashMap<String, u32>,
}

impl InventoryService {
    pub fn with_stock(stock: &[(&str, u32)]) -> Self {
        InventoryService {
            stock: stock
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
        }
    }

    pub fn reserve_item(&mut self, order: &Order) -> Result<(), CheckoutError> {
        match self.stock.get_mut(&order.name) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(CheckoutError::OutOfStock {
                item: order.name.clone(),
            }),
        }
    }
}

pub trait PaymentService {
    fn pay_amount(&self, amount: f64) -> Result<String, CheckoutError>;
}

pub struct CreditCardPaymentService {
    card: String,
}

impl CreditCardPaymentService {
    pub fn new(card: impl Into<String>) -> Self {
        CreditCardPaymentService { card: card.into() }
    }
}

impl PaymentService for CreditCardPaymentService {
    fn pay_amount(&self, amount: f64) -> Result<String, CheckoutError> {
        if amount <= 0.0 {
            return Err(CheckoutError::InvalidAmount { amount });
        }
        Ok(format!("charged {:.2} to card ending {}", amount, self.card))
    }
}

#[derive(Default)]
pub struct OrderService;

impl OrderService {
    pub fn place_order(&self, order: &mut Order) {
        order.state = OrderState::Placed;
    }
}

pub trait NotificationService {
    fn send_notification(&self, message: &str) -> String;
}

#[derive(Default)]
pub struct EmailNotificationService;

impl NotificationService for EmailNotificationService {
    fn send_notification(&self, message: &str) -> String {
        format!("email sent: {message}")
    }
}

// --- Facade ---

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub order_id: String,
    pub payment: String,
    pub notification: String,
}

pub struct CheckoutGateway {
    inventory: InventoryService,
    payment: Box<dyn PaymentService>,
    orders: OrderService,
    notifications: Box<dyn NotificationService>,
}

impl CheckoutGateway {
    pub fn new(inventory: InventoryService) -> Self {
        CheckoutGateway {
            inventory,
            payment: Box::new(CreditCardPaymentService::new("1234")),
            orders: OrderService,
            notifications: Box::new(EmailNotificationService),
        }
    }

    /// Reserve, pay, place, notify. Any failure aborts the remaining steps.
    pub fn place_order(&mut self, order: &mut Order) -> Result<CheckoutReceipt, CheckoutError> {
        self.inventory.reserve_item(order)?;
        let payment = self.payment.pay_amount(order.price)?;
        self.orders.place_order(order);
        let notification = self.notifications.send_notification(&format!(
            "Order {} has been placed successfully.",
            order.order_id
        ));

        Ok(CheckoutReceipt {
            order_id: order.order_id.clone(),
            payment,
            notification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> CheckoutGateway {
        CheckoutGateway::new(InventoryService::with_stock(&[("Iron Box", 1)]))
    }

    #[test]
    fn successful_checkout_runs_all_four_steps() {
        let mut order = Order::new("order_id_123", "Iron Box", "ElectricAppliances", 100.0);
        let receipt = gateway().place_order(&mut order).unwrap();

        assert_eq!(order.state, OrderState::Placed);
        assert_eq!(receipt.order_id, "order_id_123");
        assert!(receipt.payment.contains("100.00"));
        assert!(receipt.notification.contains("order_id_123"));
    }

    #[test]
    fn out_of_stock_aborts_before_payment() {
        let mut gateway = gateway();
        let mut first = Order::new("o1", "Iron Box", "ElectricAppliances", 100.0);
        let mut second = Order::new("o2", "Iron Box", "ElectricAppliances", 100.0);

        gateway.place_order(&mut first).unwrap();
        let err = gateway.place_order(&mut second).unwrap_err();

        assert_eq!(
            err,
            CheckoutError::OutOfStock {
                item: "Iron Box".to_string()
            }
        );
        assert_eq!(second.state, OrderState::Pending);
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut order = Order::new("o3", "Iron Box", "ElectricAppliances", 0.0);
        let err = gateway().place_order(&mut order).unwrap_err();
        assert!(format!("{}", err).contains("non-positive"));
        assert_eq!(order.state, OrderState::Pending);
    }
}

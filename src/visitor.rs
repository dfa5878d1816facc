//! # Visitor
//!
//! Operations that vary by product type (invoicing, shipping) live in
//! visitors instead of on the products themselves. `accept` performs the
//! double dispatch: the product picks the `visit_*` method matching its own
//! concrete type, so adding a new operation means adding a visitor, not
//! touching every product.

pub struct DigitalProduct {
    pub name: String,
    pub price: f64,
    pub file_name: String,
}

impl DigitalProduct {
    pub fn new(name: impl Into<String>, price: f64, file_name: impl Into<String>) -> Self {
        DigitalProduct {
            name: name.into(),
            price,
            file_name: file_name.into(),
        }
    }
}

pub struct PhysicalProduct {
    pub name: String,
    pub price: f64,
    pub weight_kg: f64,
}

impl PhysicalProduct {
    pub fn new(name: impl Into<String>, price: f64, weight_kg: f64) -> Self {
        PhysicalProduct {
            name: name.into(),
            price,
            weight_kg,
        }
    }
}

pub trait ProductVisitor {
    fn visit_digital(&mut self, product: &DigitalProduct);
    fn visit_physical(&mut self, product: &PhysicalProduct);
}

pub trait Product {
    fn accept(&self, visitor: &mut dyn ProductVisitor);
}

impl Product for DigitalProduct {
    fn accept(&self, visitor: &mut dyn ProductVisitor) {
        visitor.visit_digital(self);
    }
}

impl Product for PhysicalProduct {
    fn accept(&self, visitor: &mut dyn ProductVisitor) {
        visitor.visit_physical(self);
    }
}

/// Sums the price of everything it visits.
#[derive(Default)]
pub struct InvoiceVisitor {
    total: f64,
}

impl InvoiceVisitor {
    pub fn total(&self) -> f64 {
        self.total
    }
}

impl ProductVisitor for InvoiceVisitor {
    fn visit_digital(&mut self, product: &DigitalProduct) {
        self.total += product.price;
    }

    fn visit_physical(&mut self, product: &PhysicalProduct) {
        self.total += product.price;
    }
}

/// 5.0 per kg for physical products; digital delivery ships free.
#[derive(Default)]
pub struct ShippingCostVisitor {
    total: f64,
}

pub const SHIPPING_RATE_PER_KG: f64 = 5.0;

impl ShippingCostVisitor {
    pub fn total(&self) -> f64 {
        self.total
    }
}

impl ProductVisitor for ShippingCostVisitor {
    fn visit_digital(&mut self, _product: &DigitalProduct) {}

    fn visit_physical(&mut self, product: &PhysicalProduct) {
        self.total += product.weight_kg * SHIPPING_RATE_PER_KG;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Box<dyn Product>> {
        vec![
            Box::new(DigitalProduct::new("Java Tutorial", 29.99, "java.pdf")),
            Box::new(PhysicalProduct::new("MacBook", 1999.99, 2.5)),
            Box::new(PhysicalProduct::new("iPhone", 999.99, 0.3)),
        ]
    }

    #[test]
    fn invoice_visitor_sums_every_price() {
        let mut invoice = InvoiceVisitor::default();
        for product in catalog() {
            product.accept(&mut invoice);
        }
        assert!((invoice.total() - 3029.97).abs() < 1e-9);
    }

    #[test]
    fn shipping_visitor_charges_physical_weight_only() {
        let mut shipping = ShippingCostVisitor::default();
        for product in catalog() {
            product.accept(&mut shipping);
        }
        // 2.5 kg + 0.3 kg at 5.0 per kg
        assert!((shipping.total() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn digital_products_ship_free() {
        let mut shipping = ShippingCostVisitor::default();
        DigitalProduct::new("E-book", 9.99, "book.epub").accept(&mut shipping);
        assert_eq!(shipping.total(), 0.0);
    }
}

use std::fmt;
use std::rc::Rc;

use chrono::{Days, NaiveDate};

use crate::domain::{Customer, Product};
use crate::error::OrderError;

/// Status every order starts in.
pub const DEFAULT_STATUS: &str = "New";

/// Days between the order date and the default delivery date.
pub const DELIVERY_LEAD_DAYS: u64 = 7;

/// Represents a customer order.
///
/// The customer and products are shared with the catalog and customer list; the order
/// never owns them. The total is derived from the products on every call.
#[derive(Debug, Clone)]
pub struct Order {
    id: u64,
    status: String,
    order_date: NaiveDate,
    delivery_date: NaiveDate,
    products: Vec<Rc<Product>>,
    customer: Rc<Customer>,
}

impl Order {
    /// Creates an empty order for `customer`.
    ///
    /// # Notes
    /// The order starts with status "New" and a delivery date one week after
    /// `order_date`.
    pub fn new(id: u64, customer: Rc<Customer>, order_date: NaiveDate) -> Self {
        let delivery_date = order_date
            .checked_add_days(Days::new(DELIVERY_LEAD_DAYS))
            .unwrap_or(order_date);
        Self {
            id,
            status: DEFAULT_STATUS.to_string(),
            order_date,
            delivery_date,
            products: Vec::new(),
            customer,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    #[allow(dead_code)]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[allow(dead_code)]
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    #[allow(dead_code)]
    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    #[allow(dead_code)]
    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    /// Moves the delivery date.
    ///
    /// # Errors
    /// Returns [`OrderError::DeliveryBeforeOrder`] if `delivery_date` precedes the order
    /// date; the order is left unchanged.
    #[allow(dead_code)]
    pub fn set_delivery_date(&mut self, delivery_date: NaiveDate) -> Result<(), OrderError> {
        if delivery_date < self.order_date {
            return Err(OrderError::DeliveryBeforeOrder {
                order_date: self.order_date,
                delivery_date,
            });
        }
        self.delivery_date = delivery_date;
        Ok(())
    }

    pub fn products(&self) -> &[Rc<Product>] {
        &self.products
    }

    pub fn add_product(&mut self, product: Rc<Product>) {
        self.products.push(product);
    }

    pub fn customer(&self) -> &Rc<Customer> {
        &self.customer
    }

    /// Sum of the prices of the products currently in the order.
    pub fn total(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} [{}] ordered {} delivery {} customer {} products [",
            self.id, self.status, self.order_date, self.delivery_date, self.customer
        )?;
        for (i, product) in self.products().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", product)?;
        }
        write!(f, "] total {:.2}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice() -> Rc<Customer> {
        Rc::new(Customer::new("Alice", 1))
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(7, alice(), date(2024, 2, 26));

        assert_eq!(order.id(), 7);
        assert_eq!(order.status(), "New");
        assert_eq!(order.order_date(), date(2024, 2, 26));
        assert_eq!(order.delivery_date(), date(2024, 3, 4));
        assert!(order.products().is_empty());
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn test_total_tracks_products() {
        let mut order = Order::new(1, alice(), date(2024, 1, 1));
        order.add_product(Rc::new(Product::new("Book", "Books", 25.0)));
        assert_eq!(order.total(), 25.0);

        order.add_product(Rc::new(Product::new("Phone", "Electronics", 1200.0)));
        order.add_product(Rc::new(Product::new("Book", "Books", 25.0)));
        assert_eq!(order.total(), 1250.0);

        let names: Vec<&str> = order.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Book", "Phone", "Book"]);
    }

    #[test]
    fn test_delivery_date_cannot_precede_order_date() {
        let mut order = Order::new(1, alice(), date(2024, 5, 10));

        let err = order.set_delivery_date(date(2024, 5, 9)).unwrap_err();
        assert_eq!(
            err,
            OrderError::DeliveryBeforeOrder {
                order_date: date(2024, 5, 10),
                delivery_date: date(2024, 5, 9),
            }
        );
        assert_eq!(order.delivery_date(), date(2024, 5, 17));

        order.set_delivery_date(date(2024, 5, 10)).unwrap();
        assert_eq!(order.delivery_date(), date(2024, 5, 10));
    }

    #[test]
    fn test_set_status() {
        let mut order = Order::new(1, alice(), date(2024, 1, 1));
        order.set_status("Shipped");
        assert_eq!(order.status(), "Shipped");
    }
}

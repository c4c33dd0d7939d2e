//! Read-only aggregate views over orders and the product catalog.
//!
//! Groupings keep groups in the order their key is first seen and members in
//! encounter order. Customers are grouped by identity (the same shared `Rc`), not by
//! value, so two distinct customers with equal fields stay apart.

use std::rc::Rc;

use tracing::{debug, instrument};

use crate::domain::{Customer, Order, Product};

/// Orders placed by one customer.
#[derive(Debug)]
pub struct CustomerOrders<'a> {
    pub customer: &'a Rc<Customer>,
    pub orders: Vec<&'a Order>,
}

/// Sum of all order totals for one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSpend<'a> {
    pub customer: &'a Rc<Customer>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[instrument(skip_all, fields(orders = orders.len()))]
pub fn orders_by_customer(orders: &[Order]) -> Vec<CustomerOrders<'_>> {
    let mut groups: Vec<CustomerOrders<'_>> = Vec::new();
    for order in orders {
        match groups
            .iter_mut()
            .find(|g| Rc::ptr_eq(g.customer, order.customer()))
        {
            Some(group) => group.orders.push(order),
            None => groups.push(CustomerOrders {
                customer: order.customer(),
                orders: vec![order],
            }),
        }
    }
    debug!(groups = groups.len(), "Grouped orders by customer");
    groups
}

pub fn total_spent_by_customer(orders: &[Order]) -> Vec<CustomerSpend<'_>> {
    orders_by_customer(orders)
        .into_iter()
        .map(|group| CustomerSpend {
            customer: group.customer,
            total: group.orders.iter().map(|o| o.total()).sum(),
        })
        .collect()
}

/// The `n` most expensive products, highest price first. Equal prices keep their
/// catalog order.
pub fn top_expensive_products(products: &[Rc<Product>], n: usize) -> Vec<Rc<Product>> {
    let mut sorted = products.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.price.total_cmp(&a.price));
    sorted.truncate(n);
    sorted
}

/// Mean order total, or 0.0 when there are no orders.
pub fn average_order_value(orders: &[Order]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    let sum: f64 = orders.iter().map(|o| o.total()).sum();
    sum / orders.len() as f64
}

pub fn category_totals(products: &[Rc<Product>]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for product in products {
        match totals.iter_mut().find(|t| t.category == product.category) {
            Some(entry) => entry.total += product.price,
            None => totals.push(CategoryTotal {
                category: product.category.clone(),
                total: product.price,
            }),
        }
    }
    totals
}

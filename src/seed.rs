//! Fixed demo data: the warehouse, the customer list and the orders placed at startup.

use chrono::NaiveDate;

use crate::app_system::RetailSystem;
use crate::catalog::{CustomerDirectory, ProductCatalog};
use crate::domain::{Customer, Product};
use crate::error::CatalogError;

/// Customer name followed by the names of the products ordered.
pub const ORDERS: &[(&str, &[&str])] = &[
    ("John Smith", &["Samsung Galaxy S22", "Moby Dick", "Huggies Diapers"]),
    ("Emily Johnson", &["Harry Potter", "The Catcher in the Rye", "Samsung Galaxy S22"]),
    ("Michael Brown", &["Moby Dick", "Huggies Diapers"]),
    ("Sarah Davis", &["Huggies Diapers"]),
    ("Michael Brown", &["Samsung Galaxy S22"]),
];

pub fn warehouse() -> ProductCatalog {
    vec![
        Product::new("Samsung Galaxy S22", "Smartphones", 1200.0),
        Product::new("Moby Dick", "Books", 25.0),
        Product::new("Harry Potter", "Books", 40.0),
        Product::new("The Catcher in the Rye", "Books", 30.0),
        Product::new("Huggies Diapers", "Baby", 20.0),
        Product::new("Toy Truck", "Toys", 35.0),
        Product::new("Drone", "Toys", 150.0),
        Product::new("Lego City", "Toys", 80.0),
    ]
    .into_iter()
    .collect()
}

pub fn customers() -> CustomerDirectory {
    vec![
        Customer::new("John Smith", 1),
        Customer::new("Emily Johnson", 2),
        Customer::new("Michael Brown", 3),
        Customer::new("Sarah Davis", 4),
    ]
    .into_iter()
    .collect()
}

/// Places every entry of [`ORDERS`], stopping at the first unknown name.
pub fn place_orders(system: &mut RetailSystem, order_date: NaiveDate) -> Result<(), CatalogError> {
    for (customer, products) in ORDERS {
        system.place_order(customer, products, order_date)?;
    }
    Ok(())
}

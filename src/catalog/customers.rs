use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::Customer;
use crate::error::CatalogError;

/// Known customers in registration order.
#[derive(Debug, Default, Clone)]
pub struct CustomerDirectory {
    customers: Vec<Rc<Customer>>,
    by_name: HashMap<String, usize>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, customer: Customer) {
        let position = self.customers.len();
        self.by_name.entry(customer.name.clone()).or_insert(position);
        self.customers.push(Rc::new(customer));
    }

    pub fn find(&self, name: &str) -> Result<&Rc<Customer>, CatalogError> {
        self.by_name
            .get(name)
            .map(|&position| &self.customers[position])
            .ok_or_else(|| CatalogError::CustomerNotFound(name.to_string()))
    }

    pub fn customers(&self) -> &[Rc<Customer>] {
        &self.customers
    }
}

impl FromIterator<Customer> for CustomerDirectory {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut directory = Self::new();
        for customer in iter {
            directory.add(customer);
        }
        directory
    }
}

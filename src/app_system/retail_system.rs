use chrono::NaiveDate;
use tracing::{error, info, instrument, warn};

use crate::catalog::{CustomerDirectory, ProductCatalog};
use crate::domain::Order;
use crate::error::CatalogError;

/// Owns the catalog, the customers and every placed order.
///
/// Order ids come from a counter starting at 1 and only advance when an order is
/// actually recorded.
#[derive(Debug)]
pub struct RetailSystem {
    catalog: ProductCatalog,
    customers: CustomerDirectory,
    orders: Vec<Order>,
    next_order_id: u64,
}

impl RetailSystem {
    pub fn new(catalog: ProductCatalog, customers: CustomerDirectory) -> Self {
        if catalog.is_empty() {
            warn!("Catalog is empty, every order will fail to resolve its products");
        }
        info!(
            products = catalog.len(),
            customers = customers.customers().len(),
            "Retail system ready"
        );
        Self {
            catalog,
            customers,
            orders: Vec::new(),
            next_order_id: 1,
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    #[allow(dead_code)]
    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Places an order for `customer_name` containing `product_names` in the given order.
    ///
    /// # Errors
    /// Every name is resolved before the order is created; if any is unknown nothing is
    /// recorded and the lookup error is returned.
    #[instrument(skip(self, product_names), fields(products = product_names.len()))]
    pub fn place_order(
        &mut self,
        customer_name: &str,
        product_names: &[&str],
        order_date: NaiveDate,
    ) -> Result<&Order, CatalogError> {
        let customer = self.customers.find(customer_name).map_err(|e| {
            error!(error = %e, "Customer lookup failed");
            e
        })?;

        let products = product_names
            .iter()
            .map(|name| self.catalog.find(name).cloned())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(error = %e, "Product lookup failed");
                e
            })?;

        let mut order = Order::new(self.next_order_id, customer.clone(), order_date);
        for product in products {
            order.add_product(product);
        }
        self.next_order_id += 1;

        info!(order_id = order.id(), total = order.total(), "Order placed");
        self.orders.push(order);
        Ok(&self.orders[self.orders.len() - 1])
    }
}

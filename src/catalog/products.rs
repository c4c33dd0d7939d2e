use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::Product;
use crate::error::CatalogError;

/// The product catalog in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ProductCatalog {
    products: Vec<Rc<Product>>,
    by_name: HashMap<String, usize>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        let position = self.products.len();
        self.by_name.entry(product.name.clone()).or_insert(position);
        self.products.push(Rc::new(product));
    }

    /// Resolves `name` by exact match.
    pub fn find(&self, name: &str) -> Result<&Rc<Product>, CatalogError> {
        self.by_name
            .get(name)
            .map(|&position| &self.products[position])
            .ok_or_else(|| CatalogError::ProductNotFound(name.to_string()))
    }

    pub fn products(&self) -> &[Rc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            catalog.add(product);
        }
        catalog
    }
}

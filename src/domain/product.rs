use std::fmt;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name, used as the lookup key when placing orders
    /// * `category` - Category the product is totalled under
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {:.2}", self.name, self.category, self.price)
    }
}

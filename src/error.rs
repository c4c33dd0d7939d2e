use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Lookup failures while resolving names against the catalog or customer list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

/// Errors that can occur while mutating an order.
#[derive(Debug, Clone, Error, PartialEq)]
#[allow(dead_code)]
pub enum OrderError {
    #[error("Delivery date {delivery_date} is before order date {order_date}")]
    DeliveryBeforeOrder {
        order_date: NaiveDate,
        delivery_date: NaiveDate,
    },
}

/// Failures of the flat-file product store. Parse failures share this type with I/O
/// failures so callers handle both the same way.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed record {index} ({record:?}): expected 3 fields, found {fields}")]
    MalformedRecord {
        index: usize,
        record: String,
        fields: usize,
    },
    #[error("Invalid price {price:?} in record {index}")]
    InvalidPrice { index: usize, price: String },
    #[error("Price {price} of product {name:?} cannot be written to the catalog file")]
    UnrepresentablePrice { name: String, price: f64 },
    #[error("Product {field} {value:?} contains a reserved character ('@' or '#')")]
    ReservedCharacter { field: &'static str, value: String },
}

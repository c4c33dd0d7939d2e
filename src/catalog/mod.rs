//! Name-indexed collections of products and customers.
//!
//! Both keep insertion order for reporting and resolve names through a map built as
//! entries are added. When a name repeats, the first entry keeps the name.

mod customers;
mod products;

pub use customers::CustomerDirectory;
pub use products::ProductCatalog;

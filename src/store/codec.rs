//! Text format for the product catalog.
//!
//! Each product is one record `name@category@price#`, records concatenated with no
//! other separator. Prices are written with two fractional digits and `.`; on read,
//! `,` is accepted as the decimal separator too.

use std::fmt::Write;
use std::rc::Rc;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Product;
use crate::error::StoreError;

pub const FIELD_SEPARATOR: char = '@';
pub const RECORD_TERMINATOR: char = '#';

/// Serializes `products` in order.
///
/// Prices are rounded half-up to cents on their shortest decimal form, so `2.675` is
/// written as `2.68` even though the nearest `f64` lies just below it.
///
/// # Errors
/// [`StoreError::ReservedCharacter`] if a name or category contains `@` or `#`,
/// [`StoreError::UnrepresentablePrice`] if a price is negative, not finite, or too large
/// for the format.
pub fn encode(products: &[Rc<Product>]) -> Result<String, StoreError> {
    let mut data = String::new();
    for product in products {
        check_field("name", &product.name)?;
        check_field("category", &product.category)?;
        let price = price_in_cents(product)?;
        // Writing into a String cannot fail.
        let _ = write!(
            data,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{:.2}{RECORD_TERMINATOR}",
            product.name, product.category, price
        );
    }
    Ok(data)
}

fn price_in_cents(product: &Product) -> Result<Decimal, StoreError> {
    let unrepresentable = || StoreError::UnrepresentablePrice {
        name: product.name.clone(),
        price: product.price,
    };
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(unrepresentable());
    }
    // abs() turns -0.0 into 0.0
    let exact = Decimal::from_str(&product.price.abs().to_string()).map_err(|_| unrepresentable())?;
    Ok(exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Parses products from `text`, skipping empty and whitespace-only fragments.
///
/// # Errors
/// [`StoreError::MalformedRecord`] when a record does not have exactly three fields,
/// [`StoreError::InvalidPrice`] when the price is not a finite, non-negative decimal.
pub fn decode(text: &str) -> Result<Vec<Product>, StoreError> {
    text.split(RECORD_TERMINATOR)
        .filter(|fragment| !fragment.trim().is_empty())
        .enumerate()
        .map(|(index, record)| decode_record(index, record))
        .collect()
}

fn decode_record(index: usize, record: &str) -> Result<Product, StoreError> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    let [name, category, price] = fields[..] else {
        return Err(StoreError::MalformedRecord {
            index,
            record: record.to_string(),
            fields: fields.len(),
        });
    };
    Ok(Product::new(name, category, parse_price(index, price)?))
}

fn parse_price(index: usize, text: &str) -> Result<f64, StoreError> {
    let invalid = || StoreError::InvalidPrice {
        index,
        price: text.to_string(),
    };
    let price: f64 = text.trim().replace(',', ".").parse().map_err(|_| invalid())?;
    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }
    Ok(price)
}

fn check_field(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.contains([FIELD_SEPARATOR, RECORD_TERMINATOR]) {
        return Err(StoreError::ReservedCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

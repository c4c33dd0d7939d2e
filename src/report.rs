//! Console report: the placed orders, one section per aggregate, then a save and a
//! reload of the catalog.

use std::fmt::Display;
use std::io::{self, Write};

use tracing::{error, info, instrument};

use crate::analytics;
use crate::app_system::RetailSystem;
use crate::config::ReportConfig;
use crate::store::CatalogFile;

/// Writes the full report to `out`.
///
/// Failures of the catalog file are logged and noted in the report, and the run
/// continues. Only failures writing to `out` are returned.
#[instrument(skip_all, fields(catalog = %config.catalog_path.display()))]
pub fn run(system: &RetailSystem, config: &ReportConfig, out: &mut impl Write) -> io::Result<()> {
    let orders = system.orders();
    let products = system.catalog().products();

    print_list(out, orders)?;

    banner(out, 1)?;
    for group in analytics::orders_by_customer(orders) {
        writeln!(
            out,
            "Customer: {} has made {} orders.",
            group.customer,
            group.orders.len()
        )?;
        writeln!(out, "Orders:")?;
        print_list(out, group.orders)?;
    }

    banner(out, 2)?;
    for spend in analytics::total_spent_by_customer(orders) {
        writeln!(out, "Customer: {} has spent {:.2} €", spend.customer, spend.total)?;
    }

    banner(out, 3)?;
    print_list(out, analytics::top_expensive_products(products, config.top_n))?;

    banner(out, 4)?;
    writeln!(
        out,
        "Average Order Value: {:.2}",
        analytics::average_order_value(orders)
    )?;

    banner(out, 5)?;
    writeln!(out, "Categories and Totals:")?;
    for entry in analytics::category_totals(products) {
        writeln!(out, "{}: {:.2}", entry.category, entry.total)?;
    }

    let file = CatalogFile::new(&config.catalog_path);

    banner(out, 6)?;
    match file.save(products) {
        Ok(()) => writeln!(out, "Saved {} products to {}", products.len(), file.path().display())?,
        Err(e) => {
            error!(error = %e, "Error saving to disk");
            writeln!(out, "Error saving to disk: {e}")?;
        }
    }

    banner(out, 7)?;
    match file.load() {
        Ok(loaded) => print_list(out, &loaded)?,
        Err(e) => {
            error!(error = %e, "Error loading from disk");
            writeln!(out, "Error loading from disk: {e}")?;
        }
    }

    info!("Report complete");
    Ok(())
}

fn banner(out: &mut impl Write, section: u32) -> io::Result<()> {
    writeln!(out, "************* {section} *****************")
}

fn print_list<T: Display>(out: &mut impl Write, items: impl IntoIterator<Item = T>) -> io::Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

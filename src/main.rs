mod analytics;
mod app_system;
mod catalog;
mod config;
mod domain;
mod error;
mod report;
mod seed;
mod store;

#[cfg(test)]
mod integration_tests;

use tracing::{error, info};
use crate::app_system::{RetailSystem, setup_tracing};
use crate::config::ReportConfig;

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting retail report");

    let mut system = RetailSystem::new(seed::warehouse(), seed::customers());

    // Unknown names here mean the seed data itself is wrong.
    let today = chrono::Local::now().date_naive();
    if let Err(e) = seed::place_orders(&mut system, today) {
        error!(error = %e, "Seed orders could not be placed");
        return Err(e.to_string());
    }

    let config = ReportConfig::default();
    let stdout = std::io::stdout();
    report::run(&system, &config, &mut stdout.lock()).map_err(|e| {
        error!(error = %e, "Failed to write report");
        e.to_string()
    })?;

    info!("Retail report finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::app_system::RetailSystem;
    use crate::config::ReportConfig;
    use crate::report;
    use crate::seed;

    fn seeded_system() -> RetailSystem {
        let mut system = RetailSystem::new(seed::warehouse(), seed::customers());
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        seed::place_orders(&mut system, day).expect("seed orders resolve");
        system
    }

    fn render(system: &RetailSystem, config: &ReportConfig) -> String {
        let mut out = Vec::new();
        report::run(system, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn section(report: &str, n: u32) -> &str {
        let start_marker = format!("************* {n} *****************\n");
        let start = report.find(&start_marker).unwrap() + start_marker.len();
        let rest = &report[start..];
        match rest.find("*************") {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    #[test]
    fn test_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::default().with_catalog_path(dir.path().join("products.txt"));
        let system = seeded_system();

        let report = render(&system, &config);

        let banners: Vec<usize> = (1..=7)
            .map(|n| report.find(&format!("************* {n} *****************")).unwrap())
            .collect();
        assert!(banners.windows(2).all(|w| w[0] < w[1]));

        let preamble = &report[..banners[0]];
        assert_eq!(preamble.lines().count(), 5);
        assert!(preamble.starts_with(
            "Order #1 [New] ordered 2024-01-15 delivery 2024-01-22 customer John Smith (#1)"
        ));

        let grouped = section(&report, 1);
        assert!(grouped.contains("Customer: Michael Brown (#3) has made 2 orders."));
        assert!(grouped.contains("Customer: Sarah Davis (#4) has made 1 orders."));

        assert_eq!(
            section(&report, 2),
            "Customer: John Smith (#1) has spent 1245.00 €\n\
             Customer: Emily Johnson (#2) has spent 1270.00 €\n\
             Customer: Michael Brown (#3) has spent 1245.00 €\n\
             Customer: Sarah Davis (#4) has spent 20.00 €\n"
        );
        assert_eq!(
            section(&report, 3),
            "Samsung Galaxy S22 (Smartphones) 1200.00\n\
             Drone (Toys) 150.00\n\
             Lego City (Toys) 80.00\n"
        );
        assert_eq!(section(&report, 4), "Average Order Value: 756.00\n");
        assert_eq!(
            section(&report, 5),
            "Categories and Totals:\n\
             Smartphones: 1200.00\n\
             Books: 95.00\n\
             Baby: 20.00\n\
             Toys: 265.00\n"
        );

        let saved = std::fs::read_to_string(dir.path().join("products.txt")).unwrap();
        assert!(saved.starts_with("Samsung Galaxy S22@Smartphones@1200.00#Moby Dick@Books@25.00#"));
        assert!(saved.ends_with("Lego City@Toys@80.00#"));

        let reloaded = section(&report, 7);
        assert_eq!(reloaded.lines().count(), 8);
        assert!(reloaded.starts_with("Samsung Galaxy S22 (Smartphones) 1200.00\n"));
    }

    #[test]
    fn test_store_failures_do_not_abort_report() {
        // A directory can be neither written nor read as a file.
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::default().with_catalog_path(dir.path());

        let report = render(&seeded_system(), &config);

        assert!(section(&report, 6).starts_with("Error saving to disk: "));
        assert!(section(&report, 7).starts_with("Error loading from disk: "));
    }

    #[test]
    fn test_top_n_follows_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::default()
            .with_catalog_path(dir.path().join("products.txt"))
            .with_top_n(1);

        let report = render(&seeded_system(), &config);
        assert_eq!(section(&report, 3), "Samsung Galaxy S22 (Smartphones) 1200.00\n");
    }
}

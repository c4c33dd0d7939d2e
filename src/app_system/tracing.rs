use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`. Logs go to stderr so
/// stdout carries only the report.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=retail_report::store=debug,warn cargo run
/// ```
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

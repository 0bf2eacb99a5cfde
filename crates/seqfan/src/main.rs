//! seqfan — process-per-task concurrency demonstration harness.

use seqfan_lib::{app, config, errors};

fn main() {
    // Initialize tracing; diagnostics go to stderr so the stdout line
    // protocol stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        if errors::is_usage_error(&err) {
            eprintln!("Usage: seqfan [ITERATIONS] [DELAY_US]");
        }
        std::process::exit(errors::exit_code(&err));
    }
}

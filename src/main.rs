//! algoviz CLI - step-by-step algorithm visualizer
//!
//! Command-line entry point. Diagnostics go to stderr, filtered by
//! `ALGOVIZ_LOG` (default `warn`).

use std::process::ExitCode;

use algoviz::cli::{run_cli, Args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("ALGOVIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_cli(Args::parse())
}

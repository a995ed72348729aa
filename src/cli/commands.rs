//! CLI command handlers.
//!
//! The `run` handler is a terminal view: it drives a [`Visualizer`] through
//! its command interface and prints every event it emits.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use tokio::sync::mpsc;

use crate::algorithms::Algorithm;
use crate::config::VizConfig;
use crate::engine::{Pacer, RecordingPacer, TokioPacer, VizEvent};
use crate::error::VizResult;
use crate::visualizer::{RunOutcome, RunReport, Visualizer};

use super::args::RunOptions;
use super::output::{format_config, format_report, print_event, print_help, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run(opts) => run_algorithm(&opts),
        Command::CheckConfig { config_path } => check_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Build the effective configuration: file (or defaults) plus overrides.
///
/// # Errors
///
/// Returns error if the file cannot be loaded or the result is invalid.
pub fn build_config(opts: &RunOptions) -> VizResult<VizConfig> {
    let mut config = match &opts.config_path {
        Some(path) => VizConfig::load(path)?,
        None => VizConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }
    if let Some(size) = opts.size {
        config.array.default_size = config.clamp_size(size);
    }
    if let Some(ms) = opts.speed_ms {
        config.speed.default_ms = ms.clamp(config.speed.min_ms, config.speed.max_ms);
    }
    config.check()?;
    Ok(config)
}

/// Process exit status for a finished run: 0 on success or not found, 1 on
/// invalid input or rejection.
#[must_use]
pub fn exit_status(report: &RunReport) -> u8 {
    match report.outcome() {
        Some(RunOutcome::InvalidInput { .. }) | None => 1,
        Some(_) => 0,
    }
}

/// Animate one algorithm in the terminal.
#[must_use]
pub fn run_algorithm(opts: &RunOptions) -> ExitCode {
    let config = match build_config(opts) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let mut opts = opts.clone();
    if opts.algorithm == Algorithm::BinarySearch && opts.target.is_none() {
        opts.target = prompt_target();
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::from(1);
        }
    };

    let result = if opts.instant {
        runtime.block_on(drive(config, RecordingPacer::new(), &opts))
    } else {
        runtime.block_on(drive(config, TokioPacer, &opts))
    };

    match result {
        Ok(report) => {
            println!("{}", format_report(&report));
            ExitCode::from(exit_status(&report))
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Drive a visualizer through select + run while printing its events.
///
/// # Errors
///
/// Returns error if the visualizer cannot be built or the run fails.
pub async fn drive<P: Pacer>(config: VizConfig, pacer: P, opts: &RunOptions) -> VizResult<RunReport> {
    let (viz, rx) = Visualizer::new(config, pacer)?;
    let json = opts.json;

    let run = async move {
        viz.on_select(opts.algorithm).await;
        let report = match (&opts.start, opts.algorithm) {
            (Some(node), Algorithm::Bfs) => viz.on_node_selected(node).await,
            _ => viz.on_run(opts.target.as_deref()).await,
        };
        // Dropping the last handle closes the event stream.
        drop(viz);
        report
    };

    let (report, ()) = tokio::join!(run, print_events(rx, json));
    report
}

async fn print_events(mut rx: mpsc::UnboundedReceiver<VizEvent>, json: bool) {
    while let Some(event) = rx.recv().await {
        print_event(&event, json);
    }
}

/// Ask for a search target on stdin. `None` on EOF or read failure.
fn prompt_target() -> Option<String> {
    print!("Enter a value to search for: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end().to_string()),
    }
}

/// Validate a configuration file and print the effective settings.
#[must_use]
pub fn check_config(path: &Path) -> ExitCode {
    match VizConfig::load(path) {
        Ok(config) => {
            println!("{}", format_config(&config));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}: {e}", path.display());
            ExitCode::from(1)
        }
    }
}

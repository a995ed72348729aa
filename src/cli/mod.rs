//! CLI module for algoviz.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The `run` command is a minimal terminal view over the visualizer core.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::{build_config, check_config, drive, exit_status, run_algorithm, run_cli};
pub use output::{
    format_array_frame, format_config, format_event, format_event_json, format_graph_frame,
    format_report, format_version, print_event, print_help, print_version,
};

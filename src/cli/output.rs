//! CLI output formatting.
//!
//! Formatting is kept in pure functions returning `String` so it can be
//! tested; the `print_*` wrappers only write to stdout.

use std::fmt::Write as _;

use crate::config::VizConfig;
use crate::engine::{ArrayFrame, Frame, GraphFrame, Notice, View, VizEvent};
use crate::error::{VizError, VizResult};
use crate::visualizer::{RunOutcome, RunReport};
use crate::algorithms::SearchOutcome;

/// Print version information.
pub fn print_version() {
    println!("{}", format_version());
}

/// Version line, including the git hash when the build captured one.
#[must_use]
pub fn format_version() -> String {
    let version = option_env!("ALGOVIZ_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    match option_env!("GIT_HASH").filter(|h| !h.is_empty()) {
        Some(hash) => format!("algoviz {version} ({hash})"),
        None => format!("algoviz {version}"),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"algoviz - step-by-step visualizer for bubble sort, binary search and BFS

USAGE:
    algoviz <COMMAND> [OPTIONS]

COMMANDS:
    run <bubble|binary|bfs>     Animate an algorithm in the terminal
        -n, --size <N>          Array size
        -s, --speed <MS>        Milliseconds per step
        --seed <N>              Seed for the generated array
        -t, --target <VALUE>    Binary search target (prompted if absent)
        --start <NODE>          BFS start node
        -c, --config <FILE>     YAML configuration
        --instant               Do not wait between steps
        --json                  Print events as JSON lines

    check-config <FILE>         Validate a configuration file

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    algoviz run bubble --size 10 --speed 50
    algoviz run binary --seed 7 --target 42
    algoviz run bfs --start B --instant

LOGGING:
    Set ALGOVIZ_LOG (e.g. ALGOVIZ_LOG=debug) to enable diagnostics on stderr.
"
    );
}

/// Render an array frame as one line: `[v]` marks active, `(v)` found.
#[must_use]
pub fn format_array_frame(frame: &ArrayFrame) -> String {
    frame
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if frame.found == Some(i) {
                format!("({v})")
            } else if frame.active.contains(&i) {
                format!("[{v}]")
            } else {
                v.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a graph frame as `visit X | queue [..]`.
#[must_use]
pub fn format_graph_frame(frame: &GraphFrame) -> String {
    let queue = format!("queue [{}]", frame.queue.join(", "));
    match &frame.highlight {
        Some(node) => format!("visit {node} | {queue}"),
        None => queue,
    }
}

/// Render one event as a text line.
#[must_use]
pub fn format_event(event: &VizEvent) -> String {
    match event {
        VizEvent::Frame {
            frame: Frame::Array(frame),
        } => format_array_frame(frame),
        VizEvent::Frame {
            frame: Frame::Graph(frame),
        } => format_graph_frame(frame),
        VizEvent::Controls { enabled: true } => "-- controls enabled".to_string(),
        VizEvent::Controls { enabled: false } => "-- controls disabled".to_string(),
        VizEvent::ViewChanged { view: View::Array } => "-- array view".to_string(),
        VizEvent::ViewChanged { view: View::Graph } => "-- graph view".to_string(),
        VizEvent::Notice {
            notice: Notice::TargetNotFound { target },
        } => format!("!! value {target} not found in array"),
        VizEvent::Notice {
            notice: Notice::InvalidInput { input },
        } => format!("!! invalid number '{input}'"),
    }
}

/// Render one event as a JSON line.
///
/// # Errors
///
/// Returns `VizError::Serialization` if encoding fails.
pub fn format_event_json(event: &VizEvent) -> VizResult<String> {
    serde_json::to_string(event).map_err(|e| VizError::serialization(e.to_string()))
}

/// Print one event.
pub fn print_event(event: &VizEvent, json: bool) {
    if json {
        match format_event_json(event) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    } else {
        println!("{}", format_event(event));
    }
}

/// One-line summary of a run.
#[must_use]
pub fn format_report(report: &RunReport) -> String {
    let RunReport::Completed { algorithm, outcome } = report else {
        return "run rejected: another run is in progress".to_string();
    };
    match outcome {
        RunOutcome::Sorted { report } => format!(
            "{algorithm}: sorted with {} comparisons and {} swaps",
            report.comparisons, report.swaps
        ),
        RunOutcome::Searched {
            target,
            result: SearchOutcome::Found { index, probes },
        } => format!("{algorithm}: {target} found at index {index} after {probes} probes"),
        RunOutcome::Searched {
            target,
            result: SearchOutcome::NotFound { probes },
        } => format!("{algorithm}: {target} not found after {probes} probes"),
        RunOutcome::InvalidInput { input } => {
            format!("{algorithm}: aborted, '{input}' is not a number")
        }
        RunOutcome::Traversed { traversal } => {
            format!("{algorithm}: visited {}", traversal.order.join(" -> "))
        }
    }
}

/// Effective configuration summary for `check-config`.
#[must_use]
pub fn format_config(config: &VizConfig) -> String {
    let mut out = String::new();
    let a = &config.array;
    let s = &config.speed;
    let _ = writeln!(out, "✓ configuration valid");
    let _ = writeln!(
        out,
        "  seed:  {}",
        config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string())
    );
    let _ = writeln!(
        out,
        "  array: size {} in [{}, {}], values [{}, {}]",
        a.default_size, a.min_size, a.max_size, a.value_min, a.value_max
    );
    let _ = writeln!(
        out,
        "  speed: {} ms in [{}, {}]",
        s.default_ms, s.min_ms, s.max_ms
    );
    let _ = write!(
        out,
        "  bfs:   start {}, {} ms per node",
        config.bfs.start, config.bfs.step_ms
    );
    out
}

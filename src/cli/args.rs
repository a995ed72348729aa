//! CLI argument parsing.
//!
//! Parses from any iterator of strings so the parser is testable without
//! touching `std::env::args()`.

use std::path::PathBuf;

use crate::algorithms::Algorithm;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Options for the `run` command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Algorithm to animate.
    pub algorithm: Algorithm,
    /// Array size override.
    pub size: Option<usize>,
    /// Step speed override in milliseconds.
    pub speed_ms: Option<u64>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Binary search target text (prompted for when absent).
    pub target: Option<String>,
    /// BFS start node, as if the node had been clicked.
    pub start: Option<String>,
    /// YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Skip real-time pauses.
    pub instant: bool,
    /// Print events as JSON lines.
    pub json: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Animate one algorithm in the terminal.
    Run(RunOptions),
    /// Validate a configuration file and print the effective settings.
    CheckConfig {
        /// Path to the YAML file.
        config_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "check-config" => Self::parse_check_config_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_run_command(args: &[String]) -> Command {
        let Some(name) = args.get(2) else {
            eprintln!("Error: 'run' command requires an algorithm (bubble, binary, bfs)");
            return Command::Help;
        };
        let algorithm = match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                eprintln!("Error: {e}");
                return Command::Help;
            }
        };

        let mut opts = RunOptions {
            algorithm,
            ..RunOptions::default()
        };

        let mut i = 3;
        while i < args.len() {
            let value = args.get(i + 1);
            let consumed = match (args[i].as_str(), value) {
                ("--size" | "-n", Some(v)) => {
                    opts.size = v.parse().ok();
                    2
                }
                ("--speed" | "-s", Some(v)) => {
                    opts.speed_ms = v.parse().ok();
                    2
                }
                ("--seed", Some(v)) => {
                    opts.seed = v.parse().ok();
                    2
                }
                ("--target" | "-t", Some(v)) => {
                    opts.target = Some(v.clone());
                    2
                }
                ("--start", Some(v)) => {
                    opts.start = Some(v.clone());
                    2
                }
                ("--config" | "-c", Some(v)) => {
                    opts.config_path = Some(PathBuf::from(v));
                    2
                }
                ("--instant", _) => {
                    opts.instant = true;
                    1
                }
                ("--json", _) => {
                    opts.json = true;
                    1
                }
                _ => 1,
            };
            i += consumed;
        }

        Command::Run(opts)
    }

    fn parse_check_config_command(args: &[String]) -> Command {
        args.get(2).map_or_else(
            || {
                eprintln!("Error: 'check-config' command requires a config path");
                Command::Help
            },
            |path| Command::CheckConfig {
                config_path: PathBuf::from(path),
            },
        )
    }
}

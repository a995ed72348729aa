//! Command interface between a view and the stepping core.
//!
//! A view drives the core through `on_*` commands and renders the
//! [`VizEvent`] stream it receives. The core never reaches into rendering.
//!
//! # Gating
//!
//! Every mutating command (generate, size change, algorithm switch, run,
//! node selection) first acquires the [`RunState`]. While a run is active
//! these commands return a rejection and change nothing. Speed changes are
//! always accepted; they affect pauses scheduled after the change.
//!
//! # Shared array
//!
//! Binary search sorts the array in place. The array stays sorted until the
//! next generate, so a following bubble sort animates an already sorted
//! array.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::algorithms::{
    bfs, binary_search, bubble_sort, parse_target, Algorithm, SearchOutcome, SortReport,
    Traversal,
};
use crate::config::VizConfig;
use crate::engine::{
    ArrayFrame, Frame, GraphFrame, Notice, Pacer, RunGuard, RunState, SpeedControl, TokioPacer,
    View, VizEvent, VizRng,
};
use crate::error::{VizError, VizResult};
use crate::models::{ArrayModel, GraphModel};

/// Result of a gated, non-run command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    /// The command took effect.
    Applied,
    /// A run was in progress; nothing changed.
    Rejected,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Bubble sort completed.
    Sorted {
        /// Comparison and swap counts.
        report: SortReport,
    },
    /// Binary search completed.
    Searched {
        /// Parsed target.
        target: f64,
        /// Found index or not found.
        result: SearchOutcome,
    },
    /// Binary search aborted before touching the array.
    InvalidInput {
        /// The rejected text.
        input: String,
    },
    /// BFS completed.
    Traversed {
        /// Visit order and queue history.
        traversal: Traversal,
    },
}

/// Result of a run request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunReport {
    /// Another run was active; nothing happened.
    Rejected,
    /// The run went to completion.
    Completed {
        /// Algorithm that ran.
        algorithm: Algorithm,
        /// What it produced.
        outcome: RunOutcome,
    },
}

impl RunReport {
    /// Outcome of a completed run.
    #[must_use]
    pub const fn outcome(&self) -> Option<&RunOutcome> {
        match self {
            Self::Completed { outcome, .. } => Some(outcome),
            Self::Rejected => None,
        }
    }

    /// Whether the request was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// State touched only by the holder of the run flag.
#[derive(Debug)]
struct Workspace {
    array: ArrayModel,
    rng: VizRng,
    size: usize,
    selected: Algorithm,
}

impl Workspace {
    fn regenerate(&mut self) {
        self.array.generate(self.size, &mut self.rng);
    }
}

/// Cloneable handle to the visualizer core. Clones share all state.
#[derive(Debug, Clone)]
pub struct Visualizer<P: Pacer = TokioPacer> {
    config: Arc<VizConfig>,
    graph: Arc<GraphModel>,
    workspace: Arc<Mutex<Workspace>>,
    run_state: RunState,
    speed: SpeedControl,
    events: mpsc::UnboundedSender<VizEvent>,
    pacer: P,
}

impl<P: Pacer> Visualizer<P> {
    /// Validate `config`, generate the initial array and return the handle
    /// with the receiving end of its event stream.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration or its graph is invalid.
    pub fn new(config: VizConfig, pacer: P) -> VizResult<(Self, mpsc::UnboundedReceiver<VizEvent>)> {
        config.check()?;
        let graph = config.graph_model()?;
        let rng = VizRng::from_seed_option(config.seed);
        let size = config.clamp_size(config.array.default_size);

        let mut workspace = Workspace {
            array: config.array_model(),
            rng,
            size,
            selected: Algorithm::default(),
        };
        workspace.regenerate();
        info!(seed = workspace.rng.master_seed(), size, "visualizer ready");
        let initial = Frame::Array(ArrayFrame::plain(workspace.array.values()));

        let (events, rx) = mpsc::unbounded_channel();
        let viz = Self {
            speed: config.speed_control(),
            config: Arc::new(config),
            graph: Arc::new(graph),
            workspace: Arc::new(Mutex::new(workspace)),
            run_state: RunState::new(),
            events,
            pacer,
        };

        viz.send(VizEvent::ViewChanged { view: View::Array });
        viz.send(initial.into());
        viz.send(VizEvent::Controls { enabled: true });

        Ok((viz, rx))
    }

    fn send(&self, event: VizEvent) {
        // No receiver means no view; the core keeps working.
        let _ = self.events.send(event);
    }

    /// Acquire the run flag for a full run; controls are disabled now and
    /// re-enabled when the guard drops.
    fn begin_run(&self) -> Option<RunGuard> {
        let events = self.events.clone();
        let guard = self.run_state.acquire_with(move || {
            let _ = events.send(VizEvent::Controls { enabled: true });
        })?;
        self.send(VizEvent::Controls { enabled: false });
        Some(guard)
    }

    // ===== Commands =====

    /// Replace the array with fresh random values of the current size.
    pub async fn on_generate(&self) -> CommandStatus {
        let Some(_guard) = self.run_state.acquire() else {
            debug!("generate rejected: run in progress");
            return CommandStatus::Rejected;
        };
        let mut ws = self.workspace.lock().await;
        ws.regenerate();
        debug!(size = ws.size, "array regenerated");
        self.send(Frame::Array(ArrayFrame::plain(ws.array.values())).into());
        CommandStatus::Applied
    }

    /// Change the array size (clamped to the configured bounds) and
    /// regenerate.
    pub async fn on_size_changed(&self, size: usize) -> CommandStatus {
        let Some(_guard) = self.run_state.acquire() else {
            debug!(size, "size change rejected: run in progress");
            return CommandStatus::Rejected;
        };
        let mut ws = self.workspace.lock().await;
        ws.size = self.config.clamp_size(size);
        ws.regenerate();
        self.send(Frame::Array(ArrayFrame::plain(ws.array.values())).into());
        CommandStatus::Applied
    }

    /// Change the step speed. Accepted at any time; returns the clamped
    /// value in effect.
    pub fn on_speed_changed(&self, ms: u64) -> u64 {
        let effective = self.speed.set_ms(ms);
        debug!(requested = ms, effective, "speed changed");
        effective
    }

    /// Switch the selected algorithm and show its view.
    pub async fn on_select(&self, algorithm: Algorithm) -> CommandStatus {
        let Some(_guard) = self.run_state.acquire() else {
            debug!(%algorithm, "algorithm switch rejected: run in progress");
            return CommandStatus::Rejected;
        };
        let mut ws = self.workspace.lock().await;
        ws.selected = algorithm;
        let view = algorithm.view();
        self.send(VizEvent::ViewChanged { view });
        let frame = match view {
            View::Array => Frame::Array(ArrayFrame::plain(ws.array.values())),
            View::Graph => Frame::Graph(GraphFrame::default()),
        };
        self.send(frame.into());
        CommandStatus::Applied
    }

    /// Run the selected algorithm to completion.
    ///
    /// `target_input` is the user's raw search text; only binary search
    /// reads it. A missing or non-numeric target aborts the search with an
    /// invalid-input notice before the array is touched.
    ///
    /// # Errors
    ///
    /// Returns error if the algorithm fails (graph lookup failure). The run
    /// flag is released on every path.
    pub async fn on_run(&self, target_input: Option<&str>) -> VizResult<RunReport> {
        let Some(_guard) = self.begin_run() else {
            debug!("run rejected: run in progress");
            return Ok(RunReport::Rejected);
        };
        let mut ws = self.workspace.lock().await;
        let algorithm = ws.selected;
        info!(%algorithm, "run started");

        let mut sink = self.events.clone();
        let outcome = match algorithm {
            Algorithm::BubbleSort => {
                let report = bubble_sort(&mut ws.array, &mut sink, &self.pacer, &self.speed).await?;
                RunOutcome::Sorted { report }
            }
            Algorithm::BinarySearch => {
                let input = target_input.unwrap_or_default();
                match parse_target(input) {
                    Ok(target) => {
                        let result =
                            binary_search(&mut ws.array, target, &mut sink, &self.pacer, &self.speed)
                                .await;
                        if let SearchOutcome::NotFound { .. } = result {
                            info!(value = target, "target not found");
                            self.send(Notice::TargetNotFound { target }.into());
                        }
                        RunOutcome::Searched { target, result }
                    }
                    Err(e) => {
                        warn!(error = %e, "binary search aborted");
                        self.send(
                            Notice::InvalidInput {
                                input: input.to_string(),
                            }
                            .into(),
                        );
                        RunOutcome::InvalidInput {
                            input: input.to_string(),
                        }
                    }
                }
            }
            Algorithm::Bfs => {
                drop(ws);
                self.traverse(&self.config.bfs.start).await?
            }
        };

        info!(%algorithm, "run finished");
        Ok(RunReport::Completed { algorithm, outcome })
    }

    /// Run BFS from a selected graph node.
    ///
    /// # Errors
    ///
    /// Returns `VizError::NodeNotFound` if `node` is not in the graph.
    pub async fn on_node_selected(&self, node: &str) -> VizResult<RunReport> {
        if !self.graph.contains(node) {
            return Err(VizError::node_not_found(node));
        }
        let Some(_guard) = self.begin_run() else {
            debug!(node, "node selection rejected: run in progress");
            return Ok(RunReport::Rejected);
        };
        info!(node, "bfs started from selected node");
        let outcome = self.traverse(node).await?;
        Ok(RunReport::Completed {
            algorithm: Algorithm::Bfs,
            outcome,
        })
    }

    /// Hit-test a click on the graph canvas; a hit starts BFS from that
    /// node. Returns `None` when the click misses every node.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::on_node_selected`].
    pub async fn on_canvas_click(&self, x: f64, y: f64) -> VizResult<Option<RunReport>> {
        let Some(node) = self.graph.node_at(x, y, self.config.bfs.hit_radius).cloned() else {
            return Ok(None);
        };
        self.on_node_selected(&node).await.map(Some)
    }

    async fn traverse(&self, start: &str) -> VizResult<RunOutcome> {
        let mut sink = self.events.clone();
        let step = Duration::from_millis(self.config.bfs.step_ms);
        let traversal = bfs(&self.graph, start, &mut sink, &self.pacer, step).await?;
        Ok(RunOutcome::Traversed { traversal })
    }

    // ===== Accessors =====

    /// Owned copy of the array. Waits for an in-flight run to finish.
    pub async fn snapshot(&self) -> Vec<u32> {
        self.workspace.lock().await.array.snapshot()
    }

    /// Currently selected algorithm.
    pub async fn selected(&self) -> Algorithm {
        self.workspace.lock().await.selected
    }

    /// Current array size setting.
    pub async fn size(&self) -> usize {
        self.workspace.lock().await.size
    }

    /// Seed used for array generation.
    pub async fn seed(&self) -> u64 {
        self.workspace.lock().await.rng.master_seed()
    }

    /// Current step speed in milliseconds.
    #[must_use]
    pub fn speed(&self) -> u64 {
        self.speed.ms()
    }

    /// Whether a run (or a gated command) is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.run_state.is_busy()
    }

    /// The static graph.
    #[must_use]
    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &VizConfig {
        &self.config
    }
}

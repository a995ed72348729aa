//! # algoviz
//!
//! Step-by-step core for a teaching visualizer of three classic algorithms:
//! bubble sort, binary search and breadth-first search.
//!
//! Each algorithm is a linear `async` procedure that emits a [`Frame`]
//! after every logical step and pauses between steps. A view (browser,
//! terminal, test harness) drives the core through the command interface
//! on [`Visualizer`] and renders the event stream it gets back.
//!
//! ## Example
//!
//! ```rust
//! use algoviz::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let config = VizConfig::builder().seed(42).size(10).build();
//! let (viz, mut events) = Visualizer::new(config, RecordingPacer::new()).unwrap();
//!
//! let report = viz.on_run(None).await.unwrap();
//! assert!(!report.is_rejected());
//! assert!(viz.snapshot().await.windows(2).all(|w| w[0] <= w[1]));
//! # while events.try_recv().is_ok() {}
//! # });
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::future_not_send,       // Send-ness is checked where futures are spawned
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod visualizer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::algorithms::{Algorithm, SearchOutcome, SortReport, Traversal};
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::engine::{
        ArrayFrame, Frame, GraphFrame, Notice, Pacer, RecordingPacer, RunState, SpeedControl,
        TokioPacer, View, VizEvent,
    };
    pub use crate::error::{VizError, VizResult};
    pub use crate::models::{ArrayModel, GraphModel, NodeId, Position};
    pub use crate::visualizer::{CommandStatus, RunOutcome, RunReport, Visualizer};
}

/// Re-export for public API
pub use engine::Frame;
pub use error::{VizError, VizResult};
pub use visualizer::Visualizer;

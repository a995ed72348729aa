//! Stepping engine.
//!
//! The pieces every algorithm run is built from:
//! - Deterministic RNG for array generation
//! - Run gating (one run at a time, released on every exit path)
//! - Pacing between visual steps, with a live speed control
//! - Frames and view events

pub mod frame;
pub mod pacer;
pub mod rng;
pub mod run_state;

pub use frame::{ArrayFrame, Frame, FrameSink, GraphFrame, Notice, View, VizEvent};
pub use pacer::{Pacer, RecordingPacer, SpeedControl, TokioPacer};
pub use rng::VizRng;
pub use run_state::{RunGuard, RunState};

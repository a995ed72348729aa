//! Frames and view events.
//!
//! A [`Frame`] is a transient snapshot handed to the view for one render
//! pass. [`VizEvent`] wraps frames together with the control and notice
//! signals a view needs.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::models::graph::NodeId;

/// Array snapshot with highlighted positions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArrayFrame {
    /// Array contents at the time of the frame.
    pub values: Vec<u32>,
    /// Positions drawn as "active".
    pub active: Vec<usize>,
    /// Position drawn as "found" (binary search match).
    pub found: Option<usize>,
}

impl ArrayFrame {
    /// Snapshot with the given active positions.
    #[must_use]
    pub fn new(values: &[u32], active: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            active: active.to_vec(),
            found: None,
        }
    }

    /// Snapshot with no highlights.
    #[must_use]
    pub fn plain(values: &[u32]) -> Self {
        Self::new(values, &[])
    }

    /// Snapshot marking `index` as found.
    #[must_use]
    pub fn found(values: &[u32], index: usize) -> Self {
        Self {
            values: values.to_vec(),
            active: vec![index],
            found: Some(index),
        }
    }

    /// Whether any position is highlighted.
    #[must_use]
    pub fn has_highlights(&self) -> bool {
        !self.active.is_empty() || self.found.is_some()
    }
}

/// Graph snapshot: highlighted node plus BFS queue contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphFrame {
    /// Node currently being visited.
    pub highlight: Option<NodeId>,
    /// Pending nodes, front first.
    pub queue: Vec<NodeId>,
}

/// One render-worthy snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frame {
    /// Bar view.
    Array(ArrayFrame),
    /// Graph view.
    Graph(GraphFrame),
}

impl Frame {
    /// Array frame accessor.
    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayFrame> {
        match self {
            Self::Array(frame) => Some(frame),
            Self::Graph(_) => None,
        }
    }

    /// Graph frame accessor.
    #[must_use]
    pub const fn as_graph(&self) -> Option<&GraphFrame> {
        match self {
            Self::Graph(frame) => Some(frame),
            Self::Array(_) => None,
        }
    }
}

/// Which visualizer the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Bars (bubble sort, binary search).
    Array,
    /// Nodes and edges (BFS).
    Graph,
}

/// Terminal notifications for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// Binary search exhausted its bounds.
    TargetNotFound {
        /// The value searched for.
        target: f64,
    },
    /// Search target was not a number.
    InvalidInput {
        /// The rejected text.
        input: String,
    },
}

/// Everything the core sends to the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VizEvent {
    /// Render this frame.
    Frame {
        /// The snapshot.
        frame: Frame,
    },
    /// Enable or disable user controls.
    Controls {
        /// `false` while a run is in progress.
        enabled: bool,
    },
    /// Switch between array and graph views.
    ViewChanged {
        /// View to show.
        view: View,
    },
    /// Show a notice.
    Notice {
        /// The notice.
        notice: Notice,
    },
}

impl From<Frame> for VizEvent {
    fn from(frame: Frame) -> Self {
        Self::Frame { frame }
    }
}

impl From<Notice> for VizEvent {
    fn from(notice: Notice) -> Self {
        Self::Notice { notice }
    }
}

/// Receives frames as an algorithm emits them.
pub trait FrameSink: Send {
    /// Accept one frame.
    fn emit(&mut self, frame: Frame);
}

impl FrameSink for Vec<Frame> {
    fn emit(&mut self, frame: Frame) {
        self.push(frame);
    }
}

impl FrameSink for mpsc::UnboundedSender<VizEvent> {
    fn emit(&mut self, frame: Frame) {
        // A closed receiver means nobody is watching; the run still completes.
        let _ = self.send(frame.into());
    }
}

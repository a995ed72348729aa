//! The three stepping procedures.
//!
//! Each procedure is a linear `async fn` that mutates or reads a model,
//! emits a [`Frame`](crate::engine::Frame) after every logical step and
//! awaits the [`Pacer`](crate::engine::Pacer) in between.
//!
//! 1. [`bubble_sort`] - every comparison and swap
//! 2. [`binary_search`] - sorts first, then probes midpoints
//! 3. [`bfs`] - level-order traversal with a visible queue

pub mod bfs;
pub mod binary_search;
pub mod bubble_sort;

pub use bfs::{bfs, Traversal};
pub use binary_search::{binary_search, parse_target, SearchOutcome};
pub use bubble_sort::{bubble_sort, SortReport};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::View;
use crate::error::VizError;

/// Algorithm selectable in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Bubble sort over the array.
    #[default]
    BubbleSort,
    /// Binary search over the sorted array.
    BinarySearch,
    /// Breadth-first search over the graph.
    Bfs,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Self; 3] = [Self::BubbleSort, Self::BinarySearch, Self::Bfs];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BubbleSort => "bubble-sort",
            Self::BinarySearch => "binary-search",
            Self::Bfs => "bfs",
        }
    }

    /// View the algorithm draws into.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::BubbleSort | Self::BinarySearch => View::Array,
            Self::Bfs => View::Graph,
        }
    }

    /// Whether the run needs a search target.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, Self::BinarySearch)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" | "bubble_sort" => Ok(Self::BubbleSort),
            "binary" | "binary-search" | "binary_search" => Ok(Self::BinarySearch),
            "bfs" => Ok(Self::Bfs),
            _ => Err(VizError::invalid_input(s)),
        }
    }
}

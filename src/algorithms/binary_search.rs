//! Binary search over the (sorted) array.
//!
//! The array is sorted in place first, so it stays sorted after the run
//! until the next generate.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::engine::{ArrayFrame, Frame, FrameSink, Pacer, SpeedControl};
use crate::error::{VizError, VizResult};
use crate::models::ArrayModel;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// `values[index] == target` in the sorted array.
    Found {
        /// Index into the sorted array.
        index: usize,
        /// Midpoints probed, including the match.
        probes: u32,
    },
    /// Bounds crossed without a match.
    NotFound {
        /// Midpoints probed.
        probes: u32,
    },
}

impl SearchOutcome {
    /// Matched index, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Found { index, .. } => Some(*index),
            Self::NotFound { .. } => None,
        }
    }
}

/// Parse user text as a search target.
///
/// # Errors
///
/// Returns `VizError::InvalidInput` unless the trimmed text is a finite
/// number.
pub fn parse_target(input: &str) -> VizResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| VizError::invalid_input(input))
}

/// Sort `array`, then binary-search it for `target`.
///
/// Emits the sorted array, then one frame per probed midpoint followed by a
/// pause. A match emits a final frame marking the midpoint as found.
pub async fn binary_search<S, P>(
    array: &mut ArrayModel,
    target: f64,
    sink: &mut S,
    pacer: &P,
    speed: &SpeedControl,
) -> SearchOutcome
where
    S: FrameSink,
    P: Pacer,
{
    array.sort_ascending();
    sink.emit(Frame::Array(ArrayFrame::plain(array.values())));

    // `right` is exclusive; the probed midpoint equals floor((left + r) / 2)
    // for the inclusive bound r = right - 1.
    let mut left = 0;
    let mut right = array.len();
    let mut probes = 0;

    while left < right {
        let mid = left + (right - left - 1) / 2;
        probes += 1;

        sink.emit(Frame::Array(ArrayFrame::new(array.values(), &[mid])));
        pacer.pause(speed.step()).await;

        match f64::from(array.values()[mid]).partial_cmp(&target) {
            Some(Ordering::Equal) => {
                sink.emit(Frame::Array(ArrayFrame::found(array.values(), mid)));
                return SearchOutcome::Found { index: mid, probes };
            }
            Some(Ordering::Less) => left = mid + 1,
            Some(Ordering::Greater) | None => right = mid,
        }
    }

    SearchOutcome::NotFound { probes }
}

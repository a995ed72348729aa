//! Bubble sort, one comparison per frame.
//!
//! Every comparison of `data[j]` and `data[j + 1]` is shown, and every swap
//! is shown again. Worst case is O(n²) frames.

use serde::{Deserialize, Serialize};

use crate::engine::{ArrayFrame, Frame, FrameSink, Pacer, SpeedControl};
use crate::error::VizResult;
use crate::models::ArrayModel;

/// Counters collected during a bubble sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortReport {
    /// Pairs compared.
    pub comparisons: u64,
    /// Swaps performed.
    pub swaps: u64,
}

/// Sort `array` ascending, emitting a frame before each comparison and
/// after each swap, then a final frame with no highlights.
///
/// # Errors
///
/// Returns `VizError::IndexOutOfRange` if a swap index is invalid, which
/// the loop bounds rule out.
pub async fn bubble_sort<S, P>(
    array: &mut ArrayModel,
    sink: &mut S,
    pacer: &P,
    speed: &SpeedControl,
) -> VizResult<SortReport>
where
    S: FrameSink,
    P: Pacer,
{
    let n = array.len();
    let mut report = SortReport::default();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            sink.emit(Frame::Array(ArrayFrame::new(array.values(), &[j, j + 1])));
            pacer.pause(speed.step()).await;

            report.comparisons += 1;
            if array.values()[j] > array.values()[j + 1] {
                array.swap(j, j + 1)?;
                report.swaps += 1;
                sink.emit(Frame::Array(ArrayFrame::new(array.values(), &[j, j + 1])));
                pacer.pause(speed.step()).await;
            }
        }
    }

    sink.emit(Frame::Array(ArrayFrame::plain(array.values())));
    Ok(report)
}

//! Step pacing.
//!
//! Algorithms call [`Pacer::pause`] after emitting a frame. The pause is an
//! explicit suspension point: the stepping procedure stays a linear `async`
//! function while the rest of the program keeps running.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Suspends an algorithm between visual steps.
pub trait Pacer: Clone + Send + Sync + 'static {
    /// Suspend the caller for `duration`. Always resolves.
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real-time pacer backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Pacer that resolves immediately and records every requested pause.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    /// Create an empty recording pacer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, in order.
    #[must_use]
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// Number of pauses requested so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pauses.lock().map(|p| p.len()).unwrap_or_default()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        if let Ok(mut pauses) = self.pauses.lock() {
            pauses.push(duration);
        }
        std::future::ready(())
    }
}

/// Live, user-adjustable step duration in milliseconds.
///
/// Clones share the value. Readers see the value current at the moment they
/// schedule a pause; a pause already scheduled is unaffected by later changes.
#[derive(Debug, Clone)]
pub struct SpeedControl {
    millis: Arc<AtomicU64>,
    min_ms: u64,
    max_ms: u64,
}

impl SpeedControl {
    /// Create a control clamped to `[min_ms, max_ms]`.
    #[must_use]
    pub fn new(initial_ms: u64, min_ms: u64, max_ms: u64) -> Self {
        let (min_ms, max_ms) = (min_ms.min(max_ms), max_ms.max(min_ms));
        Self {
            millis: Arc::new(AtomicU64::new(initial_ms.clamp(min_ms, max_ms))),
            min_ms,
            max_ms,
        }
    }

    /// Set a new speed, clamped to the configured bounds. Returns the
    /// effective value.
    pub fn set_ms(&self, ms: u64) -> u64 {
        let clamped = ms.clamp(self.min_ms, self.max_ms);
        self.millis.store(clamped, Ordering::Release);
        clamped
    }

    /// Current speed in milliseconds.
    #[must_use]
    pub fn ms(&self) -> u64 {
        self.millis.load(Ordering::Acquire)
    }

    /// Current step duration.
    #[must_use]
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.ms())
    }

    /// Configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> (u64, u64) {
        (self.min_ms, self.max_ms)
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(100, 1, 2000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_clamped() {
        let speed = SpeedControl::new(5000, 10, 1000);
        assert_eq!(speed.ms(), 1000);
        assert_eq!(speed.set_ms(0), 10);
        assert_eq!(speed.ms(), 10);
    }

    #[test]
    fn test_speed_shared_between_clones() {
        let speed = SpeedControl::default();
        let view_side = speed.clone();
        view_side.set_ms(250);
        assert_eq!(speed.step(), Duration::from_millis(250));
    }

    #[test]
    fn test_swapped_bounds_normalized() {
        let speed = SpeedControl::new(50, 100, 10);
        assert_eq!(speed.bounds(), (10, 100));
        assert_eq!(speed.ms(), 50);
    }

    #[tokio::test]
    async fn test_recording_pacer_records() {
        let pacer = RecordingPacer::new();
        pacer.pause(Duration::from_millis(3)).await;
        pacer.pause(Duration::from_millis(7)).await;
        assert_eq!(
            pacer.pauses(),
            vec![Duration::from_millis(3), Duration::from_millis(7)]
        );
        assert_eq!(pacer.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_pacer_resumes_after_duration() {
        let start = tokio::time::Instant::now();
        TokioPacer.pause(Duration::from_millis(600)).await;
        assert!(start.elapsed() >= Duration::from_millis(600));
    }
}

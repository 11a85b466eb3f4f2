//! Pointer source boundary
//!
//! The engine consumes a single normalized horizontal coordinate from an
//! external hand tracker. A missed sample is a transient sensor gap, not
//! an error: the last known target simply persists for that tick.

use crate::consts::POINTER_ALPHA;

/// External source of the tracked hand position.
///
/// `sample` is a synchronous, best-effort read taken once per frame; it
/// must not retry within a tick.
pub trait PointerSource {
    /// Latest horizontal position, normalized to [0, 1], or `None` when
    /// no hand landmark is available this tick
    fn sample(&mut self) -> Option<f32>;

    /// Whether a hand is currently visible at all. Used only by the
    /// Menu state as a boolean start gate.
    fn presence_detected(&mut self) -> bool;
}

/// Exponential smoothing filter for the raw pointer coordinate.
///
/// `filtered = alpha * raw + (1 - alpha) * filtered` damps per-frame
/// jitter from the upstream tracker.
#[derive(Debug, Clone, Copy)]
pub struct PointerFilter {
    alpha: f32,
    filtered: f32,
}

impl PointerFilter {
    pub fn new(initial: f32) -> Self {
        Self {
            alpha: POINTER_ALPHA,
            filtered: initial,
        }
    }

    /// Feed one raw sample, returning the smoothed value
    pub fn apply(&mut self, raw: f32) -> f32 {
        self.filtered = self.alpha * raw + (1.0 - self.alpha) * self.filtered;
        self.filtered
    }

    /// Last smoothed value
    pub fn value(&self) -> f32 {
        self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_damps_step_change() {
        let mut filter = PointerFilter::new(0.0);
        let first = filter.apply(100.0);
        assert!((first - 80.0).abs() < 1e-4);
        // Converges toward the raw value over repeated samples
        for _ in 0..50 {
            filter.apply(100.0);
        }
        assert!((filter.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_filter_holds_value_between_samples() {
        let mut filter = PointerFilter::new(450.0);
        filter.apply(500.0);
        let held = filter.value();
        // No new sample, no change
        assert_eq!(filter.value(), held);
    }
}

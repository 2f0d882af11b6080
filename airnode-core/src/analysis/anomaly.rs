//! Adaptive Error-Variance Anomaly Detector
//!
//! A fixed threshold on raw residuals needs retuning whenever a sensor's
//! noise floor drifts. Instead the detector tracks the squared one-step
//! residual with an exponential moving average and flags residuals that are
//! large *relative to recent typical error*:
//!
//! ```text
//! e²        = error²
//! ema'      = γ·e² + (1-γ)·ema
//! anomaly   = e² > M · max(ema', ε)
//! ```
//!
//! With `M = 4` this is roughly a 2-sigma test on the residual.
//!
//! The first update seeds the baseline and never flags; no flag is raised
//! before [`ANOMALY_WARMUP_UPDATES`] residuals have been absorbed.

use crate::constants::analysis::{
    ANOMALY_EPSILON, ANOMALY_GAMMA, ANOMALY_MULTIPLIER, ANOMALY_WARMUP_UPDATES,
};
use crate::errors::{AnalysisError, AnalysisResult};

/// Squared-error baseline for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyDetector {
    ema_squared_error: f32,
    initialized: bool,
    update_count: u32,
    gamma: f32,
    multiplier: f32,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::new(ANOMALY_GAMMA, ANOMALY_MULTIPLIER)
    }
}

impl AnomalyDetector {
    /// Create a detector with EMA gain `gamma` and threshold `multiplier`
    pub fn new(gamma: f32, multiplier: f32) -> Self {
        Self {
            ema_squared_error: 0.0,
            initialized: false,
            update_count: 0,
            gamma,
            multiplier,
        }
    }

    /// Absorb a residual and report whether it is anomalous
    pub fn update(&mut self, error: f32) -> bool {
        let e2 = error * error;

        if !self.initialized {
            self.ema_squared_error = e2;
            self.initialized = true;
            self.update_count = 1;
            return false;
        }

        self.ema_squared_error = self.gamma * e2 + (1.0 - self.gamma) * self.ema_squared_error;
        self.update_count = self.update_count.saturating_add(1);

        if self.update_count < ANOMALY_WARMUP_UPDATES {
            return false;
        }

        e2 > self.multiplier * self.baseline()
    }

    /// Forget the baseline; the next residual starts a fresh one
    pub fn reset(&mut self) {
        self.ema_squared_error = 0.0;
        self.initialized = false;
        self.update_count = 0;
    }

    /// Current squared-error baseline, floored at epsilon
    pub fn baseline(&self) -> f32 {
        if self.ema_squared_error < ANOMALY_EPSILON {
            ANOMALY_EPSILON
        } else {
            self.ema_squared_error
        }
    }

    /// True once the detector may raise flags
    pub fn is_ready(&self) -> bool {
        self.update_count >= ANOMALY_WARMUP_UPDATES
    }

    /// Succeeds once warm-up is over and results are meaningful
    pub fn require_ready(&self) -> AnalysisResult<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(AnalysisError::AnomalyNotReady {
                updates: self.update_count,
                required: ANOMALY_WARMUP_UPDATES,
            })
        }
    }

    /// Errors observed since creation or the last reset
    pub fn update_count(&self) -> u32 {
        self.update_count
    }

    /// Threshold multiplier on the error baseline
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn warmed(residual: f32, n: usize) -> AnomalyDetector {
        let mut detector = AnomalyDetector::default();
        for _ in 0..n {
            detector.update(residual);
        }
        detector
    }

    #[test]
    fn cold_start_never_flags() {
        let mut detector = AnomalyDetector::default();
        assert!(!detector.update(1.0e6));
        assert!(!detector.update(1.0e6));
        assert!(matches!(
            detector.require_ready(),
            Err(AnalysisError::AnomalyNotReady { updates: 2, required: 3 })
        ));
    }

    #[test]
    fn spike_after_quiet_baseline_flags() {
        let mut detector = warmed(1.0, 10);
        assert!(detector.is_ready());
        assert!(detector.update(50.0));
    }

    #[test]
    fn typical_residual_does_not_flag() {
        let mut detector = warmed(2.0, 10);
        assert!(!detector.update(2.0));
        assert!(!detector.update(-2.5));
    }

    #[test]
    fn flat_signal_baseline_is_floored() {
        let mut detector = warmed(0.0, 10);
        assert_eq!(detector.baseline(), ANOMALY_EPSILON);
        // A small residual still dwarfs a near-zero baseline
        assert!(detector.update(0.1));
    }

    #[test]
    fn reset_restarts_cold() {
        let mut detector = warmed(1.0, 10);
        detector.reset();
        assert_eq!(detector.update_count(), 0);
        assert!(!detector.update(1000.0));
        assert!(!detector.update(1000.0));
    }

    proptest! {
        #[test]
        fn first_two_updates_never_flag(a in -1.0e5f32..1.0e5, b in -1.0e5f32..1.0e5) {
            let mut detector = AnomalyDetector::default();
            prop_assert!(!detector.update(a));
            prop_assert!(!detector.update(b));
        }

        #[test]
        fn flag_matches_guard_band(
            history in proptest::collection::vec(-50.0f32..50.0, 3..20),
            error in -500.0f32..500.0,
        ) {
            let mut detector = AnomalyDetector::default();
            for e in history {
                detector.update(e);
            }
            let flagged = detector.update(error);
            let expected = error * error > detector.multiplier() * detector.baseline();
            prop_assert_eq!(flagged, expected);
        }
    }
}

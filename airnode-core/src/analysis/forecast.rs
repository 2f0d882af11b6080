//! Double Exponential (Holt) Forecaster
//!
//! ## Model
//!
//! Holt's linear method tracks two quantities per channel:
//!
//! ```text
//! level'  = α·x + (1-α)·(level + trend)
//! trend'  = β·(level' - level) + (1-β)·trend
//! ŷ(k)    = level + k·trend
//! ```
//!
//! The update is O(1) in time and space, so one instance per channel costs
//! 24 bytes and a handful of multiplies per cycle.
//!
//! ## Cold Start
//!
//! The first observation seeds the level with a zero trend, so every horizon
//! predicts that observation until a second one arrives. A model is *stable*
//! once it has absorbed [`FORECAST_STABLE_UPDATES`] observations; callers use
//! that to gate anomaly detection on the residual.
//!
//! ## Horizons
//!
//! `k` counts cycles, not time. The caller converts a time horizon into a
//! step count using the sampling period (see
//! [`NodeConfig::forecast_steps`](crate::config::NodeConfig::forecast_steps)).

use crate::constants::analysis::{FORECAST_ALPHA, FORECAST_BETA, FORECAST_STABLE_UPDATES};
use crate::errors::{AnalysisError, AnalysisResult};

/// Two-parameter recursive trend model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecaster {
    level: f32,
    trend: f32,
    initialized: bool,
    update_count: u32,
    alpha: f32,
    beta: f32,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(FORECAST_ALPHA, FORECAST_BETA)
    }
}

impl Forecaster {
    /// Create an empty model with level gain `alpha` and trend gain `beta`
    pub fn new(alpha: f32, beta: f32) -> Self {
        Self {
            level: 0.0,
            trend: 0.0,
            initialized: false,
            update_count: 0,
            alpha,
            beta,
        }
    }

    /// Absorb one observation
    pub fn update(&mut self, x: f32) {
        if !self.initialized {
            self.level = x;
            self.trend = 0.0;
            self.initialized = true;
            self.update_count = 1;
            return;
        }

        let prev_level = self.level;
        self.level = self.alpha * x + (1.0 - self.alpha) * (self.level + self.trend);
        self.trend = self.beta * (self.level - prev_level) + (1.0 - self.beta) * self.trend;
        self.update_count = self.update_count.saturating_add(1);
    }

    /// Prediction `k` cycles ahead, `None` before the first observation
    pub fn predict(&self, k: u32) -> Option<f32> {
        if !self.initialized {
            return None;
        }
        Some(self.level + k as f32 * self.trend)
    }

    /// Prediction clamped into `[min, max]`
    ///
    /// Keeps long-horizon extrapolations of a steep trend physically
    /// plausible.
    pub fn predict_clamped(&self, k: u32, min: f32, max: f32) -> Option<f32> {
        let pred = self.predict(k)?;
        if pred.is_nan() {
            return None;
        }
        if pred < min {
            Some(min)
        } else if pred > max {
            Some(max)
        } else {
            Some(pred)
        }
    }

    /// Prediction that is only returned once the model is stable
    pub fn try_predict(&self, k: u32) -> AnalysisResult<f32> {
        if !self.is_stable() {
            return Err(AnalysisError::ForecastNotReady {
                updates: self.update_count,
                required: FORECAST_STABLE_UPDATES,
            });
        }
        self.predict(k).ok_or(AnalysisError::ForecastNotReady {
            updates: self.update_count,
            required: FORECAST_STABLE_UPDATES,
        })
    }

    /// True once enough observations have been absorbed
    pub fn is_stable(&self) -> bool {
        self.initialized && self.update_count >= FORECAST_STABLE_UPDATES
    }

    /// Whether the first observation has arrived
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Smoothed level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Smoothed trend per step
    pub fn trend(&self) -> f32 {
        self.trend
    }

    /// Observations absorbed so far
    pub fn update_count(&self) -> u32 {
        self.update_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_model_has_no_prediction() {
        let model = Forecaster::default();
        assert_eq!(model.predict(1), None);
        assert_eq!(model.predict_clamped(1, 0.0, 10.0), None);
        assert!(!model.is_stable());
        assert!(matches!(
            model.try_predict(1),
            Err(AnalysisError::ForecastNotReady { updates: 0, required: 5 })
        ));
    }

    #[test]
    fn first_update_predicts_itself_at_every_horizon() {
        let mut model = Forecaster::default();
        model.update(420.0);

        assert_eq!(model.trend(), 0.0);
        for k in [0, 1, 10, 360] {
            assert_eq!(model.predict(k), Some(420.0));
        }
    }

    #[test]
    fn second_update_follows_holt_recursion() {
        let mut model = Forecaster::new(0.5, 0.2);
        model.update(100.0);
        model.update(110.0);

        // level = 0.5*110 + 0.5*(100 + 0) = 105
        // trend = 0.2*(105 - 100) + 0.8*0 = 1
        assert!((model.level() - 105.0).abs() < 1e-4);
        assert!((model.trend() - 1.0).abs() < 1e-4);
        assert!((model.predict(10).unwrap() - 115.0).abs() < 1e-3);
    }

    #[test]
    fn stability_after_five_updates() {
        let mut model = Forecaster::default();
        for n in 1..=4 {
            model.update(1.0);
            assert_eq!(model.update_count(), n);
            assert!(!model.is_stable(), "stable after {} updates", n);
        }
        model.update(1.0);
        assert!(model.is_stable());
        assert!(model.try_predict(1).is_ok());

        model.update(1.0);
        assert!(model.is_stable());
    }

    #[test]
    fn constant_input_converges() {
        let mut model = Forecaster::default();
        model.update(500.0);
        model.update(800.0);
        for _ in 0..200 {
            model.update(600.0);
        }
        assert!((model.level() - 600.0).abs() < 1e-2);
        assert!(model.trend().abs() < 1e-2);
    }

    #[test]
    fn clamping_limits_steep_trends() {
        let mut model = Forecaster::default();
        for x in [400.0, 500.0, 600.0, 700.0, 800.0] {
            model.update(x);
        }
        assert_eq!(model.predict_clamped(360, 300.0, 1600.0), Some(1600.0));

        let mut falling = Forecaster::default();
        for x in [800.0, 700.0, 600.0, 500.0, 400.0] {
            falling.update(x);
        }
        assert_eq!(falling.predict_clamped(360, 300.0, 1600.0), Some(300.0));
    }

    proptest! {
        #[test]
        fn single_update_is_flat(x in -1.0e4f32..1.0e4, k in 0u32..10_000) {
            let mut model = Forecaster::default();
            model.update(x);
            prop_assert_eq!(model.predict(k), Some(x));
        }

        #[test]
        fn clamped_prediction_stays_in_range(
            xs in proptest::collection::vec(0.0f32..5000.0, 1..40),
            k in 0u32..1000,
            lo in -100.0f32..500.0,
            width in 0.0f32..2000.0,
        ) {
            let mut model = Forecaster::default();
            for x in xs {
                model.update(x);
            }
            let hi = lo + width;
            let pred = model.predict_clamped(k, lo, hi).unwrap();
            prop_assert!(pred >= lo && pred <= hi);
        }
    }
}

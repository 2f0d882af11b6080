//! Forecaster and Anomaly Detector Tuning
//!
//! The defaults favour fast adaptation: high smoothing gains track rapid
//! air-quality swings at the cost of noise sensitivity, and the anomaly
//! detector's guard band sits at roughly two sigma.

// ===== HOLT FORECASTER =====

/// Level smoothing gain.
///
/// 0.5 weights the newest observation as heavily as the model's own
/// prediction. Lower values (0.25) give smoother but laggier levels.
pub const FORECAST_ALPHA: f32 = 0.5;

/// Trend smoothing gain.
///
/// 0.2 lets the slope re-orient within a handful of cycles.
pub const FORECAST_BETA: f32 = 0.2;

/// Updates required before a forecast is considered stable.
pub const FORECAST_STABLE_UPDATES: u32 = 5;

// ===== ANOMALY DETECTOR =====

/// Smoothing gain of the squared-error moving average.
pub const ANOMALY_GAMMA: f32 = 0.15;

/// Guard band applied to the squared-error baseline.
///
/// 4.0 on squared error corresponds to a 2-sigma test on the residual.
/// Use 9.0 for a conventional 3-sigma test.
pub const ANOMALY_MULTIPLIER: f32 = 4.0;

/// Updates required before the detector may raise a flag.
pub const ANOMALY_WARMUP_UPDATES: u32 = 3;

/// Floor for the squared-error baseline.
///
/// A perfectly flat signal drives the baseline to zero; without a floor
/// any non-zero residual would be flagged.
pub const ANOMALY_EPSILON: f32 = 1e-6;

/// Consecutive anomalous cycles after which the baseline is rebuilt.
///
/// A sustained shift in a channel's noise level otherwise keeps the detector
/// firing until the moving average catches up.
pub const ANOMALY_RESET_AFTER: u32 = 10;

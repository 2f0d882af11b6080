//! Constants for AirNode Core
//!
//! Every tuning value used by the analysis pipeline lives here with its unit
//! and where it came from. Components take their parameters from
//! [`NodeConfig`](crate::config::NodeConfig), whose defaults are these values.
//!
//! ## Organization
//!
//! - **Analysis**: forecaster and anomaly-detector gains
//! - **Sensors**: delta thresholds, score breakpoints, plausible forecast ranges
//! - **Time**: sampling periods, hold window, forecast horizon
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units

/// Forecaster and anomaly-detector tuning.
pub mod analysis;

/// Per-channel thresholds and ranges.
pub mod sensors;

/// Sampling periods and horizons.
pub mod time;

pub use analysis::{
    FORECAST_ALPHA, FORECAST_BETA, FORECAST_STABLE_UPDATES,
    ANOMALY_GAMMA, ANOMALY_MULTIPLIER, ANOMALY_WARMUP_UPDATES, ANOMALY_EPSILON,
};

pub use sensors::{
    ECO2_DELTA_PPM, TVOC_DELTA_PPB, TEMP_DELTA_C, HUMIDITY_DELTA_PCT, PRESSURE_DELTA_HPA,
};

pub use time::{
    BASE_SAMPLE_INTERVAL_MS, ALERT_SAMPLE_INTERVAL_MS, ALERT_HOLD_CYCLES,
    FORECAST_HORIZON_MS,
};

/// Maximum telemetry frame size accepted by the radio link (bytes).
///
/// SX127x FIFO limit for a single LoRa packet.
pub const MAX_FRAME_LEN: usize = 255;

//! Error Types for the Analysis Core
//!
//! ## Design Philosophy
//!
//! Nothing in the analysis core is fatal. A failed sensor read, a forecaster
//! that has not seen enough history, or a detector still building its baseline
//! are all *states* the pipeline passes through every time the node boots.
//! The types here exist so callers can ask about those states explicitly
//! instead of decoding sentinel values.
//!
//! Errors follow the same embedded constraints as the rest of the crate:
//!
//! 1. **No Heap Allocation**: messages are `&'static str`, payloads are plain
//!    numbers.
//! 2. **Copy Semantics**: every error is `Copy` and cheap to return from the
//!    per-cycle hot path.
//!
//! ## Error Categories
//!
//! ### Analysis states ([`AnalysisError`])
//! - `ChannelUnavailable`: the sensor read for a channel failed this cycle
//! - `ForecastNotReady`: the forecaster has no (stable) prediction yet
//! - `AnomalyNotReady`: the anomaly detector is still warming up
//!
//! ### Configuration ([`ConfigError`])
//! Raised once at startup by [`NodeConfig::validate`](crate::config::NodeConfig::validate).
//!
//! ### Sensor faults ([`SensorFault`])
//! Reported by sensor drivers; the acquisition layer turns them into absent
//! fields and never forwards them into the analysis.
//!
//! ```rust
//! use airnode_core::{AnalysisError, Forecaster};
//!
//! let model = Forecaster::new(0.5, 0.2);
//! match model.try_predict(1) {
//!     Ok(value) => { let _ = value; }
//!     Err(AnalysisError::ForecastNotReady { .. }) => {
//!         // Cold start - nothing to report yet
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

use crate::channel::Channel;

/// Result type for analysis queries
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Well-defined "not available" outcomes of the analysis core
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// No reading for the channel this cycle
    #[error("Channel {channel} unavailable")]
    ChannelUnavailable {
        /// Channel whose reading failed
        channel: Channel,
    },

    /// Forecaster has not seen enough observations
    #[error("Forecast not ready: {updates} of {required} updates")]
    ForecastNotReady {
        /// Observations absorbed so far
        updates: u32,
        /// Observations needed before the forecast is meaningful
        required: u32,
    },

    /// Anomaly detector is still establishing its baseline
    #[error("Anomaly detector not ready: {updates} of {required} updates")]
    AnomalyNotReady {
        /// Residuals absorbed so far
        updates: u32,
        /// Residuals needed before a flag can be raised
        required: u32,
    },
}

/// Invalid node configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Smoothing gain outside (0, 1]
    #[error("Gain {name} = {value} outside (0, 1]")]
    InvalidGain {
        /// Name of the gain
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// Lower bound above upper bound, or a non-positive threshold
    #[error("Invalid range: {name}")]
    InvalidRange {
        /// Setting that failed
        name: &'static str,
    },

    /// Sampling intervals inconsistent
    #[error("Invalid interval: {reason}")]
    InvalidInterval {
        /// Which constraint was broken
        reason: &'static str,
    },

    /// Forecast horizon shorter than one base sampling period
    #[error("Forecast horizon shorter than one sampling period")]
    InvalidHorizon,

    /// Node identifier does not fit the fixed-capacity buffer
    #[error("Node id longer than {max} bytes")]
    NodeIdTooLong {
        /// Buffer capacity in bytes
        max: usize,
    },
}

/// Fault reported by a sensor driver
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorFault {
    /// Bus transaction failed (NACK, arbitration loss)
    #[error("Sensor bus error")]
    BusError,

    /// Sensor not initialised or still heating up
    #[error("Sensor not ready")]
    NotReady,

    /// Measurement did not complete in time
    #[error("Sensor measurement timed out")]
    Timeout,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnalysisError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ChannelUnavailable { channel } =>
                defmt::write!(fmt, "Channel {} unavailable", channel),
            Self::ForecastNotReady { updates, required } =>
                defmt::write!(fmt, "Forecast not ready ({}/{})", updates, required),
            Self::AnomalyNotReady { updates, required } =>
                defmt::write!(fmt, "Anomaly not ready ({}/{})", updates, required),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidGain { name, value } =>
                defmt::write!(fmt, "Gain {} = {} outside (0, 1]", name, value),
            Self::InvalidRange { name } =>
                defmt::write!(fmt, "Invalid range: {}", name),
            Self::InvalidInterval { reason } =>
                defmt::write!(fmt, "Invalid interval: {}", reason),
            Self::InvalidHorizon =>
                defmt::write!(fmt, "Forecast horizon too short"),
            Self::NodeIdTooLong { max } =>
                defmt::write!(fmt, "Node id longer than {} bytes", max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorFault {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::BusError => defmt::write!(fmt, "Sensor bus error"),
            Self::NotReady => defmt::write!(fmt, "Sensor not ready"),
            Self::Timeout => defmt::write!(fmt, "Sensor timeout"),
        }
    }
}

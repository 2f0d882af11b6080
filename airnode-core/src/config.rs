//! Node Configuration
//!
//! All tuning for a node lives in one [`NodeConfig`], created once at startup
//! and handed to the [`CyclePipeline`](crate::pipeline::CyclePipeline).
//! Defaults come from [`constants`](crate::constants); deployments override
//! individual values through the `with_*` builders.
//!
//! ```rust
//! use airnode_core::config::{NodeConfig, SamplingConfig, MissingPolicy};
//!
//! let config = NodeConfig::default()
//!     .with_sampling(SamplingConfig {
//!         base_interval_ms: 60_000,
//!         alert_interval_ms: 5_000,
//!         hold_cycles: 12,
//!     })
//!     .with_missing_policy(MissingPolicy::CarryForward);
//!
//! config.validate()?;
//! assert_eq!(config.forecast_steps(), 60);
//! # Ok::<(), airnode_core::ConfigError>(())
//! ```

use crate::constants::{analysis, sensors, time};
use crate::errors::ConfigError;

/// Capacity of the node identifier (bytes)
pub const NODE_ID_CAPACITY: usize = 16;

/// Node identifier stored inline
pub type NodeId = heapless::String<NODE_ID_CAPACITY>;

/// Node id baked in at compile time, overridable with `AIRNODE_NODE_ID`
pub const DEFAULT_NODE_ID: &str = match option_env!("AIRNODE_NODE_ID") {
    Some(id) => id,
    None => "node-8",
};

/// What to do with a gas channel whose reading failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingPolicy {
    /// Leave the channel's models untouched for the cycle
    #[default]
    Skip,
    /// Feed the channel's last observed value to its models
    CarryForward,
}

/// Tuning for one forecasted channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelConfig {
    /// Forecaster level gain
    pub alpha: f32,
    /// Forecaster trend gain
    pub beta: f32,
    /// Squared-error moving average gain
    pub gamma: f32,
    /// Guard band on the squared-error baseline
    pub multiplier: f32,
    /// Lower bound of a plausible forecast
    pub clamp_min: f32,
    /// Upper bound of a plausible forecast
    pub clamp_max: f32,
    /// Rebuild the anomaly baseline after this many consecutive flags
    pub reset_after_consecutive: Option<u32>,
}

impl ChannelConfig {
    /// Defaults for the eCO2 channel
    pub fn eco2() -> Self {
        Self {
            clamp_min: sensors::ECO2_FORECAST_MIN_PPM,
            clamp_max: sensors::ECO2_FORECAST_MAX_PPM,
            ..Self::base()
        }
    }

    /// Defaults for the TVOC channel
    pub fn tvoc() -> Self {
        Self {
            clamp_min: sensors::TVOC_FORECAST_MIN_PPB,
            clamp_max: sensors::TVOC_FORECAST_MAX_PPB,
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            alpha: analysis::FORECAST_ALPHA,
            beta: analysis::FORECAST_BETA,
            gamma: analysis::ANOMALY_GAMMA,
            multiplier: analysis::ANOMALY_MULTIPLIER,
            clamp_min: f32::MIN,
            clamp_max: f32::MAX,
            reset_after_consecutive: Some(analysis::ANOMALY_RESET_AFTER),
        }
    }

    /// Replace the forecaster gains
    pub fn with_gains(mut self, alpha: f32, beta: f32) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Replace the anomaly EMA gain and multiplier
    pub fn with_anomaly(mut self, gamma: f32, multiplier: f32) -> Self {
        self.gamma = gamma;
        self.multiplier = multiplier;
        self
    }

    /// Replace the forecast clamp range
    pub fn with_clamp(mut self, min: f32, max: f32) -> Self {
        self.clamp_min = min;
        self.clamp_max = max;
        self
    }

    /// Rebuild the baseline after this many anomalies in a row, or never
    pub fn with_reset_after(mut self, cycles: Option<u32>) -> Self {
        self.reset_after_consecutive = cycles;
        self
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        check_gain("alpha", self.alpha)?;
        check_gain("beta", self.beta)?;
        check_gain("gamma", self.gamma)?;

        if !(self.multiplier > 0.0) {
            return Err(ConfigError::InvalidRange { name: "multiplier" });
        }
        if !(self.clamp_min <= self.clamp_max) {
            return Err(ConfigError::InvalidRange { name });
        }
        if self.reset_after_consecutive == Some(0) {
            return Err(ConfigError::InvalidRange { name: "reset_after_consecutive" });
        }
        Ok(())
    }
}

fn check_gain(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // Negated comparison also rejects NaN
    if !(value > 0.0 && value <= 1.0) {
        return Err(ConfigError::InvalidGain { name, value });
    }
    Ok(())
}

/// Per-channel thresholds for the delta detector
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaThresholds {
    /// eCO2 jump (ppm)
    pub eco2: f32,
    /// TVOC jump (ppb)
    pub tvoc: f32,
    /// Temperature jump (°C)
    pub temperature: f32,
    /// Humidity jump (%RH)
    pub humidity: f32,
    /// Pressure jump (hPa)
    pub pressure: f32,
}

impl Default for DeltaThresholds {
    fn default() -> Self {
        Self {
            eco2: sensors::ECO2_DELTA_PPM,
            tvoc: sensors::TVOC_DELTA_PPB,
            temperature: sensors::TEMP_DELTA_C,
            humidity: sensors::HUMIDITY_DELTA_PCT,
            pressure: sensors::PRESSURE_DELTA_HPA,
        }
    }
}

impl DeltaThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        let all = [self.eco2, self.tvoc, self.temperature, self.humidity, self.pressure];
        if all.iter().any(|t| !(*t > 0.0)) {
            return Err(ConfigError::InvalidRange { name: "delta threshold" });
        }
        Ok(())
    }
}

/// Adaptive sampling cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Interval while conditions are normal (ms)
    pub base_interval_ms: u32,
    /// Interval while alerting (ms)
    pub alert_interval_ms: u32,
    /// Cycles held at the alert interval after the last alert
    pub hold_cycles: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: time::BASE_SAMPLE_INTERVAL_MS,
            alert_interval_ms: time::ALERT_SAMPLE_INTERVAL_MS,
            hold_cycles: time::ALERT_HOLD_CYCLES,
        }
    }
}

impl SamplingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_interval_ms == 0 || self.alert_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval { reason: "interval must be non-zero" });
        }
        if self.alert_interval_ms > self.base_interval_ms {
            return Err(ConfigError::InvalidInterval {
                reason: "alert interval longer than base interval",
            });
        }
        Ok(())
    }
}

/// Complete configuration of a node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeConfig {
    /// Identifier carried in every telemetry frame
    pub node_id: NodeId,
    /// eCO2 channel tuning
    pub eco2: ChannelConfig,
    /// TVOC channel tuning
    pub tvoc: ChannelConfig,
    /// Delta detector thresholds
    pub delta: DeltaThresholds,
    /// Sampling cadence
    pub sampling: SamplingConfig,
    /// How far ahead the gas forecasts look (ms)
    pub forecast_horizon_ms: u64,
    /// Handling of failed gas readings
    pub missing_policy: MissingPolicy,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_id: truncated_id(DEFAULT_NODE_ID),
            eco2: ChannelConfig::eco2(),
            tvoc: ChannelConfig::tvoc(),
            delta: DeltaThresholds::default(),
            sampling: SamplingConfig::default(),
            forecast_horizon_ms: time::FORECAST_HORIZON_MS,
            missing_policy: MissingPolicy::default(),
        }
    }
}

impl NodeConfig {
    /// Set the node identifier
    pub fn with_node_id(mut self, id: &str) -> Result<Self, ConfigError> {
        self.node_id = NodeId::try_from(id)
            .map_err(|_| ConfigError::NodeIdTooLong { max: NODE_ID_CAPACITY })?;
        Ok(self)
    }

    /// Replace the eCO2 channel tuning
    pub fn with_eco2(mut self, channel: ChannelConfig) -> Self {
        self.eco2 = channel;
        self
    }

    /// Replace the TVOC channel tuning
    pub fn with_tvoc(mut self, channel: ChannelConfig) -> Self {
        self.tvoc = channel;
        self
    }

    /// Replace the delta thresholds
    pub fn with_delta(mut self, delta: DeltaThresholds) -> Self {
        self.delta = delta;
        self
    }

    /// Replace the sampling intervals
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Replace the forecast horizon
    pub fn with_forecast_horizon_ms(mut self, horizon_ms: u64) -> Self {
        self.forecast_horizon_ms = horizon_ms;
        self
    }

    /// Replace the missing-data policy
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Check every value for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.eco2.validate("eco2 forecast range")?;
        self.tvoc.validate("tvoc forecast range")?;
        self.delta.validate()?;
        self.sampling.validate()?;

        if self.forecast_horizon_ms < u64::from(self.sampling.base_interval_ms) {
            return Err(ConfigError::InvalidHorizon);
        }
        Ok(())
    }

    /// Forecast horizon expressed in base-period cycles
    ///
    /// The forecaster steps once per cycle, so one hour at a 10 s base period
    /// is 360 steps.
    pub fn forecast_steps(&self) -> u32 {
        let base = u64::from(self.sampling.base_interval_ms.max(1));
        let steps = (self.forecast_horizon_ms / base).max(1);
        u32::try_from(steps).unwrap_or(u32::MAX)
    }
}

fn truncated_id(id: &str) -> NodeId {
    let mut out = NodeId::new();
    for c in id.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

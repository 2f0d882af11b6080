//! Per-Channel Forecast and Anomaly Monitor
//!
//! Pairs a [`Forecaster`] with an [`AnomalyDetector`] and the channel's
//! tuning, so eCO2 and TVOC run exactly the same logic with different
//! constants.
//!
//! ## One Cycle
//!
//! 1. Resolve the reading: the raw value, the last observed value under
//!    [`MissingPolicy::CarryForward`], or nothing (the cycle is skipped).
//! 2. If the reading is real and the forecaster is already stable, the
//!    residual against its one-step prediction (made before this reading
//!    arrived) feeds the anomaly detector. A carried-forward value never
//!    reaches the detector and never raises an anomaly.
//! 3. The forecaster absorbs the reading.
//! 4. The horizon forecast is taken from the updated model and clamped.
//! 5. After `reset_after_consecutive` anomalous cycles in a row the anomaly
//!    baseline is rebuilt, so a lasting change in noise level stops alerting.

use crate::channel::Channel;
use crate::config::{ChannelConfig, MissingPolicy};
use crate::errors::{AnalysisError, AnalysisResult};

use super::{AnomalyDetector, Forecaster};

/// What a monitor concluded for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelOutcome {
    /// Value fed to the models, if any
    pub value: Option<f32>,
    /// One-step residual, once the forecaster was stable
    pub residual: Option<f32>,
    /// Residual judged anomalous
    pub anomaly: bool,
    /// Clamped forecast at the configured horizon
    pub forecast: Option<f32>,
}

/// Forecaster and anomaly detector for one channel
#[derive(Debug, Clone)]
pub struct ChannelMonitor {
    channel: Channel,
    config: ChannelConfig,
    horizon_steps: u32,
    forecaster: Forecaster,
    detector: AnomalyDetector,
    last_value: Option<f32>,
    consecutive_anomalies: u32,
    resets: u32,
}

impl ChannelMonitor {
    /// Monitor for `channel`, forecasting `horizon_steps` ahead
    pub fn new(channel: Channel, config: ChannelConfig, horizon_steps: u32) -> Self {
        Self {
            channel,
            config,
            horizon_steps,
            forecaster: Forecaster::new(config.alpha, config.beta),
            detector: AnomalyDetector::new(config.gamma, config.multiplier),
            last_value: None,
            consecutive_anomalies: 0,
            resets: 0,
        }
    }

    /// Run one cycle for this channel
    pub fn observe(&mut self, reading: Option<f32>, policy: MissingPolicy) -> ChannelOutcome {
        let carried = reading.is_none();
        let value = match (reading, policy) {
            (Some(x), _) => Some(x),
            (None, MissingPolicy::CarryForward) => self.last_value,
            (None, MissingPolicy::Skip) => None,
        };

        let Some(x) = value else {
            log_debug!("{}: no reading, models untouched", self.channel.name());
            return ChannelOutcome {
                forecast: self.forecast(),
                ..ChannelOutcome::default()
            };
        };

        if carried {
            log_debug!("{}: carrying {} forward, forecaster only", self.channel.name(), x);
            self.forecaster.update(x);
            return ChannelOutcome {
                value,
                forecast: self.forecast(),
                ..ChannelOutcome::default()
            };
        }

        let residual = if self.forecaster.is_stable() {
            self.forecaster.predict(1).map(|p| x - p)
        } else {
            None
        };

        let anomaly = match residual {
            Some(error) => self.detector.update(error),
            None => false,
        };

        self.forecaster.update(x);
        self.last_value = Some(x);

        if anomaly {
            log_info!(
                "anomaly: {} trend break, residual {:?} {}",
                self.channel.name(), residual, self.channel.unit()
            );
            self.consecutive_anomalies = self.consecutive_anomalies.saturating_add(1);
            self.apply_reset_policy();
        } else {
            self.consecutive_anomalies = 0;
        }

        ChannelOutcome {
            value,
            residual,
            anomaly,
            forecast: self.forecast(),
        }
    }

    fn apply_reset_policy(&mut self) {
        let Some(limit) = self.config.reset_after_consecutive else {
            return;
        };
        if self.consecutive_anomalies >= limit {
            log_warn!(
                "anomaly: {} flagged {} cycles in a row, rebuilding baseline",
                self.channel.name(), self.consecutive_anomalies
            );
            self.detector.reset();
            self.consecutive_anomalies = 0;
            self.resets = self.resets.saturating_add(1);
        }
    }

    /// Clamped forecast at the configured horizon
    pub fn forecast(&self) -> Option<f32> {
        self.forecaster
            .predict_clamped(self.horizon_steps, self.config.clamp_min, self.config.clamp_max)
    }

    /// Succeeds once both the forecast and the anomaly flag are meaningful
    pub fn require_ready(&self) -> AnalysisResult<()> {
        self.forecaster.try_predict(1)?;
        self.detector.require_ready()
    }

    /// Last value fed to the models
    pub fn last_value(&self) -> AnalysisResult<f32> {
        self.last_value
            .ok_or(AnalysisError::ChannelUnavailable { channel: self.channel })
    }

    /// Channel this monitor watches
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Trend model
    pub fn forecaster(&self) -> &Forecaster {
        &self.forecaster
    }

    /// Residual detector
    pub fn detector(&self) -> &AnomalyDetector {
        &self.detector
    }

    /// Number of times the anomaly baseline was rebuilt
    pub fn baseline_resets(&self) -> u32 {
        self.resets
    }
}

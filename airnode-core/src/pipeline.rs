//! Per-Cycle Analysis Pipeline
//!
//! ## Overview
//!
//! [`CyclePipeline`] owns every piece of analysis state on the node and
//! mutates it exactly once per sampling cycle:
//!
//! ```text
//! SensorSample → {ChannelMonitor ×2, DeltaDetector} → alert
//!              → SamplingController → CycleReport
//! ```
//!
//! The [`CycleReport`] is the only thing that leaves the pipeline. Its fields
//! are plain numbers, booleans and labels; scaling them into a transport frame
//! is the telemetry sink's job.
//!
//! ## Cycle Isolation
//!
//! `run_cycle` takes `&mut self`, so one cycle's mutations always complete
//! before the next cycle can read them. Acquisition may happen anywhere, but
//! samples are fed in one at a time.
//!
//! ```rust
//! use airnode_core::{CyclePipeline, NodeConfig, SensorSample, Status};
//!
//! let mut pipeline = CyclePipeline::new(NodeConfig::default())?;
//!
//! let report = pipeline.run_cycle(SensorSample::empty(0).with_gas(420.0, 30.0));
//! assert_eq!(report.status, Status::Normal);
//! assert_eq!(report.next_interval_ms, 10_000);
//! # Ok::<(), airnode_core::ConfigError>(())
//! ```

use core::fmt;

use crate::analysis::{
    air_quality_score, ChannelMonitor, DeltaDetector, DeltaState, SamplingController,
    SamplingMode,
};
use crate::channel::{Channel, ChannelSet};
use crate::config::NodeConfig;
use crate::errors::ConfigError;
use crate::sample::SensorSample;

/// Status label derived from the cycle's combined alert flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No alert this cycle
    #[default]
    Normal,
    /// Delta or anomaly alert this cycle
    High,
}

impl Status {
    /// `High` when `alert` is set
    pub const fn from_alert(alert: bool) -> Self {
        if alert {
            Status::High
        } else {
            Status::Normal
        }
    }

    /// Upper-case label used in reports and frames
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "NORMAL",
            Status::High => "HIGH",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the pipeline concluded in one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleReport {
    /// Cycle counter, starting at 1
    pub cycle: u32,
    /// Readings the cycle analysed
    pub sample: SensorSample,
    /// Air-quality score, absent unless both gas readings are present
    pub score: Option<u8>,
    /// eCO2 forecast at the configured horizon (ppm)
    pub eco2_forecast: Option<f32>,
    /// TVOC forecast at the configured horizon (ppb)
    pub tvoc_forecast: Option<f32>,
    /// eCO2 trend break
    pub eco2_anomaly: bool,
    /// TVOC trend break
    pub tvoc_anomaly: bool,
    /// Any channel jumped by at least its threshold
    pub delta_alert: bool,
    /// Channels that jumped
    pub delta_channels: ChannelSet,
    /// "NORMAL" / "HIGH"
    pub status: Status,
    /// Sampling cadence after this cycle
    pub mode: SamplingMode,
    /// Delay before the next cycle (ms)
    pub next_interval_ms: u32,
}

impl CycleReport {
    /// Combined alert flag
    pub fn alert(&self) -> bool {
        self.delta_alert || self.eco2_anomaly || self.tvoc_anomaly
    }
}

struct Reading(Option<f32>, usize);

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:.*}", self.1, v),
            None => f.write_str("N/A"),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.sample;
        writeln!(
            f,
            "climate | temp: {} °C | hum: {} % | pressure: {} hPa",
            Reading(s.temperature, 2), Reading(s.humidity, 1), Reading(s.pressure, 1)
        )?;
        writeln!(
            f,
            "gas     | eco2: {} ppm | tvoc: {} ppb",
            Reading(s.eco2_ppm, 0), Reading(s.tvoc_ppb, 0)
        )?;
        match self.score {
            Some(score) => write!(f, "score   | {}", score)?,
            None => f.write_str("score   | N/A")?,
        }
        writeln!(
            f,
            " | eco2 forecast: {} ppm | tvoc forecast: {} ppb",
            Reading(self.eco2_forecast, 0), Reading(self.tvoc_forecast, 0)
        )?;
        writeln!(
            f,
            "anomaly | eco2: {} | tvoc: {}",
            yes_no(self.eco2_anomaly), yes_no(self.tvoc_anomaly)
        )?;
        write!(
            f,
            "delta   | alert: {} | status: {} | interval: {} ms | cycle: {}",
            yes_no(self.delta_alert), self.status, self.next_interval_ms, self.cycle
        )
    }
}

/// Owner of all analysis state on the node
#[derive(Debug, Clone)]
pub struct CyclePipeline {
    config: NodeConfig,
    eco2: ChannelMonitor,
    tvoc: ChannelMonitor,
    delta: DeltaDetector,
    delta_state: DeltaState,
    sampling: SamplingController,
    cycle: u32,
}

impl CyclePipeline {
    /// Validate `config` and create fresh state
    pub fn new(config: NodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let steps = config.forecast_steps();
        Ok(Self {
            eco2: ChannelMonitor::new(Channel::Eco2, config.eco2, steps),
            tvoc: ChannelMonitor::new(Channel::Tvoc, config.tvoc, steps),
            delta: DeltaDetector::new(config.delta),
            delta_state: DeltaState::new(),
            sampling: SamplingController::new(config.sampling),
            cycle: 0,
            config,
        })
    }

    /// Analyse one sample and advance all state by one cycle
    pub fn run_cycle(&mut self, sample: SensorSample) -> CycleReport {
        self.cycle = self.cycle.wrapping_add(1);

        let delta_channels = self.delta.compare(&mut self.delta_state, &sample);
        let delta_alert = !delta_channels.is_empty();

        let policy = self.config.missing_policy;
        let eco2 = self.eco2.observe(sample.get(Channel::Eco2), policy);
        let tvoc = self.tvoc.observe(sample.get(Channel::Tvoc), policy);

        let alert = delta_alert || eco2.anomaly || tvoc.anomaly;
        let next_interval_ms = self.sampling.transition(alert);

        let score = match (sample.get(Channel::Eco2), sample.get(Channel::Tvoc)) {
            (Some(eco2_ppm), Some(tvoc_ppb)) => Some(air_quality_score(eco2_ppm, tvoc_ppb)),
            _ => None,
        };

        CycleReport {
            cycle: self.cycle,
            sample,
            score,
            eco2_forecast: eco2.forecast,
            tvoc_forecast: tvoc.forecast,
            eco2_anomaly: eco2.anomaly,
            tvoc_anomaly: tvoc.anomaly,
            delta_alert,
            delta_channels,
            status: Status::from_alert(alert),
            mode: self.sampling.mode(),
            next_interval_ms,
        }
    }

    /// Validated configuration
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Cycles completed so far
    pub fn cycles(&self) -> u32 {
        self.cycle
    }

    /// Monitor for a forecasted channel
    pub fn monitor(&self, channel: Channel) -> Option<&ChannelMonitor> {
        match channel {
            Channel::Eco2 => Some(&self.eco2),
            Channel::Tvoc => Some(&self.tvoc),
            _ => None,
        }
    }

    /// Sampling controller
    pub fn sampling(&self) -> &SamplingController {
        &self.sampling
    }

    /// Previous raw values seen by the delta detector
    pub fn delta_state(&self) -> &DeltaState {
        &self.delta_state
    }
}

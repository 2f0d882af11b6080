//! Common test utilities for integration tests
//!
//! This module provides:
//! - A seeded air-quality series generator
//! - Scripted sensors and recording sinks for the node runner
//! - Helpers to drive a pipeline over a whole series

#![allow(dead_code)]

use airnode_core::{
    constants::BASE_SAMPLE_INTERVAL_MS,
    pipeline::{CyclePipeline, CycleReport, Status},
    sample::SensorSample,
    time::Timestamp,
    traits::{AlertSink, Indicator, SensorSource, TelemetrySink},
};

pub mod scenarios;

/// Seeded generator for gas and climate series
pub struct AirGenerator {
    seed: u32,
    timestamp: Timestamp,
}

impl AirGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed, timestamp: 0 }
    }

    /// One sample with all five channels, gas readings rounded like the sensor reports them
    pub fn sample(&mut self, eco2: f32, tvoc: f32, noise: f32) -> SensorSample {
        let eco2 = (eco2 + self.noise(noise)).round().max(400.0);
        let tvoc = (tvoc + self.noise(noise / 4.0)).round().max(0.0);
        let sample = SensorSample::empty(self.timestamp)
            .with_climate(21.5 + self.noise(0.05), 40.0 + self.noise(0.2), 1013.0)
            .with_gas(eco2, tvoc);
        self.timestamp += u64::from(BASE_SAMPLE_INTERVAL_MS);
        sample
    }

    /// `n` samples around a constant level
    pub fn steady(&mut self, eco2: f32, tvoc: f32, noise: f32, n: usize) -> Vec<SensorSample> {
        (0..n).map(|_| self.sample(eco2, tvoc, noise)).collect()
    }

    /// `n` samples moving linearly from one level to another
    pub fn ramp(&mut self, from: (f32, f32), to: (f32, f32), n: usize) -> Vec<SensorSample> {
        (0..n)
            .map(|i| {
                let f = if n > 1 { i as f32 / (n - 1) as f32 } else { 1.0 };
                let eco2 = from.0 + (to.0 - from.0) * f;
                let tvoc = from.1 + (to.1 - from.1) * f;
                self.sample(eco2, tvoc, 0.0)
            })
            .collect()
    }

    fn noise(&mut self, amplitude: f32) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed >> 8) as f32 / (1u32 << 24) as f32;
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// Gas-only sample
pub fn gas(timestamp: Timestamp, eco2: f32, tvoc: f32) -> SensorSample {
    SensorSample::empty(timestamp).with_gas(eco2, tvoc)
}

/// Run every sample through the pipeline
pub fn run_series(pipeline: &mut CyclePipeline, samples: &[SensorSample]) -> Vec<CycleReport> {
    samples.iter().map(|s| pipeline.run_cycle(*s)).collect()
}

/// 1-based cycle numbers that raised any alert
pub fn alert_cycles(reports: &[CycleReport]) -> Vec<u32> {
    reports.iter().filter(|r| r.alert()).map(|r| r.cycle).collect()
}

/// Replays a fixed list of samples, then repeats the last one
pub struct ScriptedSensors {
    samples: Vec<SensorSample>,
    next: usize,
}

impl ScriptedSensors {
    pub fn new(samples: Vec<SensorSample>) -> Self {
        Self { samples, next: 0 }
    }
}

impl SensorSource for ScriptedSensors {
    fn acquire(&mut self, timestamp: Timestamp) -> SensorSample {
        let index = self.next.min(self.samples.len().saturating_sub(1));
        self.next += 1;
        let mut sample = self.samples.get(index).copied().unwrap_or_default();
        sample.timestamp = timestamp;
        sample
    }
}

/// Records every alert signal
#[derive(Default)]
pub struct RecordingAlert {
    pub signals: Vec<(bool, Status)>,
}

impl AlertSink for RecordingAlert {
    fn signal(&mut self, alert: bool, status: Status) {
        self.signals.push((alert, status));
    }
}

/// Lamp and buzzer state as a board would hold it
#[derive(Debug, Default)]
pub struct PanelIndicator {
    pub lamp: Option<Status>,
    pub beeps: u32,
    pub silenced: u32,
}

impl Indicator for PanelIndicator {
    fn set_lamps(&mut self, status: Status) {
        self.lamp = Some(status);
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn silence(&mut self) {
        self.silenced += 1;
    }
}

/// Keeps every report, optionally failing selected cycles
#[derive(Default)]
pub struct RecordingTelemetry {
    pub reports: Vec<CycleReport>,
    pub fail_cycles: Vec<u32>,
}

impl TelemetrySink for RecordingTelemetry {
    type Error = &'static str;

    fn publish(&mut self, report: &CycleReport) -> Result<(), Self::Error> {
        if self.fail_cycles.contains(&report.cycle) {
            return Err("radio busy");
        }
        self.reports.push(*report);
        Ok(())
    }
}

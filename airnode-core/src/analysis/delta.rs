//! Instantaneous Delta-Change Detection
//!
//! Compares each channel's reading with the previous cycle's raw reading
//! against a fixed per-channel threshold. Unlike the forecaster this needs no
//! history, so it catches an abrupt jump on the very next cycle.
//!
//! A comparison only happens when both readings are present. A missing
//! reading is never itself an alert, and it leaves an empty slot so the
//! following cycle does not compare against a stale value.

use crate::channel::{Channel, ChannelSet};
use crate::config::DeltaThresholds;
use crate::sample::SensorSample;

/// Previous cycle's raw readings, one slot per channel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaState {
    previous: [Option<f32>; Channel::ALL.len()],
}

impl DeltaState {
    /// State with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Reading stored for a channel
    pub fn previous(&self, channel: Channel) -> Option<f32> {
        self.previous[channel as usize]
    }

    fn record(&mut self, sample: &SensorSample) {
        for channel in Channel::ALL {
            self.previous[channel as usize] = sample.get(channel);
        }
    }
}

/// Fixed-threshold change detector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaDetector {
    thresholds: DeltaThresholds,
}

impl DeltaDetector {
    /// Detector using `thresholds`
    pub fn new(thresholds: DeltaThresholds) -> Self {
        Self { thresholds }
    }

    /// Jump that triggers an alert on `channel`
    pub fn threshold(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Eco2 => self.thresholds.eco2,
            Channel::Tvoc => self.thresholds.tvoc,
            Channel::Temperature => self.thresholds.temperature,
            Channel::Humidity => self.thresholds.humidity,
            Channel::Pressure => self.thresholds.pressure,
        }
    }

    /// Compare `sample` with `state`, then store `sample` as the new previous
    ///
    /// Returns the channels whose change reached their threshold.
    pub fn compare(&self, state: &mut DeltaState, sample: &SensorSample) -> ChannelSet {
        let mut tripped = ChannelSet::empty();

        for channel in Channel::ALL {
            let current = sample.get(channel);
            let previous = state.previous(channel);
            if exceeds(current, previous, self.threshold(channel)) {
                log_info!(
                    "delta: {} changed {:?} -> {:?} {}",
                    channel.name(), previous, current, channel.unit()
                );
                tripped.insert(channel);
            }
        }

        state.record(sample);
        tripped
    }
}

/// True when both readings exist and differ by at least `threshold`
pub fn exceeds(current: Option<f32>, previous: Option<f32>, threshold: f32) -> bool {
    match (current, previous) {
        (Some(current), Some(previous)) => libm::fabsf(current - previous) >= threshold,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gas(eco2: f32, tvoc: f32) -> SensorSample {
        SensorSample::empty(0).with_gas(eco2, tvoc)
    }

    #[test]
    fn first_cycle_never_alerts() {
        let detector = DeltaDetector::default();
        let mut state = DeltaState::new();
        let tripped = detector.compare(&mut state, &gas(2000.0, 900.0));
        assert!(tripped.is_empty());
        assert_eq!(state.previous(Channel::Eco2), Some(2000.0));
    }

    #[test]
    fn threshold_is_inclusive() {
        let detector = DeltaDetector::default();
        let mut state = DeltaState::new();
        detector.compare(&mut state, &gas(420.0, 50.0));

        // Exactly 30 ppm
        let tripped = detector.compare(&mut state, &gas(450.0, 50.0));
        assert!(tripped.contains(Channel::Eco2));

        // One unit below
        let tripped = detector.compare(&mut state, &gas(479.0, 50.0));
        assert!(tripped.is_empty());

        // TVOC exactly 15 ppb
        let tripped = detector.compare(&mut state, &gas(479.0, 65.0));
        assert!(tripped.contains(Channel::Tvoc));
        assert!(!tripped.contains(Channel::Eco2));
    }

    #[test]
    fn climate_boundaries() {
        let detector = DeltaDetector::default();
        let mut state = DeltaState::new();
        detector.compare(&mut state, &SensorSample::empty(0).with_climate(20.0, 40.0, 1013.0));

        let tripped = detector.compare(
            &mut state,
            &SensorSample::empty(1).with_climate(20.5, 42.0, 1014.0),
        );
        assert!(tripped.contains(Channel::Temperature));
        assert!(tripped.contains(Channel::Humidity));
        assert!(tripped.contains(Channel::Pressure));

        let tripped = detector.compare(
            &mut state,
            &SensorSample::empty(2).with_climate(20.75, 43.5, 1014.5),
        );
        assert!(tripped.is_empty());
    }

    #[test]
    fn missing_reading_skips_and_clears_slot() {
        let detector = DeltaDetector::default();
        let mut state = DeltaState::new();
        detector.compare(&mut state, &gas(420.0, 50.0));

        let mut gap = gas(420.0, 50.0);
        gap.eco2_ppm = None;
        assert!(detector.compare(&mut state, &gap).is_empty());
        assert_eq!(state.previous(Channel::Eco2), None);

        // No stale comparison against the value before the gap
        assert!(detector.compare(&mut state, &gas(900.0, 50.0)).is_empty());
    }

    #[test]
    fn exceeds_requires_both_values() {
        assert!(!exceeds(None, Some(1.0), 0.5));
        assert!(!exceeds(Some(1.0), None, 0.5));
        assert!(exceeds(Some(1.0), Some(2.0), 1.0));
        assert!(exceeds(Some(2.0), Some(1.0), 1.0));
    }
}

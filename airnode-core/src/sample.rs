//! One acquisition's worth of sensor readings

use crate::channel::Channel;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::time::Timestamp;

/// Readings captured in one cycle
///
/// Every field is either a concrete measurement or `None` when the
/// underlying read failed. A stale value is never silently reused.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSample {
    /// Milliseconds since boot when the sample was taken
    pub timestamp: Timestamp,
    /// Air temperature (°C)
    pub temperature: Option<f32>,
    /// Relative humidity (%RH)
    pub humidity: Option<f32>,
    /// Barometric pressure (hPa)
    pub pressure: Option<f32>,
    /// Equivalent CO2 (ppm)
    pub eco2_ppm: Option<f32>,
    /// Total VOC (ppb)
    pub tvoc_ppb: Option<f32>,
}

impl SensorSample {
    /// Sample with every channel absent
    pub fn empty(timestamp: Timestamp) -> Self {
        Self { timestamp, ..Self::default() }
    }

    /// Set the climate readings
    pub fn with_climate(mut self, temperature: f32, humidity: f32, pressure: f32) -> Self {
        self.temperature = Some(temperature);
        self.humidity = Some(humidity);
        self.pressure = Some(pressure);
        self
    }

    /// Set the gas readings
    pub fn with_gas(mut self, eco2_ppm: f32, tvoc_ppb: f32) -> Self {
        self.eco2_ppm = Some(eco2_ppm);
        self.tvoc_ppb = Some(tvoc_ppb);
        self
    }

    /// Reading for a channel, if present
    pub fn get(&self, channel: Channel) -> Option<f32> {
        let value = match channel {
            Channel::Eco2 => self.eco2_ppm,
            Channel::Tvoc => self.tvoc_ppb,
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Pressure => self.pressure,
        };
        // Non-finite values from a misbehaving driver count as absent
        value.filter(|v| v.is_finite())
    }

    /// Reading for a channel, or `ChannelUnavailable`
    pub fn require(&self, channel: Channel) -> AnalysisResult<f32> {
        self.get(channel).ok_or(AnalysisError::ChannelUnavailable { channel })
    }

    /// Channels with no reading this cycle
    pub fn missing(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(move |c| self.get(*c).is_none())
    }
}

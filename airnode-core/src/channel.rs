//! Measured channels of an AirNode

/// One measured quantity reported by the node's sensors
///
/// Maps to a delta threshold, and for the gas channels, to a forecasting
/// monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// Equivalent CO2 concentration (ppm)
    Eco2 = 0,
    /// Total volatile organic compounds (ppb)
    Tvoc = 1,
    /// Air temperature (°C)
    Temperature = 2,
    /// Relative humidity (%RH)
    Humidity = 3,
    /// Barometric pressure (hPa)
    Pressure = 4,
}

impl Channel {
    /// Every channel in reporting order
    pub const ALL: [Channel; 5] = [
        Channel::Eco2,
        Channel::Tvoc,
        Channel::Temperature,
        Channel::Humidity,
        Channel::Pressure,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Eco2 => "eco2",
            Channel::Tvoc => "tvoc",
            Channel::Temperature => "temperature",
            Channel::Humidity => "humidity",
            Channel::Pressure => "pressure",
        }
    }

    /// Get unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Channel::Eco2 => "ppm",
            Channel::Tvoc => "ppb",
            Channel::Temperature => "°C",
            Channel::Humidity => "%RH",
            Channel::Pressure => "hPa",
        }
    }

    /// Bit used for this channel in a [`ChannelSet`]
    const fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

/// Compact set of channels
///
/// Records which channels tripped the delta detector in a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelSet(u8);

impl ChannelSet {
    /// Set with no channels
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add `channel`
    pub fn insert(&mut self, channel: Channel) {
        self.0 |= channel.bit();
    }

    /// Whether `channel` is in the set
    pub const fn contains(&self, channel: Channel) -> bool {
        (self.0 & channel.bit()) != 0
    }

    /// Whether no channel is set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of channels in the set
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate channels in reporting order
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

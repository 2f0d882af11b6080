//! Sensor Driver and Acquisition Traits
//!
//! Drivers follow a pull-based, non-blocking model using `nb::Result`:
//! `WouldBlock` while a measurement is in progress, `Other(fault)` when it
//! failed. Acquisition turns a cycle's worth of driver results into a
//! [`SensorSample`], with failed channels marked absent.
//!
//! ```rust
//! use airnode_core::traits::{GasSensor, GasReading};
//! use airnode_core::SensorFault;
//!
//! struct Sgp30Stub { warm: bool }
//!
//! impl GasSensor for Sgp30Stub {
//!     fn read_gas(&mut self) -> nb::Result<GasReading, SensorFault> {
//!         if !self.warm {
//!             return Err(nb::Error::Other(SensorFault::NotReady));
//!         }
//!         Ok(GasReading { eco2_ppm: 400.0, tvoc_ppb: 0.0 })
//!     }
//! }
//! ```

use crate::errors::SensorFault;
use crate::sample::SensorSample;
use crate::time::Timestamp;

/// Temperature, humidity and pressure from a combined climate sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    /// °C
    pub temperature: f32,
    /// %RH
    pub humidity: f32,
    /// hPa
    pub pressure_hpa: f32,
}

/// eCO2 and TVOC from a metal-oxide gas sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReading {
    /// ppm
    pub eco2_ppm: f32,
    /// ppb
    pub tvoc_ppb: f32,
}

/// Climate sensor driver (BME680 class)
pub trait ClimateSensor {
    /// Poll for a climate reading
    fn read_climate(&mut self) -> nb::Result<ClimateReading, SensorFault>;
}

/// Gas sensor driver (SGP30 class)
pub trait GasSensor {
    /// Poll for a gas reading
    fn read_gas(&mut self) -> nb::Result<GasReading, SensorFault>;
}

/// Produces one sample per cycle
///
/// Never fails: a channel whose read failed is simply absent.
pub trait SensorSource {
    /// Read every sensor, stamping the sample with `timestamp`
    fn acquire(&mut self, timestamp: Timestamp) -> SensorSample;
}

//! Per-Cycle Sensor Acquisition
//!
//! [`SensorHub`] reads a climate sensor and a gas sensor once per cycle and
//! assembles the [`SensorSample`]. A driver fault marks that sensor's
//! channels absent for the cycle; it is logged and goes no further.

use crate::errors::SensorFault;
use crate::sample::SensorSample;
use crate::time::Timestamp;
use crate::traits::{ClimateSensor, GasSensor, SensorSource};

/// Read failures seen by a hub since startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcquisitionStats {
    /// Climate reads that ended in a fault
    pub climate_failures: u32,
    /// Gas reads that ended in a fault
    pub gas_failures: u32,
}

/// Climate + gas sensor pair
pub struct SensorHub<C, G> {
    climate: C,
    gas: G,
    stats: AcquisitionStats,
}

impl<C: ClimateSensor, G: GasSensor> SensorHub<C, G> {
    /// Pair a climate and a gas sensor
    pub fn new(climate: C, gas: G) -> Self {
        Self { climate, gas, stats: AcquisitionStats::default() }
    }

    /// Failure counters since startup
    pub fn stats(&self) -> AcquisitionStats {
        self.stats
    }
}

impl<C: ClimateSensor, G: GasSensor> SensorSource for SensorHub<C, G> {
    fn acquire(&mut self, timestamp: Timestamp) -> SensorSample {
        let mut sample = SensorSample::empty(timestamp);

        match nb::block!(self.climate.read_climate()) {
            Ok(r) => {
                sample = sample.with_climate(r.temperature, r.humidity, r.pressure_hpa);
            }
            Err(fault) => {
                self.stats.climate_failures = self.stats.climate_failures.saturating_add(1);
                report_fault("climate", fault);
            }
        }

        match nb::block!(self.gas.read_gas()) {
            Ok(r) => {
                sample = sample.with_gas(r.eco2_ppm, r.tvoc_ppb);
            }
            Err(fault) => {
                self.stats.gas_failures = self.stats.gas_failures.saturating_add(1);
                report_fault("gas", fault);
            }
        }

        sample
    }
}

fn report_fault(sensor: &str, fault: SensorFault) {
    log_warn!("{} sensor read failed: {}", sensor, fault);
}

//! Pre-built scenarios with their expected alert cycles

use airnode_core::sample::SensorSample;

use super::{gas, AirGenerator};

/// A named series and the cycles that must alert
pub struct Scenario {
    pub name: &'static str,
    pub samples: Vec<SensorSample>,
    /// Cycles with a delta alert (1-based)
    pub delta_cycles: Vec<u32>,
    /// Cycles with an eCO2 trend break (1-based)
    pub eco2_anomaly_cycles: Vec<u32>,
}

/// Flat eCO2, then a 40 ppm step on cycle 6
pub fn step_change() -> Scenario {
    let mut samples: Vec<_> = (0..5).map(|t| gas(t, 420.0, 50.0)).collect();
    samples.push(gas(5, 460.0, 50.0));
    Scenario {
        name: "step_change",
        samples,
        delta_cycles: vec![6],
        eco2_anomaly_cycles: vec![],
    }
}

/// Occupied room filling up slowly: no single jump, forecast saturates
pub fn slow_ramp() -> Scenario {
    let mut generator = AirGenerator::new(7);
    Scenario {
        name: "slow_ramp",
        samples: generator.ramp((450.0, 60.0), (1200.0, 300.0), 100),
        delta_cycles: vec![],
        eco2_anomaly_cycles: vec![],
    }
}

/// Window opened: eCO2 drops by 400 ppm at once, tripping both detectors
pub fn ventilation() -> Scenario {
    let mut generator = AirGenerator::new(11);
    let mut samples = generator.steady(900.0, 120.0, 0.0, 8);
    samples.extend(generator.steady(500.0, 120.0, 0.0, 4));
    Scenario {
        name: "ventilation",
        samples,
        delta_cycles: vec![9],
        eco2_anomaly_cycles: vec![9],
    }
}

/// 1 ppm flicker, then a 20 ppm shift: below the delta threshold, far
/// outside the learned residual band
pub fn quiet_trend_break() -> Scenario {
    let mut samples: Vec<_> = (0..12)
        .map(|t| gas(t, if t % 2 == 0 { 420.0 } else { 421.0 }, 50.0))
        .collect();
    samples.extend((12..24).map(|t| gas(t, 441.0, 50.0)));
    Scenario {
        name: "quiet_trend_break",
        samples,
        delta_cycles: vec![],
        eco2_anomaly_cycles: vec![13],
    }
}

pub fn all() -> Vec<Scenario> {
    vec![step_change(), slow_ramp(), ventilation(), quiet_trend_break()]
}

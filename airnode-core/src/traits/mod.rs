//! Collaborator Traits
//!
//! The analysis core talks to hardware and transport only through the narrow
//! interfaces defined here. Hosts implement them for their board; tests
//! implement them with scripted fakes.
//!
//! ## Module Organization
//!
//! - [`sensor`] - sensor drivers and per-cycle acquisition
//! - [`alert`] - visual/audible alert outputs
//! - [`telemetry`] - report delivery (radio, log)
//! - [`delay`] - end-of-cycle wait
//!
//! Time sources live in [`crate::time`].

pub mod alert;
pub mod delay;
pub mod sensor;
pub mod telemetry;

pub use alert::{AlertSink, Indicator};
pub use delay::Delay;
pub use sensor::{ClimateReading, ClimateSensor, GasReading, GasSensor, SensorSource};
pub use telemetry::TelemetrySink;

pub use crate::time::TimeSource;

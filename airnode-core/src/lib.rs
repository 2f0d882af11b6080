//! Online signal analysis for AirNode
//!
//! Turns one multi-sensor reading per cycle into forecasts, anomaly flags,
//! delta alerts, an air-quality score and the next sampling interval.
//! Designed for battery-powered nodes with a few kilobytes of RAM.
//!
//! Key constraints:
//! - Fixed-size state, no allocation per cycle
//! - Single-threaded, run-to-completion cycles
//! - A missing reading never corrupts model state
//!
//! ```no_run
//! use airnode_core::{CyclePipeline, NodeConfig, SensorSample};
//!
//! let mut pipeline = CyclePipeline::new(NodeConfig::default())?;
//!
//! let sample = SensorSample::empty(0)
//!     .with_climate(21.4, 38.0, 1013.2)
//!     .with_gas(640.0, 85.0);
//!
//! let report = pipeline.run_cycle(sample);
//! if report.alert() {
//!     // Switch lamps, sample faster
//! }
//! # Ok::<(), airnode_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod acquisition;
pub mod alert;
pub mod analysis;
pub mod channel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod node;
pub mod pipeline;
pub mod sample;
pub mod time;
pub mod traits;

// Public API
pub use analysis::{
    air_quality_score, AnomalyDetector, ChannelMonitor, DeltaDetector, Forecaster,
    SamplingController, SamplingMode,
};
pub use channel::{Channel, ChannelSet};
pub use config::{ChannelConfig, MissingPolicy, NodeConfig};
pub use errors::{AnalysisError, AnalysisResult, ConfigError, SensorFault};
pub use node::{Node, NodeStats};
pub use pipeline::{CyclePipeline, CycleReport, Status};
pub use sample::SensorSample;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

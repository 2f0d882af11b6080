//! Online Signal Analysis
//!
//! ## Overview
//!
//! Everything the node decides about its air is computed here, once per
//! sampling cycle, from a single [`SensorSample`](crate::sample::SensorSample):
//!
//! ```text
//! sample ─┬─▶ ChannelMonitor (eco2) ─┐  forecast + anomaly
//!         ├─▶ ChannelMonitor (tvoc) ─┤
//!         ├─▶ DeltaDetector ─────────┼─▶ alert ─▶ SamplingController ─▶ interval
//!         └─▶ air_quality_score ─────┘
//! ```
//!
//! Two detectors run side by side because they fail differently:
//!
//! - **Delta**: memoryless, fires on the first abrupt jump, blind to slow
//!   drifts.
//! - **Anomaly**: needs a warmed-up forecaster, but adapts to each channel's
//!   noise and flags trend breaks that no fixed threshold would catch.
//!
//! ## Memory Model
//!
//! All state is fixed-size and owned by the pipeline: two monitors, one delta
//! slot per channel, one controller. No allocation happens per cycle.

mod anomaly;
mod delta;
mod forecast;
mod monitor;
mod sampling;
mod score;

pub use anomaly::AnomalyDetector;
pub use delta::{exceeds, DeltaDetector, DeltaState};
pub use forecast::Forecaster;
pub use monitor::{ChannelMonitor, ChannelOutcome};
pub use sampling::{SamplingController, SamplingMode, SamplingState};
pub use score::{air_quality_score, sub_score};

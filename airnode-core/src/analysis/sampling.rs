//! Adaptive Sampling Controller
//!
//! ## State Machine
//!
//! ```text
//!             alert
//!   ┌────────┐ ───────────────▶ ┌─────────────────────┐
//!   │ NORMAL │                  │ ALERT (hold = H)    │◀─┐ alert
//!   │ base   │ ◀─────────────── │ fast, hold -= 1     │──┘ (hold = H)
//!   └────────┘   quiet, hold=0  └─────────────────────┘
//! ```
//!
//! An alert can fire for a single cycle, but the node keeps sampling at the
//! fast interval for `H` further quiet cycles. Without the hold window the
//! interval would flip every cycle around a borderline condition.

use crate::config::SamplingConfig;

/// Externally visible cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingMode {
    /// Base interval
    #[default]
    Normal,
    /// Fast interval, alerting or draining the hold window
    Alert,
}

impl SamplingMode {
    /// Upper-case label
    pub const fn as_str(&self) -> &'static str {
        match self {
            SamplingMode::Normal => "NORMAL",
            SamplingMode::Alert => "ALERT",
        }
    }
}

/// Mutable part of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingState {
    /// Interval chosen by the last transition (ms)
    pub current_interval_ms: u32,
    /// Quiet cycles left at the fast interval
    pub alert_hold_counter: u32,
}

/// Two-state hysteresis machine choosing the next sampling interval
#[derive(Debug, Clone)]
pub struct SamplingController {
    config: SamplingConfig,
    state: SamplingState,
    mode: SamplingMode,
}

impl Default for SamplingController {
    fn default() -> Self {
        Self::new(SamplingConfig::default())
    }
}

impl SamplingController {
    /// Controller in normal mode at the base interval
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            state: SamplingState {
                current_interval_ms: config.base_interval_ms,
                alert_hold_counter: 0,
            },
            mode: SamplingMode::Normal,
        }
    }

    /// Advance one cycle given the cycle's combined alert flag
    ///
    /// Returns the interval to wait before the next cycle.
    pub fn transition(&mut self, alert: bool) -> u32 {
        let previous = self.mode;

        if alert {
            self.state.alert_hold_counter = self.config.hold_cycles;
            self.state.current_interval_ms = self.config.alert_interval_ms;
            self.mode = SamplingMode::Alert;
        } else if self.state.alert_hold_counter > 0 {
            self.state.alert_hold_counter -= 1;
            self.state.current_interval_ms = self.config.alert_interval_ms;
            self.mode = SamplingMode::Alert;
        } else {
            self.state.current_interval_ms = self.config.base_interval_ms;
            self.mode = SamplingMode::Normal;
        }

        if previous != self.mode {
            log_info!(
                "sampling: {} -> {} ({} ms)",
                previous.as_str(), self.mode.as_str(), self.state.current_interval_ms
            );
        }

        self.state.current_interval_ms
    }

    /// Current cadence
    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    /// Interval chosen by the last transition (ms)
    pub fn interval_ms(&self) -> u32 {
        self.state.current_interval_ms
    }

    /// Quiet cycles left at the fast interval
    pub fn hold_remaining(&self) -> u32 {
        self.state.alert_hold_counter
    }

    /// Snapshot of the mutable state
    pub fn state(&self) -> &SamplingState {
        &self.state
    }
}

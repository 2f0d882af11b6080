//! Edge-Latched Alert Output
//!
//! Lamps follow the alert flag every cycle. The buzzer fires once on the
//! rising edge of the flag, stays quiet while the alert persists, and re-arms
//! when the flag drops.

use crate::pipeline::Status;
use crate::traits::{AlertSink, Indicator};

/// Alert sink with buzzer edge detection
pub struct LatchedAlert<I> {
    indicator: I,
    latched: bool,
    beeps: u32,
}

impl<I: Indicator> LatchedAlert<I> {
    /// Wrap an indicator, starting with the green lamp on
    pub fn new(mut indicator: I) -> Self {
        indicator.set_lamps(Status::Normal);
        indicator.silence();
        Self { indicator, latched: false, beeps: 0 }
    }

    /// Beeps issued so far
    pub fn beeps(&self) -> u32 {
        self.beeps
    }

    /// Whether the buzzer already sounded for the current alert
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Wrapped lamps and buzzer
    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}

impl<I: Indicator> AlertSink for LatchedAlert<I> {
    fn signal(&mut self, alert: bool, status: Status) {
        self.indicator.set_lamps(status);

        if alert {
            if !self.latched {
                self.indicator.beep();
                self.beeps = self.beeps.saturating_add(1);
                self.latched = true;
            }
        } else {
            self.indicator.silence();
            self.latched = false;
        }
    }
}

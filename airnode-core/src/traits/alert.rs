//! Alert Output Traits

use crate::pipeline::Status;

/// Receives the cycle's combined alert flag
///
/// Called once per cycle, also when the flag is unchanged. Implementations
/// that drive one-shot outputs must do their own edge detection.
pub trait AlertSink {
    /// Called once per cycle with the combined flag and status
    fn signal(&mut self, alert: bool, status: Status);
}

/// Status lamps and buzzer of a node
pub trait Indicator {
    /// Green lamp for `Normal`, red lamp for `High`
    fn set_lamps(&mut self, status: Status);

    /// Short audible pulse
    fn beep(&mut self);

    /// Force the buzzer off
    fn silence(&mut self);
}

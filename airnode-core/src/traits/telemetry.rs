//! Telemetry Delivery Trait

use crate::pipeline::CycleReport;

/// Receives every cycle's report
///
/// Solely responsible for serialization and transport. Errors are reported
/// back to the node runner, which logs them and carries on.
pub trait TelemetrySink {
    /// Delivery failure, logged by the runner
    type Error: core::fmt::Debug;

    /// Serialize and send one report
    fn publish(&mut self, report: &CycleReport) -> Result<(), Self::Error>;
}

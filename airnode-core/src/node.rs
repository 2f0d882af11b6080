//! Node Runner
//!
//! Ties the pipeline to its collaborators and drives the endless
//! acquire → analyse → signal → publish → wait loop.
//!
//! The runner is single-threaded and run-to-completion: a cycle finishes all
//! state mutation before the delay starts, and nothing else runs while
//! waiting. Collaborator failures are logged and counted; none of them stop
//! the loop.
//!
//! ```rust,no_run
//! use airnode_core::node::Node;
//! use airnode_core::traits::delay::ThreadDelay;
//! use airnode_core::time::MonotonicClock;
//! # use airnode_core::{CyclePipeline, NodeConfig, SensorSample, Status, CycleReport};
//! # use airnode_core::traits::{AlertSink, SensorSource, TelemetrySink};
//! # struct Sensors; impl SensorSource for Sensors { fn acquire(&mut self, t: u64) -> SensorSample { SensorSample::empty(t) } }
//! # struct Lamps; impl AlertSink for Lamps { fn signal(&mut self, _: bool, _: Status) {} }
//! # struct Radio; impl TelemetrySink for Radio { type Error = (); fn publish(&mut self, _: &CycleReport) -> Result<(), ()> { Ok(()) } }
//!
//! let pipeline = CyclePipeline::new(NodeConfig::default())?;
//! let mut node = Node::new(pipeline, Sensors, Lamps, Radio, ThreadDelay, MonotonicClock::new());
//! node.run();
//! # Ok::<(), airnode_core::ConfigError>(())
//! ```

use crate::pipeline::{CycleReport, CyclePipeline};
use crate::traits::{AlertSink, Delay, SensorSource, TelemetrySink, TimeSource};

/// Counters kept by the runner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    /// Cycles executed
    pub cycles: u32,
    /// Cycles whose combined alert flag was set
    pub alert_cycles: u32,
    /// Reports the telemetry sink failed to deliver
    pub telemetry_failures: u32,
}

/// A sensor node: pipeline plus collaborators
pub struct Node<S, A, T, D, C> {
    pipeline: CyclePipeline,
    sensors: S,
    alert: A,
    telemetry: T,
    delay: D,
    clock: C,
    stats: NodeStats,
}

impl<S, A, T, D, C> Node<S, A, T, D, C>
where
    S: SensorSource,
    A: AlertSink,
    T: TelemetrySink,
    D: Delay,
    C: TimeSource,
{
    /// Wire a pipeline to its collaborators
    pub fn new(pipeline: CyclePipeline, sensors: S, alert: A, telemetry: T, delay: D, clock: C) -> Self {
        log_info!(
            "node {} started: base {} ms, alert {} ms, hold {} cycles",
            pipeline.config().node_id,
            pipeline.config().sampling.base_interval_ms,
            pipeline.config().sampling.alert_interval_ms,
            pipeline.config().sampling.hold_cycles
        );
        Self {
            pipeline,
            sensors,
            alert,
            telemetry,
            delay,
            clock,
            stats: NodeStats::default(),
        }
    }

    /// Run one cycle without the trailing delay
    pub fn step(&mut self) -> CycleReport {
        let sample = self.sensors.acquire(self.clock.now());
        let report = self.pipeline.run_cycle(sample);

        self.stats.cycles = self.stats.cycles.saturating_add(1);
        if report.alert() {
            self.stats.alert_cycles = self.stats.alert_cycles.saturating_add(1);
        }

        self.alert.signal(report.alert(), report.status);

        if let Err(e) = self.telemetry.publish(&report) {
            self.stats.telemetry_failures = self.stats.telemetry_failures.saturating_add(1);
            log_warn!("telemetry failed on cycle {}: {:?}", report.cycle, e);
        }

        log_info!("cycle {}\n{}", report.cycle, report);

        report
    }

    /// Run `cycles` cycles, each followed by its chosen delay
    pub fn run_for(&mut self, cycles: u32) -> Option<CycleReport> {
        let mut last = None;
        for _ in 0..cycles {
            let report = self.step();
            self.delay.delay_ms(report.next_interval_ms);
            last = Some(report);
        }
        last
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        loop {
            let report = self.step();
            self.delay.delay_ms(report.next_interval_ms);
        }
    }

    /// Runner counters
    pub fn stats(&self) -> NodeStats {
        self.stats
    }

    /// Analysis state
    pub fn pipeline(&self) -> &CyclePipeline {
        &self.pipeline
    }

    /// Sensor source, for inspection or reconfiguration
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Alert sink
    pub fn alert_sink(&self) -> &A {
        &self.alert
    }

    /// Telemetry sink
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// Delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Time source
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

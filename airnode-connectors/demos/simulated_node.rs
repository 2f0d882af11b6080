//! Simulated AirNode
//!
//! Runs the full node loop against simulated sensors: a meeting room filling
//! up, a window opened at cycle 60, and a flaky gas sensor. Frames go to the
//! console through `LogConnector`.
//!
//! Run with: cargo run --example simulated_node -- [cycles] [--realtime]

use airnode_connectors::{FrameSink, LogConnector};
use airnode_core::{
    acquisition::SensorHub,
    alert::LatchedAlert,
    errors::SensorFault,
    node::Node,
    pipeline::{CyclePipeline, Status},
    time::FixedTime,
    traits::{
        delay::{NoDelay, ThreadDelay},
        ClimateReading, ClimateSensor, Delay, GasReading, GasSensor, Indicator,
    },
    NodeConfig,
};
use log::{Level, LevelFilter, Metadata, Record};

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

struct SimClimate {
    cycle: u32,
}

impl ClimateSensor for SimClimate {
    fn read_climate(&mut self) -> nb::Result<ClimateReading, SensorFault> {
        self.cycle += 1;
        let warmup = (self.cycle.min(60) as f32) * 0.02;
        Ok(ClimateReading {
            temperature: 21.0 + warmup,
            humidity: 38.0 + warmup * 2.0,
            pressure_hpa: 1012.4,
        })
    }
}

struct SimGas {
    cycle: u32,
    seed: u32,
}

impl SimGas {
    fn jitter(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        ((self.seed >> 8) as f32 / (1u32 << 24) as f32 - 0.5) * 6.0
    }
}

impl GasSensor for SimGas {
    fn read_gas(&mut self) -> nb::Result<GasReading, SensorFault> {
        self.cycle += 1;
        if self.cycle % 45 == 0 {
            return Err(nb::Error::Other(SensorFault::Timeout));
        }

        let occupied = 450.0 + 9.0 * self.cycle.min(60) as f32;
        let eco2 = if self.cycle >= 60 { 520.0 } else { occupied };
        let eco2 = (eco2 + self.jitter()).round();
        Ok(GasReading { eco2_ppm: eco2, tvoc_ppb: (eco2 / 8.0).round() })
    }
}

struct ConsolePanel;

impl Indicator for ConsolePanel {
    fn set_lamps(&mut self, _status: Status) {}

    fn beep(&mut self) {
        println!("*** BEEP ***");
    }

    fn silence(&mut self) {}
}

fn run<D: Delay>(cycles: u32, delay: D) -> Result<(), Box<dyn std::error::Error>> {
    let config = NodeConfig::default();
    let sink = FrameSink::new(&config.node_id, "airnode/telemetry", LogConnector);
    let pipeline = CyclePipeline::new(config)?;

    let mut node = Node::new(
        pipeline,
        SensorHub::new(SimClimate { cycle: 0 }, SimGas { cycle: 0, seed: 8 }),
        LatchedAlert::new(ConsolePanel),
        sink,
        delay,
        FixedTime::new(0),
    );

    for _ in 0..cycles {
        let report = node.run_for(1);
        if let Some(report) = report {
            node.clock_mut().advance(u64::from(report.next_interval_ms));
        }
    }

    let stats = node.stats();
    let sent = node.telemetry().stats().messages_sent;
    let gas_failures = node.sensors_mut().stats().gas_failures;
    println!(
        "\n{} cycles, {} alerting, {} frames sent, {} gas read failures",
        stats.cycles, stats.alert_cycles, sent, gas_failures
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cycles = args
        .iter()
        .find_map(|a| a.parse::<u32>().ok())
        .unwrap_or(120);

    if args.iter().any(|a| a == "--realtime") {
        run(cycles, ThreadDelay)
    } else {
        run(cycles, NoDelay::default())
    }
}

//! Sampling Periods and Horizons

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * 60;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * 60;

/// Sampling interval while conditions are normal (milliseconds).
///
/// 0.1 Hz keeps a battery node and its LoRa duty cycle comfortable.
pub const BASE_SAMPLE_INTERVAL_MS: u32 = 10_000;

/// Sampling interval while alerting (milliseconds).
pub const ALERT_SAMPLE_INTERVAL_MS: u32 = 2_000;

/// Cycles the fast interval is held after the most recent alert.
///
/// 30 cycles at 2 s is one minute of dense data after the last event.
pub const ALERT_HOLD_CYCLES: u32 = 30;

/// How far ahead the gas forecasts look (milliseconds).
pub const FORECAST_HORIZON_MS: u64 = MS_PER_HOUR;

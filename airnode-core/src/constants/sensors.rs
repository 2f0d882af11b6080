//! Channel Thresholds and Ranges
//!
//! Limits are tuned for the SGP30 gas sensor (eCO2/TVOC) and the BME680
//! climate sensor (temperature, humidity, pressure).

// ===== DELTA THRESHOLDS =====

/// Sudden eCO2 change between consecutive cycles (ppm).
///
/// Well above the SGP30's cycle-to-cycle jitter (~5 ppm) in a still room.
pub const ECO2_DELTA_PPM: f32 = 30.0;

/// Sudden TVOC change between consecutive cycles (ppb).
pub const TVOC_DELTA_PPB: f32 = 15.0;

/// Sudden temperature change between consecutive cycles (°C).
///
/// BME680 accuracy is ±0.5 °C.
pub const TEMP_DELTA_C: f32 = 0.5;

/// Sudden humidity change between consecutive cycles (%RH).
pub const HUMIDITY_DELTA_PCT: f32 = 2.0;

/// Sudden pressure change between consecutive cycles (hPa).
pub const PRESSURE_DELTA_HPA: f32 = 1.0;

// ===== AIR QUALITY SCORE =====

/// eCO2 at or below which the sub-score is perfect (ppm).
///
/// Roughly fresh outdoor air plus occupancy.
pub const SCORE_ECO2_GOOD_PPM: f32 = 450.0;

/// eCO2 at or above which the sub-score is zero (ppm).
pub const SCORE_ECO2_BAD_PPM: f32 = 2000.0;

/// TVOC at or below which the sub-score is perfect (ppb).
pub const SCORE_TVOC_GOOD_PPB: f32 = 100.0;

/// TVOC at or above which the sub-score is zero (ppb).
pub const SCORE_TVOC_BAD_PPB: f32 = 1000.0;

/// Weight of the eCO2 sub-score in the composite.
pub const SCORE_ECO2_WEIGHT: f32 = 0.6;

/// Weight of the TVOC sub-score in the composite.
pub const SCORE_TVOC_WEIGHT: f32 = 0.4;

// ===== FORECAST RANGES =====

/// Plausible eCO2 forecast range (ppm).
///
/// SGP30 reports eCO2 from 400 ppm; a trend extrapolated an hour ahead
/// is clamped to keep it physically meaningful.
pub const ECO2_FORECAST_MIN_PPM: f32 = 300.0;
/// Upper end of the eCO2 forecast range (ppm)
pub const ECO2_FORECAST_MAX_PPM: f32 = 1600.0;

/// Plausible TVOC forecast range (ppb).
pub const TVOC_FORECAST_MIN_PPB: f32 = 0.0;
/// Upper end of the TVOC forecast range (ppb)
pub const TVOC_FORECAST_MAX_PPB: f32 = 1000.0;

//! Compact Telemetry Frame
//!
//! One [`CycleReport`] becomes one JSON object with one- and two-letter keys,
//! small enough for a single LoRa packet:
//!
//! | Key  | Field                          | Encoding                 |
//! |------|--------------------------------|--------------------------|
//! | `id` | node id                        | string                   |
//! | `ts` | sample timestamp (ms)          | integer                  |
//! | `fc` | frame counter (cycle)          | integer                  |
//! | `t`  | temperature (°C)               | ×10, truncated           |
//! | `h`  | humidity (%RH)                 | ×10, truncated           |
//! | `p`  | pressure (hPa)                 | truncated                |
//! | `e`  | eCO2 (ppm)                     | truncated                |
//! | `v`  | TVOC (ppb)                     | truncated                |
//! | `s`  | air-quality score              | integer 0..=100          |
//! | `pe` | eCO2 forecast (ppm)            | rounded                  |
//! | `pv` | TVOC forecast (ppb)            | rounded                  |
//! | `ae` | eCO2 anomaly                   | bool                     |
//! | `av` | TVOC anomaly                   | bool                     |
//! | `da` | delta alert                    | bool                     |
//! | `st` | status                         | `"NORMAL"` / `"HIGH"`    |
//! | `sm` | next sampling interval (ms)    | integer                  |
//!
//! Integers keep floating-point text off the air. Absent readings and
//! forecasts are left out of the frame rather than sent as placeholders.

use airnode_core::constants::MAX_FRAME_LEN;
use airnode_core::CycleReport;
use serde::Serialize;

use crate::ConnectorError;

/// Wire shape of one report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactFrame<'a> {
    pub id: &'a str,
    pub ts: u64,
    pub fc: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pv: Option<i32>,
    pub ae: bool,
    pub av: bool,
    pub da: bool,
    pub st: &'static str,
    pub sm: u32,
}

impl<'a> CompactFrame<'a> {
    pub fn from_report(node_id: &'a str, report: &CycleReport) -> Self {
        let sample = &report.sample;
        Self {
            id: node_id,
            ts: sample.timestamp,
            fc: report.cycle,
            t: sample.temperature.map(|c| (c * 10.0) as i32),
            h: sample.humidity.map(|rh| (rh * 10.0) as i32),
            p: sample.pressure.map(|hpa| hpa as i32),
            e: sample.eco2_ppm.map(|ppm| ppm as u32),
            v: sample.tvoc_ppb.map(|ppb| ppb as u32),
            s: report.score,
            pe: report.eco2_forecast.map(|ppm| ppm.round() as i32),
            pv: report.tvoc_forecast.map(|ppb| ppb.round() as i32),
            ae: report.eco2_anomaly,
            av: report.tvoc_anomaly,
            da: report.delta_alert,
            st: report.status.as_str(),
            sm: report.next_interval_ms,
        }
    }
}

/// Encode a report, rejecting frames over [`MAX_FRAME_LEN`]
pub fn encode_frame(node_id: &str, report: &CycleReport) -> Result<Vec<u8>, ConnectorError> {
    encode_frame_within(node_id, report, MAX_FRAME_LEN)
}

/// Encode a report, rejecting frames over `max_len` bytes
pub fn encode_frame_within(
    node_id: &str,
    report: &CycleReport,
    max_len: usize,
) -> Result<Vec<u8>, ConnectorError> {
    let frame = CompactFrame::from_report(node_id, report);
    let bytes = serde_json::to_vec(&frame)?;

    if bytes.len() > max_len {
        return Err(ConnectorError::FrameTooLarge {
            len: bytes.len(),
            max: max_len,
        });
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airnode_core::{CyclePipeline, NodeConfig, SensorSample};
    use serde_json::Value;

    fn report(sample: SensorSample) -> CycleReport {
        let mut pipeline = CyclePipeline::new(NodeConfig::default()).unwrap();
        pipeline.run_cycle(sample)
    }

    fn decode(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn scales_readings_to_integers() {
        let sample = SensorSample::empty(5_000)
            .with_climate(23.47, 41.26, 1013.8)
            .with_gas(612.0, 87.0);
        let json = decode(&encode_frame("node-8", &report(sample)).unwrap());

        assert_eq!(json["id"], "node-8");
        assert_eq!(json["ts"], 5_000);
        assert_eq!(json["fc"], 1);
        assert_eq!(json["t"], 234);
        assert_eq!(json["h"], 412);
        assert_eq!(json["p"], 1013);
        assert_eq!(json["e"], 612);
        assert_eq!(json["v"], 87);
        assert_eq!(json["pe"], 612);
        assert_eq!(json["pv"], 87);
        assert_eq!(json["ae"], false);
        assert_eq!(json["da"], false);
        assert_eq!(json["st"], "NORMAL");
        assert_eq!(json["sm"], 10_000);
    }

    #[test]
    fn negative_temperature_truncates_toward_zero() {
        let sample = SensorSample::empty(0).with_climate(-4.56, 80.0, 990.0);
        let json = decode(&encode_frame("n", &report(sample)).unwrap());
        assert_eq!(json["t"], -45);
    }

    #[test]
    fn absent_values_are_omitted() {
        let json = decode(&encode_frame("n", &report(SensorSample::empty(0))).unwrap());
        let object = json.as_object().unwrap();
        for key in ["t", "h", "p", "e", "v", "s", "pe", "pv"] {
            assert!(!object.contains_key(key), "{} present", key);
        }
        assert!(object.contains_key("st"));
    }

    #[test]
    fn typical_frame_fits_one_packet() {
        let sample = SensorSample::empty(u64::from(u32::MAX))
            .with_climate(-12.3, 99.9, 1084.0)
            .with_gas(60_000.0, 60_000.0);
        let bytes = encode_frame("sixteen-char-id!", &report(sample)).unwrap();
        assert!(bytes.len() <= MAX_FRAME_LEN);
    }

    #[test]
    fn oversize_frame_rejected() {
        let sample = SensorSample::empty(0).with_gas(420.0, 30.0);
        let err = encode_frame_within("node-8", &report(sample), 32).unwrap_err();
        assert!(matches!(err, ConnectorError::FrameTooLarge { max: 32, .. }));
    }

    proptest::proptest! {
        #[test]
        fn plausible_readings_fit_and_scale(
            temp in -40.0f32..85.0,
            hum in 0.0f32..100.0,
            pressure in 300.0f32..1100.0,
            eco2 in 400.0f32..60_000.0,
            tvoc in 0.0f32..60_000.0,
        ) {
            let sample = SensorSample::empty(u64::from(u32::MAX))
                .with_climate(temp, hum, pressure)
                .with_gas(eco2, tvoc);
            let bytes = encode_frame("sixteen-char-id!", &report(sample)).unwrap();
            proptest::prop_assert!(bytes.len() <= MAX_FRAME_LEN);

            let json = decode(&bytes);
            proptest::prop_assert_eq!(json["t"].as_i64(), Some(i64::from((temp * 10.0) as i32)));
            proptest::prop_assert_eq!(json["p"].as_i64(), Some(i64::from(pressure as i32)));
        }
    }
}

use crate::de;
use serde::{Deserialize, Serialize};

/// One sample of a station time series: `t` is epoch milliseconds, `v` the
/// hydrometric level in meters, `null` when the sensor did not report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "t", deserialize_with = "de::timestamp")]
    pub timestamp: i64,
    #[serde(rename = "v", deserialize_with = "de::optional_number")]
    pub value: Option<f64>,
}

impl Reading {
    pub fn new(timestamp: i64, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }
}

/// Most recent reading carrying a value.
///
/// Only timestamps strictly greater than zero qualify, and on equal timestamps
/// the earliest entry in the series is kept.
pub fn latest_reading(readings: &[Reading]) -> Option<&Reading> {
    readings.iter().fold(None::<&Reading>, |latest, reading| {
        let floor = latest.map_or(0, |l| l.timestamp);
        if reading.value.is_some() && reading.timestamp > floor {
            Some(reading)
        } else {
            latest
        }
    })
}

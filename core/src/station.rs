use crate::{AlertLevel, Reading, de};
use serde::{Deserialize, Serialize};

/// A hydrometric station as listed by the sensor values endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "nomestaz")]
    pub name: String,
    #[serde(rename = "idstazione")]
    pub id: String,
    #[serde(rename = "lon", deserialize_with = "de::number")]
    pub longitude: f64,
    #[serde(rename = "lat", deserialize_with = "de::number")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub soglia1: Option<f64>,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub soglia2: Option<f64>,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub soglia3: Option<f64>,
}

impl Station {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            yellow: self.soglia1,
            orange: self.soglia2,
            red: self.soglia3,
        }
    }
}

/// The three alert levels published for a station (`soglia1..3`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thresholds {
    pub yellow: Option<f64>,
    pub orange: Option<f64>,
    pub red: Option<f64>,
}

/// Station metadata merged with its latest level.
///
/// Serializes to `{lon, lat, soglia1, soglia2, soglia3, value}`. The
/// observation time of `value` is kept out of that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationData {
    pub lon: f64,
    pub lat: f64,
    pub soglia1: Option<f64>,
    pub soglia2: Option<f64>,
    pub soglia3: Option<f64>,
    pub value: Option<f64>,
    #[serde(skip)]
    pub timestamp: Option<i64>,
}

impl StationData {
    pub fn from_station(station: &Station, latest: Option<&Reading>) -> Self {
        let latest = latest.filter(|reading| reading.value.is_some());
        Self {
            lon: station.longitude,
            lat: station.latitude,
            soglia1: station.soglia1,
            soglia2: station.soglia2,
            soglia3: station.soglia3,
            value: latest.and_then(|reading| reading.value),
            timestamp: latest.map(|reading| reading.timestamp),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            yellow: self.soglia1,
            orange: self.soglia2,
            red: self.soglia3,
        }
    }

    pub fn alert_level(&self) -> AlertLevel {
        AlertLevel::classify(self.value, self.thresholds())
    }
}

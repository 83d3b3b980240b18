use crate::StationData;
use chrono::{DateTime, TimeZone};
use chrono_tz::Europe::Rome;

const NOT_AVAILABLE: &str = "non disponibile";

/// Human readable summary of a station, with the observation time rendered
/// in Europe/Rome.
pub fn format_station_message(station_name: &str, data: &StationData) -> String {
    let timestamp_formatted = data
        .timestamp
        .and_then(format_timestamp)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let value_line = match data.value {
        Some(value) => {
            let alarm = data.alert_level().marker();
            if alarm.is_empty() {
                format!("Valore: {value:.2}")
            } else {
                format!("Valore: {value:.2} {alarm}")
            }
        }
        None => format!("Valore: {NOT_AVAILABLE}"),
    };

    let thresholds = data.thresholds();
    let mut lines = Vec::with_capacity(6);
    lines.push(format!("Stazione: {station_name}"));
    lines.push(value_line);
    if let Some(yellow) = thresholds.yellow {
        lines.push(format!("Soglia Gialla: {yellow:.2}"));
    }
    if let Some(orange) = thresholds.orange {
        lines.push(format!("Soglia Arancione: {orange:.2}"));
    }
    if let Some(red) = thresholds.red {
        lines.push(format!("Soglia Rossa: {red:.2}"));
    }
    lines.push(format!("Ultimo rilevamento: {timestamp_formatted}"));

    lines.join("\n")
}

fn format_timestamp(timestamp_millis: i64) -> Option<String> {
    let datetime = DateTime::from_timestamp_millis(timestamp_millis)?;
    let datetime_in_tz = Rome.from_utc_datetime(&datetime.naive_utc());
    Some(datetime_in_tz.format("%d-%m-%Y %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(value: Option<f64>, thresholds: Option<f64>) -> StationData {
        StationData {
            lon: 12.24,
            lat: 44.14,
            soglia1: thresholds,
            soglia2: thresholds.map(|t| t * 2.0),
            soglia3: thresholds.map(|t| t * 3.0),
            value,
            timestamp: value.map(|_| 1729454542656),
        }
    }

    #[test]
    fn formats_message_with_alarm() {
        let expected = "Stazione: Cesena\nValore: 2.20 🟠\nSoglia Gialla: 1.00\nSoglia Arancione: 2.00\nSoglia Rossa: 3.00\nUltimo rilevamento: 20-10-2024 22:02";
        assert_eq!(
            format_station_message("Cesena", &data(Some(2.2), Some(1.0))),
            expected
        );
    }

    #[test]
    fn formats_message_without_value() {
        let expected = "Stazione: Cesena\nValore: non disponibile\nSoglia Gialla: 1.00\nSoglia Arancione: 2.00\nSoglia Rossa: 3.00\nUltimo rilevamento: non disponibile";
        assert_eq!(format_station_message("Cesena", &data(None, Some(1.0))), expected);
    }

    #[test]
    fn formats_message_without_thresholds() {
        let expected = "Stazione: Cesena\nValore: 1.20\nUltimo rilevamento: 20-10-2024 22:02";
        assert_eq!(format_station_message("Cesena", &data(Some(1.2), None)), expected);
    }
}

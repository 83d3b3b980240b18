//! allertameteo Emilia-Romagna station data client.

use crate::{error::ClientError, logging};
use livello_core::{
    LEVEL_VARIABLE, Reading, Station, StationData, closest_station_names, latest_reading,
};
use reqwest::Client as HTTPClient;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

/// Default base URL of the allertameteo API.
pub const DEFAULT_BASE_URL: &str = "https://allertameteo.regione.emilia-romagna.it";
/// Upper bound for a single request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SENSOR_VALUES_PATH: &str = "/o/api/allerta/get-sensor-values-no-time";
const TIME_SERIES_PATH: &str = "/o/api/allerta/get-time-series/";
const STATION_NAME_FIELD: &str = "nomestaz";

/// Fetches the latest hydrometric level of one named station.
///
/// The HTTP client is owned by the caller and can be shared with other
/// clients; every call issues fresh requests.
#[derive(Debug, Clone)]
pub struct StationDataClient {
    station_name: String,
    http: HTTPClient,
    api_base: String,
}

impl StationDataClient {
    pub fn new(station_name: impl Into<String>, http: HTTPClient) -> Self {
        Self {
            station_name: station_name.into(),
            http,
            api_base: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client to another host (mirrors, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    /// All stations currently published, in API order.
    ///
    /// Entries without a station name (the API mixes in a `{"time": ..}`
    /// marker) are skipped, and so are named entries that do not decode.
    #[instrument(skip(self))]
    pub async fn get_stations(&self) -> Result<Vec<Station>, ClientError> {
        let (url, entries) = self.fetch_station_entries().await?;
        let mut stations = Vec::with_capacity(entries.len());
        for entry in entries {
            match decode::<Station>(&url, entry) {
                Ok(station) => stations.push(station),
                Err(err) => {
                    logging::Logger::new()
                        .url(&url)
                        .error_text(err.to_string())
                        .warn("stations.entry_skipped", "Skipping malformed station entry");
                }
            }
        }

        logging::Logger::new()
            .url(&url)
            .count(stations.len())
            .info("stations.fetched", "Fetched stations list");
        Ok(stations)
    }

    async fn fetch_station_entries(&self) -> Result<(String, Vec<Value>), ClientError> {
        let url = format!(
            "{}{SENSOR_VALUES_PATH}?variabile={LEVEL_VARIABLE}",
            self.api_base
        );
        let entries: Vec<Value> =
            decode(&url, fetch_json(&self.http, &url, REQUEST_TIMEOUT).await?)?;
        let entries = entries
            .into_iter()
            .filter(|entry| entry.get(STATION_NAME_FIELD).is_some())
            .collect();
        Ok((url, entries))
    }

    /// Level time series of the sensor `station_id`.
    #[instrument(skip(self))]
    pub async fn get_time_series(&self, station_id: &str) -> Result<Vec<Reading>, ClientError> {
        let url = format!(
            "{}{TIME_SERIES_PATH}?stazione={station_id}&variabile={LEVEL_VARIABLE}",
            self.api_base
        );
        let readings: Vec<Reading> =
            decode(&url, fetch_json(&self.http, &url, REQUEST_TIMEOUT).await?)?;

        logging::Logger::new()
            .station_id(station_id)
            .count(readings.len())
            .info("time_series.fetched", "Fetched station time series");
        Ok(readings)
    }

    /// Metadata and latest level of the configured station.
    ///
    /// `Ok(None)` means the station is not in the list; when several stations
    /// share the name the first one listed is used. Only the matching entry
    /// has to be a well formed station.
    #[instrument(skip(self), fields(station = %self.station_name))]
    pub async fn get_data(&self) -> Result<Option<StationData>, ClientError> {
        let (url, entries) = self.fetch_station_entries().await.inspect_err(|e| {
            logging::Logger::new()
                .station(&self.station_name)
                .error_text(e.to_string())
                .error("stations.fetch_failed", e, "Error fetching stations list");
        })?;

        let Some(entry) = entries
            .iter()
            .find(|entry| entry_name(entry) == Some(self.station_name.as_str()))
        else {
            let names = entries.iter().filter_map(entry_name);
            let mut logger = logging::Logger::new().station(&self.station_name);
            if let Some(suggestion) = closest_station_names(&self.station_name, names, 1).pop() {
                logger = logger.suggestion(suggestion);
            }
            logger.warn("station.not_found", "Station not found");
            return Ok(None);
        };
        let station: Station = decode(&url, entry.clone())?;

        let readings = self.get_time_series(&station.id).await.inspect_err(|e| {
            logging::Logger::new()
                .station(&station.name)
                .station_id(&station.id)
                .error_text(e.to_string())
                .error("time_series.fetch_failed", e, "Error fetching data for station");
        })?;
        let data = StationData::from_station(&station, latest_reading(&readings));

        logging::Logger::new()
            .station(&station.name)
            .station_id(&station.id)
            .value(data.value)
            .info("station.updated", "Fetched station data");
        Ok(Some(data))
    }

    /// Station names resembling the configured one, best first.
    pub async fn suggest_stations(&self, limit: usize) -> Result<Vec<String>, ClientError> {
        let (_, entries) = self.fetch_station_entries().await?;
        Ok(closest_station_names(
            &self.station_name,
            entries.iter().filter_map(entry_name),
            limit,
        ))
    }
}

fn entry_name(entry: &Value) -> Option<&str> {
    entry.get(STATION_NAME_FIELD).and_then(Value::as_str)
}

/// GET `url` and parse the body as JSON, all within `timeout`.
pub(crate) async fn fetch_json(
    http: &HTTPClient,
    url: &str,
    timeout: Duration,
) -> Result<Value, ClientError> {
    match tokio::time::timeout(timeout, request_json(http, url)).await {
        Ok(result) => result,
        Err(elapsed) => Err(ClientError::Timeout {
            url: url.to_string(),
            source: Box::new(elapsed),
        }),
    }
}

async fn request_json(http: &HTTPClient, url: &str) -> Result<Value, ClientError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ClientError::from_reqwest(url, e))?;
    let response = response
        .error_for_status()
        .map_err(|e| ClientError::from_reqwest(url, e))?;
    let body = response
        .bytes()
        .await
        .map_err(|e| ClientError::from_reqwest(url, e))?;

    serde_json::from_slice(&body).map_err(|source| ClientError::InvalidJson {
        url: url.to_string(),
        source,
    })
}

fn decode<T: serde::de::DeserializeOwned>(url: &str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|source| ClientError::UnexpectedPayload {
        url: url.to_string(),
        source,
    })
}

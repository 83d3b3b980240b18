use tracing::{error, info, warn};

pub(crate) const TARGET: &str = "livello_client";

#[derive(Clone, Default)]
pub(crate) struct Logger {
    station: Option<String>,
    station_id: Option<String>,
    url: Option<String>,
    count: Option<usize>,
    value: Option<f64>,
    suggestion: Option<String>,
    error_text: Option<String>,
}

impl Logger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    pub(crate) fn station_id(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    pub(crate) fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub(crate) fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub(crate) fn value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    pub(crate) fn suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub(crate) fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    pub(crate) fn info(&self, event: &'static str, message: &str) {
        info!(
            target: TARGET,
            event,
            station = self.station.as_deref(),
            station_id = self.station_id.as_deref(),
            url = self.url.as_deref(),
            count = self.count,
            value = self.value,
            suggestion = self.suggestion.as_deref(),
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn warn(&self, event: &'static str, message: &str) {
        warn!(
            target: TARGET,
            event,
            station = self.station.as_deref(),
            station_id = self.station_id.as_deref(),
            url = self.url.as_deref(),
            count = self.count,
            value = self.value,
            suggestion = self.suggestion.as_deref(),
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn error<E: std::fmt::Debug>(&self, event: &'static str, err: &E, message: &str) {
        error!(
            target: TARGET,
            event,
            station = self.station.as_deref(),
            station_id = self.station_id.as_deref(),
            url = self.url.as_deref(),
            count = self.count,
            value = self.value,
            suggestion = self.suggestion.as_deref(),
            error_text = ?self.error_text,
            error = ?err,
            "{}",
            message
        );
    }
}

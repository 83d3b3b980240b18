use anyhow::{Context, Result};
use livello_client::StationDataClient;
use livello_core::format_station_message;
use reqwest::Client as HTTPClient;
use std::io::Write;
use tracing::{error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
mod config;

const USER_AGENT: &str = concat!("livello-fetcher/", env!("CARGO_PKG_VERSION"));
const SUGGESTIONS_LIMIT: usize = 5;

#[instrument(skip(client, out), fields(station = %client.station_name()))]
async fn poll_station(client: &StationDataClient, out: &mut impl Write) -> Result<()> {
    let data = match client.get_data().await {
        Ok(data) => data,
        Err(err) => {
            error!(kind = ?err.kind(), url = err.url(), error = %err, "Failed to fetch station data");
            return Err(err).context("fetching station data");
        }
    };

    let Some(data) = data else {
        writeln!(out, "null")?;
        // Suggestions are best effort.
        match client.suggest_stations(SUGGESTIONS_LIMIT).await {
            Ok(suggestions) if !suggestions.is_empty() => {
                let suggestions = suggestions.join(", ");
                writeln!(out, "Stazione non trovata, forse cercavi: {suggestions}")?;
            }
            Ok(_) => {}
            Err(err) => warn!(kind = ?err.kind(), error = %err, "Failed to fetch suggestions"),
        }
        return Ok(());
    };

    info!(value = data.value, level = ?data.alert_level(), "Station polled");
    writeln!(out, "{}", serde_json::to_string(&data)?)?;
    writeln!(out, "{}", format_station_message(client.station_name(), &data))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // Enable log level filtering via `RUST_LOG` env var
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env()?;
    let http_client = HTTPClient::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("building HTTP client")?;

    let mut client = StationDataClient::new(config.station_name, http_client);
    if let Some(api_base_url) = config.api_base_url {
        client = client.with_base_url(api_base_url);
    }

    poll_station(&client, &mut std::io::stdout().lock()).await
}

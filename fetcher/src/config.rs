use anyhow::{Result, anyhow};

const STATION_NAME_VAR: &str = "LIVELLO_STATION_NAME";
const API_BASE_URL_VAR: &str = "LIVELLO_API_BASE_URL";

#[derive(Debug, PartialEq)]
pub(crate) struct Config {
    pub(crate) station_name: String,
    pub(crate) api_base_url: Option<String>,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let station_name = non_empty(STATION_NAME_VAR)
            .ok_or_else(|| anyhow!("Missing env var: {STATION_NAME_VAR}"))?;
        Ok(Self {
            station_name,
            api_base_url: non_empty(API_BASE_URL_VAR),
        })
    }
}

//! Bot configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};
use client_frontend_core::FrontendConfig;
use game_content::DatasetSource;

/// Configuration required to bootstrap the bot.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub dataset: DatasetSource,
    pub frontend: FrontendConfig,
    /// Liveness endpoint port.
    pub port: u16,
    /// Fixed seed for target selection; OS entropy when unset.
    pub rng_seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
    /// Wait for the operator to press Enter before exiting after a fatal error.
    pub wait_on_fatal: bool,
}

impl BotConfig {
    pub const DEFAULT_PORT: u16 = 5000;

    pub fn new(dataset: DatasetSource) -> Self {
        Self {
            dataset,
            frontend: FrontendConfig::default(),
            port: Self::DEFAULT_PORT,
            rng_seed: None,
            log_dir: None,
            wait_on_fatal: true,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DATASET_PATH` - Local JSON dataset, takes precedence over the sheet
    /// - `SPREADSHEET_ID`, `RANGE`, `API_KEY` - Google Sheets source
    /// - `PORT` - Liveness endpoint port (default: 5000)
    /// - `RNG_SEED` - Deterministic target selection (default: random)
    /// - `LOG_DIR` - Log directory (default: platform cache dir)
    /// - `WAIT_ON_FATAL` - Wait for Enter after a fatal error (default: true)
    /// - `ALLOWED_CHANNEL`, `LIST_CHUNK_SIZE` - see [`FrontendConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new(dataset_source(&lookup)?);

        config.frontend = FrontendConfig::from_lookup(&lookup);

        if let Some(port) = read_var::<u16>(&lookup, "PORT") {
            config.port = port;
        }

        config.rng_seed = read_var::<u64>(&lookup, "RNG_SEED");
        config.log_dir = non_empty(&lookup, "LOG_DIR").map(PathBuf::from);

        if let Some(wait) = read_bool(&lookup, "WAIT_ON_FATAL") {
            config.wait_on_fatal = wait;
        }

        Ok(config)
    }
}

fn dataset_source(lookup: &impl Fn(&str) -> Option<String>) -> Result<DatasetSource> {
    if let Some(path) = non_empty(lookup, "DATASET_PATH") {
        return Ok(DatasetSource::File(PathBuf::from(path)));
    }

    match (
        non_empty(lookup, "SPREADSHEET_ID"),
        non_empty(lookup, "RANGE"),
        non_empty(lookup, "API_KEY"),
    ) {
        (Some(spreadsheet_id), Some(range), Some(api_key)) => Ok(DatasetSource::Remote {
            spreadsheet_id,
            range,
            api_key,
        }),
        _ => bail!("Set DATASET_PATH, or SPREADSHEET_ID, RANGE and API_KEY"),
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    non_empty(lookup, key)?.parse().ok()
}

fn read_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match non_empty(lookup, key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn file_source_with_defaults() {
        let config = BotConfig::from_lookup(lookup(&[("DATASET_PATH", "data/bosses.json")])).unwrap();

        assert_eq!(
            config.dataset,
            DatasetSource::File(PathBuf::from("data/bosses.json"))
        );
        assert_eq!(config.port, BotConfig::DEFAULT_PORT);
        assert_eq!(config.rng_seed, None);
        assert!(config.wait_on_fatal);
        assert_eq!(config.frontend.list_chunk_size, 8);
    }

    #[test]
    fn remote_source_and_overrides() {
        let config = BotConfig::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "abc"),
            ("RANGE", "Bosses!A1:J"),
            ("API_KEY", "key"),
            ("PORT", "8080"),
            ("RNG_SEED", "12"),
            ("WAIT_ON_FATAL", "off"),
            ("ALLOWED_CHANNEL", "bot"),
        ]))
        .unwrap();

        assert_eq!(
            config.dataset,
            DatasetSource::Remote {
                spreadsheet_id: "abc".into(),
                range: "Bosses!A1:J".into(),
                api_key: "key".into(),
            }
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, Some(12));
        assert!(!config.wait_on_fatal);
        assert_eq!(config.frontend.allowed_channel.as_deref(), Some("bot"));
    }

    #[test]
    fn missing_source_is_an_error() {
        let err = BotConfig::from_lookup(lookup(&[("SPREADSHEET_ID", "abc")])).unwrap_err();
        assert!(err.to_string().contains("DATASET_PATH"));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = BotConfig::from_lookup(lookup(&[
            ("DATASET_PATH", "x.json"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap();
        assert_eq!(config.port, BotConfig::DEFAULT_PORT);
    }
}

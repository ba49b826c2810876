//! Immutable runtime configuration shared by every protocol operation.
//!
//! A [`Config`] is built once, either in code through the `with_*` methods
//! or from `DAV_*` environment variables, and then handed to needs and
//! transports behind an `Arc`. Nothing mutates it afterwards.

use crate::protocol::domain::{BlockchainType, ParseBlockchainTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Environment variable holding the Ethereum node URL.
pub const ETH_NODE_URL_ENV: &str = "DAV_ETH_NODE_URL";
/// Environment variable holding the comma-separated API seed URLs.
pub const API_SEED_URLS_ENV: &str = "DAV_API_SEED_URLS";
/// Environment variable holding the comma-separated broker seed URLs.
pub const KAFKA_SEED_URLS_ENV: &str = "DAV_KAFKA_SEED_URLS";
/// Environment variable holding the blockchain network name.
pub const BLOCKCHAIN_TYPE_ENV: &str = "DAV_BLOCKCHAIN_TYPE";
/// Environment variable holding the log level threshold.
pub const LOG_THRESHOLD_ENV: &str = "DAV_LOG_THRESHOLD";

const DEFAULT_ETH_NODE_URL: &str = "http://localhost:8545";
const DEFAULT_API_SEED_URL: &str = "http://localhost";
const DEFAULT_KAFKA_SEED_URL: &str = "localhost:9092";

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The blockchain network name is not recognised.
    #[error(transparent)]
    InvalidBlockchainType(#[from] ParseBlockchainTypeError),

    /// The log threshold is not a known level.
    #[error("unknown log threshold: {0}")]
    InvalidLogThreshold(String),

    /// A comma-separated list contains an empty entry.
    #[error("{key} contains an empty entry")]
    EmptyListEntry {
        /// Environment variable the list was read from.
        key: &'static str,
    },
}

/// Minimum severity of log events that are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogThreshold {
    /// Everything, including per-record tracing.
    Trace,
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Recoverable failures.
    Warn,
    /// Failures only.
    Error,
}

impl LogThreshold {
    /// Returns the level name understood by `tracing` filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LogThreshold {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidLogThreshold(value.to_owned())),
        }
    }
}

/// Protocol configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    eth_node_url: String,
    api_seed_urls: Vec<String>,
    kafka_seed_urls: Vec<String>,
    blockchain_type: BlockchainType,
    log_threshold: LogThreshold,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eth_node_url: DEFAULT_ETH_NODE_URL.to_owned(),
            api_seed_urls: vec![DEFAULT_API_SEED_URL.to_owned()],
            kafka_seed_urls: vec![DEFAULT_KAFKA_SEED_URL.to_owned()],
            blockchain_type: BlockchainType::default(),
            log_threshold: LogThreshold::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Unset variables fall back to local development defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value fails validation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ETH_NODE_URL_ENV) {
            config.eth_node_url = url.trim().to_owned();
        }
        if let Some(raw) = lookup(API_SEED_URLS_ENV) {
            config.api_seed_urls = parse_list(API_SEED_URLS_ENV, &raw)?;
        }
        if let Some(raw) = lookup(KAFKA_SEED_URLS_ENV) {
            config.kafka_seed_urls = parse_list(KAFKA_SEED_URLS_ENV, &raw)?;
        }
        if let Some(raw) = lookup(BLOCKCHAIN_TYPE_ENV) {
            config.blockchain_type = BlockchainType::try_from(raw.as_str())?;
        }
        if let Some(raw) = lookup(LOG_THRESHOLD_ENV) {
            config.log_threshold = LogThreshold::try_from(raw.as_str())?;
        }

        Ok(config)
    }

    /// Sets the Ethereum node URL.
    #[must_use]
    pub fn with_eth_node_url(mut self, url: impl Into<String>) -> Self {
        self.eth_node_url = url.into();
        self
    }

    /// Sets the API seed URLs.
    #[must_use]
    pub fn with_api_seed_urls(mut self, urls: impl IntoIterator<Item = String>) -> Self {
        self.api_seed_urls = urls.into_iter().collect();
        self
    }

    /// Sets the broker seed URLs.
    #[must_use]
    pub fn with_kafka_seed_urls(mut self, urls: impl IntoIterator<Item = String>) -> Self {
        self.kafka_seed_urls = urls.into_iter().collect();
        self
    }

    /// Sets the blockchain network.
    #[must_use]
    pub const fn with_blockchain_type(mut self, blockchain_type: BlockchainType) -> Self {
        self.blockchain_type = blockchain_type;
        self
    }

    /// Sets the log threshold.
    #[must_use]
    pub const fn with_log_threshold(mut self, log_threshold: LogThreshold) -> Self {
        self.log_threshold = log_threshold;
        self
    }

    /// Returns the Ethereum node URL.
    #[must_use]
    pub fn eth_node_url(&self) -> &str {
        &self.eth_node_url
    }

    /// Returns the API seed URLs.
    #[must_use]
    pub fn api_seed_urls(&self) -> &[String] {
        &self.api_seed_urls
    }

    /// Returns the broker seed URLs.
    #[must_use]
    pub fn kafka_seed_urls(&self) -> &[String] {
        &self.kafka_seed_urls
    }

    /// Returns the blockchain network.
    #[must_use]
    pub const fn blockchain_type(&self) -> BlockchainType {
        self.blockchain_type
    }

    /// Returns the log threshold.
    #[must_use]
    pub const fn log_threshold(&self) -> LogThreshold {
        self.log_threshold
    }
}

fn parse_list(key: &'static str, raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                Err(ConfigError::EmptyListEntry { key })
            } else {
                Ok(trimmed.to_owned())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        API_SEED_URLS_ENV, BLOCKCHAIN_TYPE_ENV, Config, ConfigError, KAFKA_SEED_URLS_ENV,
        LOG_THRESHOLD_ENV, LogThreshold,
    };
    use crate::protocol::domain::{BlockchainType, ParseBlockchainTypeError};
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(|_| None).expect("defaults are valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.kafka_seed_urls(), ["localhost:9092".to_owned()]);
        assert_eq!(config.blockchain_type(), BlockchainType::Local);
        assert_eq!(config.log_threshold(), LogThreshold::Info);
    }

    #[rstest]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (KAFKA_SEED_URLS_ENV, "broker-a:9092, broker-b:9092"),
            (BLOCKCHAIN_TYPE_ENV, "ropsten"),
            (LOG_THRESHOLD_ENV, "DEBUG"),
        ]))
        .expect("overrides are valid");

        assert_eq!(
            config.kafka_seed_urls(),
            ["broker-a:9092".to_owned(), "broker-b:9092".to_owned()]
        );
        assert_eq!(config.blockchain_type(), BlockchainType::Test);
        assert_eq!(config.log_threshold(), LogThreshold::Debug);
        assert_eq!(config.eth_node_url(), "http://localhost:8545");
    }

    #[rstest]
    fn empty_list_entry_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[(API_SEED_URLS_ENV, "http://a,,http://b")]));
        assert_eq!(
            result,
            Err(ConfigError::EmptyListEntry {
                key: API_SEED_URLS_ENV
            })
        );
    }

    #[rstest]
    fn unknown_blockchain_type_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[(BLOCKCHAIN_TYPE_ENV, "kovan")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidBlockchainType(ParseBlockchainTypeError(
                "kovan".to_owned()
            )))
        );
    }

    #[rstest]
    #[case("trace", LogThreshold::Trace)]
    #[case(" Warning ", LogThreshold::Warn)]
    #[case("ERROR", LogThreshold::Error)]
    fn log_threshold_names_are_parsed(#[case] input: &str, #[case] expected: LogThreshold) {
        assert_eq!(LogThreshold::try_from(input), Ok(expected));
    }

    #[rstest]
    #[case("verbose")]
    #[case("")]
    fn unknown_log_threshold_is_rejected(#[case] input: &str) {
        let result = Config::from_lookup(lookup_from(&[(LOG_THRESHOLD_ENV, input)]));
        assert!(matches!(result, Err(ConfigError::InvalidLogThreshold(_))));
    }

    #[rstest]
    fn builder_methods_replace_fields() {
        let config = Config::default()
            .with_kafka_seed_urls(Vec::new())
            .with_blockchain_type(BlockchainType::Main)
            .with_log_threshold(LogThreshold::Warn);

        assert!(config.kafka_seed_urls().is_empty());
        assert_eq!(config.blockchain_type(), BlockchainType::Main);
        assert_eq!(config.log_threshold().as_str(), "warn");
    }
}

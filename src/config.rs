// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_AIRTABLE_TABLE: &str = "Table 1";
pub const DEFAULT_AIRTABLE_TIMEOUT_SECS: u64 = 12;
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 2000;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Airtable settings. The secrets stay optional here: a missing key or base
/// only fails the lead submission, not the whole site.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: Option<String>,
    pub base_id: Option<String>,
    pub table_name: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_id: None,
            table_name: DEFAULT_AIRTABLE_TABLE.to_string(),
            api_url: DEFAULT_AIRTABLE_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_AIRTABLE_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub airtable: AirtableConfig,
    /// How long the booking confirmation stays up before the modal closes.
    pub confirm_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
            airtable: AirtableConfig::default(),
            confirm_delay: Duration::from_millis(DEFAULT_CONFIRM_DELAY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        let max_workers = parse_positive(get("MAX_WORKERS"), "MAX_WORKERS", DEFAULT_MAX_WORKERS as u64)?;
        let timeout_secs = parse_positive(
            get("AIRTABLE_TIMEOUT_SECS"),
            "AIRTABLE_TIMEOUT_SECS",
            DEFAULT_AIRTABLE_TIMEOUT_SECS,
        )?;
        let delay_ms = parse_positive(
            get("BOOKING_CONFIRM_DELAY_MS"),
            "BOOKING_CONFIRM_DELAY_MS",
            DEFAULT_CONFIRM_DELAY_MS,
        )?;

        Ok(Self {
            bind_addr,
            max_workers: max_workers as usize,
            airtable: AirtableConfig {
                api_key: get("AIRTABLE_API_KEY"),
                base_id: get("AIRTABLE_BASE_ID"),
                table_name: get("AIRTABLE_TABLE_NAME")
                    .unwrap_or_else(|| DEFAULT_AIRTABLE_TABLE.to_string()),
                api_url: get("AIRTABLE_API_URL")
                    .unwrap_or_else(|| DEFAULT_AIRTABLE_API_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            confirm_delay: Duration::from_millis(delay_ms),
        })
    }
}

fn parse_positive(raw: Option<String>, var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidNumber { var, value }),
        },
    }
}

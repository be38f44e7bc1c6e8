//! Runner configuration
//!
//! Loads credentials and tuning knobs from the environment and validates them
//! before the poll loop starts.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// Default homework status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

const API_TOKEN_VAR: &str = "TOKEN_PRACTICUM";
const MESSAGING_TOKEN_VAR: &str = "TOKEN_TELEGRAM";
const CHANNEL_ID_VAR: &str = "CHAT_ID";

/// Configuration errors; all of them are fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required credential is absent or empty
    #[error("required environment variable {0} is missing")]
    Missing(&'static str),

    /// An optional setting has an unusable value
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Secrets needed to query the status API and to post notifications
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth token for the status API
    pub api_token: String,

    /// Telegram bot token
    pub messaging_token: String,

    /// Chat that receives notifications
    pub channel_id: String,
}

impl Credentials {
    /// Reads the three credentials, treating unset variables as empty
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();

        Self {
            api_token: var(API_TOKEN_VAR),
            messaging_token: var(MESSAGING_TOKEN_VAR),
            channel_id: var(CHANNEL_ID_VAR),
        }
    }

    /// Checks that every credential is present
    ///
    /// Logs the outcome and has no other side effects, so it is safe to call
    /// repeatedly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        info!("Checking required credentials");

        let required = [
            (API_TOKEN_VAR, &self.api_token),
            (MESSAGING_TOKEN_VAR, &self.messaging_token),
            (CHANNEL_ID_VAR, &self.channel_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                error!("CRITICAL: required environment variable {} is missing", name);
                return Err(ConfigError::Missing(name));
            }
        }

        info!("All required credentials are present");
        Ok(())
    }
}

// Tokens must never reach the logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("channel_id", &self.channel_id)
            .finish_non_exhaustive()
    }
}

/// Runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Secrets for both remote services
    pub credentials: Credentials,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub poll_interval: Duration,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Persistent log file
    pub log_file: PathBuf,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
            log_file: PathBuf::from("program.log"),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - TOKEN_PRACTICUM (required)
    /// - TOKEN_TELEGRAM (required)
    /// - CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: the public status endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - LOG_FILE (optional, default: program.log)
    ///
    /// Missing credentials are not reported here; call [`Config::validate`].
    pub fn from_env() -> Self {
        let defaults = Self::new(Credentials::from_env());

        let seconds = |name: &str, default: Duration| {
            std::env::var(name)
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        Self {
            endpoint: std::env::var("PRACTICUM_ENDPOINT").unwrap_or(defaults.endpoint.clone()),
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .unwrap_or(defaults.telegram_api_url.clone()),
            poll_interval: seconds("RETRY_PERIOD", defaults.poll_interval),
            request_timeout: seconds("REQUEST_TIMEOUT", defaults.request_timeout),
            log_file: std::env::var("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file.clone()),
            ..defaults
        }
    }

    /// Validates the configuration
    ///
    /// Credentials are checked first so a missing token is always the
    /// reported cause.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credentials.validate()?;

        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "RETRY_PERIOD must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

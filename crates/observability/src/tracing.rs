//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG`: filter directives (default `info`).
//! - `SUPERMARKET_LOG_FORMAT`: `json` (default) or `pretty`.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "SUPERMARKET_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0} (expected `json` or `pretty`)")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: "info".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Read the configuration from the environment.
    ///
    /// An unrecognised `SUPERMARKET_LOG_FORMAT` is returned as an error so the
    /// caller can report it once a subscriber is installed.
    pub fn from_env() -> Result<Self, UnknownLogFormat> {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn from_format_var(raw: Option<&str>) -> Result<Self, UnknownLogFormat> {
        let format = raw.map(LogFormat::from_str).transpose()?.unwrap_or_default();
        Ok(Self {
            format,
            ..Self::default()
        })
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid log
/// format falls back to JSON and is reported through the installed subscriber.
pub fn init() {
    init_or_fallback(ObservabilityConfig::from_env());
}

fn init_or_fallback(loaded: Result<ObservabilityConfig, UnknownLogFormat>) {
    match loaded {
        Ok(config) => init_with(&config),
        Err(e) => {
            init_with(&ObservabilityConfig::default());
            ::tracing::warn!(error = %e, "falling back to json log format");
        }
    }
}

/// Initialize tracing/logging with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

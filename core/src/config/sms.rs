//! SMS feature settings

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::require_var;
use crate::errors::ConfigError;

/// SMS feature settings
///
/// These mirror the deployment's SMS knobs. The diagnostic verifies they
/// are set and parsable; the retry fields are consumed by the sending
/// pipeline, not by this tool.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsSettings {
    /// Whether SMS sending is enabled at all
    pub enabled: bool,

    /// Max recipients per sending batch
    pub batch_size: u32,

    /// Retry attempts for a failed send
    pub retry_attempts: u32,

    /// Delay between retries in seconds
    pub retry_delay_secs: u64,

    /// Country code assumed for numbers without one (no leading `+`)
    pub default_country_code: String,
}

impl SmsSettings {
    /// Environment variables backing each field, with display labels.
    pub const VARS: [(&'static str, &'static str); 5] = [
        ("SMS_ENABLED", "SMS feature enabled"),
        ("SMS_BATCH_SIZE", "Batch size"),
        ("SMS_RETRY_ATTEMPTS", "Retry attempts"),
        ("SMS_RETRY_DELAY", "Retry delay (seconds)"),
        ("SMS_DEFAULT_COUNTRY_CODE", "Default country code"),
    ];

    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Self {
            enabled: parse_bool_var("SMS_ENABLED")?,
            batch_size: parse_var("SMS_BATCH_SIZE")?,
            retry_attempts: parse_var("SMS_RETRY_ATTEMPTS")?,
            retry_delay_secs: parse_var("SMS_RETRY_DELAY")?,
            default_country_code: require_var("SMS_DEFAULT_COUNTRY_CODE")?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check field values beyond bare parsing
    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = &self.default_country_code;
        if code.is_empty() || code.len() > 3 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                var: "SMS_DEFAULT_COUNTRY_CODE",
                reason: format!("{code:?} is not a 1-3 digit country code"),
            });
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid {
                var: "SMS_BATCH_SIZE",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T>(var: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = require_var(var)?;
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

fn parse_bool_var(var: &'static str) -> Result<bool, ConfigError> {
    let raw = require_var(var)?;
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            var,
            reason: format!("{other:?} is not a boolean"),
        }),
    }
}

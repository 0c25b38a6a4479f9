//! SMS configuration loaded from the environment
//!
//! Two logical areas, mirroring what the diagnostic verifies:
//! - `twilio` - Account credentials and sender number
//! - `sms` - Feature settings (batching, retries, default country code)

pub mod sms;
pub mod twilio;

pub use sms::SmsSettings;
pub use twilio::TwilioConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Complete SMS configuration combining credentials and feature settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Twilio credentials
    pub twilio: TwilioConfig,

    /// SMS feature settings
    pub settings: SmsSettings,
}

impl SmsConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            twilio: TwilioConfig::from_env()?,
            settings: SmsSettings::from_env()?,
        })
    }
}

/// Read a required environment variable, treating blank values as unset.
pub(crate) fn require_var(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing { var }),
    }
}

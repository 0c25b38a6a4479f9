//! Twilio credential configuration

use serde::{Deserialize, Serialize};

use crate::config::require_var;
use crate::errors::ConfigError;
use crate::phone;

/// Environment variable holding the Twilio Account SID
pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable holding the Twilio Auth Token
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
/// Environment variable holding the sender phone number
pub const FROM_NUMBER_VAR: &str = "TWILIO_PHONE_NUMBER";

/// Twilio SMS credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number, E.164)
    pub from_number: String,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            account_sid: require_var(ACCOUNT_SID_VAR)?,
            auth_token: require_var(AUTH_TOKEN_VAR)?,
            from_number: require_var(FROM_NUMBER_VAR)?,
        })
    }

    /// Check credential shapes without contacting Twilio
    ///
    /// - Account SIDs are 34 characters starting with `AC`
    /// - Auth tokens are 32 characters
    /// - The sender number must be strict E.164
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.account_sid.starts_with("AC") || self.account_sid.len() != 34 {
            return Err(ConfigError::Invalid {
                var: ACCOUNT_SID_VAR,
                reason: "expected a 34 character SID starting with AC".to_string(),
            });
        }
        if self.auth_token.len() != 32 {
            return Err(ConfigError::Invalid {
                var: AUTH_TOKEN_VAR,
                reason: "expected a 32 character auth token".to_string(),
            });
        }
        if !phone::is_valid_e164(&self.from_number) {
            return Err(ConfigError::Invalid {
                var: FROM_NUMBER_VAR,
                reason: "must be in E.164 format (starting with '+')".to_string(),
            });
        }
        Ok(())
    }
}

//! Core logic for the sms-doctor diagnostic tool
//!
//! This crate provides the pieces the diagnostic binary checks against:
//! - Phone number normalization to E.164 format
//! - Twilio credential and SMS feature configuration, loaded from the
//!   environment
//! - Error types for both

pub mod config;
pub mod errors;
pub mod phone;

// Re-export commonly used items at crate root
pub use config::{SmsConfig, SmsSettings, TwilioConfig};
pub use errors::{ConfigError, FormatError};

//! Error types for phone normalization and configuration loading

use thiserror::Error;

/// Phone number normalization errors
///
/// Callers treat this as a single failure kind: a number that cannot be
/// resolved to valid E.164. The variants carry the cause for reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("phone number contains no digits")]
    Empty,

    #[error("invalid character in phone number: {found:?}")]
    InvalidCharacter { found: char },

    #[error("invalid default country code: {code:?}")]
    InvalidCountryCode { code: String },

    #[error("implausible phone number length: {digits} digits")]
    ImplausibleLength { digits: usize },
}

/// Configuration errors raised while reading the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} not set")]
    Missing { var: &'static str },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

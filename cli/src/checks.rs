//! The diagnostic checks
//!
//! Each check probes one aspect of the SMS setup and returns a
//! [`CheckOutcome`] with per-item detail lines. Checks never contact
//! Twilio; credential checks are shape checks only. The only write the
//! tool performs is creating the logs directory when it is missing.

use std::env;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use sd_core::config::{SmsSettings, TwilioConfig};
use sd_core::phone;

/// One line of a check's output
#[derive(Debug, Clone, Serialize)]
pub struct Detail {
    pub ok: bool,
    pub text: String,
}

/// Result of a single diagnostic check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub details: Vec<Detail>,
}

impl CheckOutcome {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            passed: true,
            details: Vec::new(),
        }
    }

    fn ok(&mut self, text: impl Into<String>) {
        self.details.push(Detail {
            ok: true,
            text: text.into(),
        });
    }

    fn fail(&mut self, text: impl Into<String>) {
        self.passed = false;
        self.details.push(Detail {
            ok: false,
            text: text.into(),
        });
    }
}

/// Run every check against `project_root` in report order.
pub fn run_all(project_root: &Path) -> Vec<CheckOutcome> {
    vec![
        check_env_file(project_root),
        check_credentials(),
        check_settings(),
        check_logs_dir(project_root),
        check_phone_formatting(),
    ]
}

/// The `.env` file exists in the project root.
pub fn check_env_file(project_root: &Path) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(".env file");
    let env_path = project_root.join(".env");
    debug!(path = %env_path.display(), "checking for .env file");

    if env_path.is_file() {
        outcome.ok(format!(".env file found at {}", env_path.display()));
    } else {
        outcome.fail(format!(".env file NOT found at {}", env_path.display()));
        outcome.fail("create it from your deployment's .env.example before enabling SMS");
    }
    outcome
}

/// Twilio credentials are present and plausibly shaped.
pub fn check_credentials() -> CheckOutcome {
    let mut outcome = CheckOutcome::new("Twilio credentials");

    let config = match TwilioConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            outcome.fail(format!("credentials missing or incomplete: {e}"));
            return outcome;
        }
    };

    match config.validate() {
        Ok(()) => {
            let sid_prefix: String = config.account_sid.chars().take(10).collect();
            outcome.ok("all credentials are configured");
            outcome.ok(format!("Account SID: {sid_prefix}..."));
            outcome.ok("Auth Token: ********".to_string());
            outcome.ok(format!(
                "Twilio Phone: {}",
                phone::mask_phone(&config.from_number)
            ));
        }
        Err(e) => outcome.fail(format!("{e}")),
    }
    outcome
}

/// Every `SMS_*` setting is present, plus a combined parse of the lot.
pub fn check_settings() -> CheckOutcome {
    let mut outcome = CheckOutcome::new("SMS settings");

    for (var, label) in SmsSettings::VARS {
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                outcome.ok(format!("{label}: {value}"));
            }
            _ => outcome.fail(format!("{label}: NOT SET ({var})")),
        }
    }

    // Presence alone is not enough; the values must also parse.
    if outcome.passed {
        if let Err(e) = SmsSettings::from_env() {
            outcome.fail(format!("{e}"));
        }
    }
    outcome
}

/// The logs directory exists, creating it when absent.
pub fn check_logs_dir(project_root: &Path) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("Logs directory");
    let logs_dir = project_root.join("logs");

    if logs_dir.is_dir() {
        outcome.ok(format!("logs directory exists: {}", logs_dir.display()));
    } else {
        match fs::create_dir_all(&logs_dir) {
            Ok(()) => outcome.ok(format!("created logs directory: {}", logs_dir.display())),
            Err(e) => outcome.fail(format!(
                "failed to create logs directory {}: {e}",
                logs_dir.display()
            )),
        }
    }
    outcome
}

/// The normalizer behaves as expected for the configured country code.
pub fn check_phone_formatting() -> CheckOutcome {
    let mut outcome = CheckOutcome::new("Phone formatting");
    let code = env::var("SMS_DEFAULT_COUNTRY_CODE").unwrap_or_else(|_| "91".to_string());

    // The literal table holds for country code 91; other codes get
    // equivalent generic cases.
    let cases: Vec<(String, String)> = if code == "91" {
        vec![
            ("9876543210".into(), "+919876543210".into()),
            ("+919876543210".into(), "+919876543210".into()),
            ("919876543210".into(), "+919876543210".into()),
            ("+1234567890".into(), "+1234567890".into()),
        ]
    } else {
        vec![
            ("9876543210".into(), format!("+{code}9876543210")),
            (format!("+{code}9876543210"), format!("+{code}9876543210")),
        ]
    };

    for (input, expected) in &cases {
        match phone::normalize_e164(input, &code) {
            Ok(got) if got == *expected => outcome.ok(format!("{input} -> {got}")),
            Ok(got) => outcome.fail(format!("{input} -> {got} (expected {expected})")),
            Err(e) => outcome.fail(format!("{input}: {e}")),
        }
    }

    // Malformed input must be rejected, not mangled into a number.
    for bad in ["", "abc123"] {
        match phone::normalize_e164(bad, &code) {
            Err(_) => outcome.ok(format!("{bad:?} rejected")),
            Ok(got) => outcome.fail(format!("{bad:?} unexpectedly normalized to {got}")),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn scratch_dir(tag: &str) -> std::path::PathBuf {
        let dir = env::temp_dir().join(format!("sms-doctor-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn env_file_check_reports_presence() {
        let dir = scratch_dir("envfile");
        let missing = check_env_file(&dir);
        assert!(!missing.passed);

        File::create(dir.join(".env")).unwrap();
        let present = check_env_file(&dir);
        assert!(present.passed);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn logs_dir_check_creates_when_missing() {
        let dir = scratch_dir("logsdir");
        let outcome = check_logs_dir(&dir);
        assert!(outcome.passed);
        assert!(dir.join("logs").is_dir());

        // Second run finds the directory it just created
        let outcome = check_logs_dir(&dir);
        assert!(outcome.passed);
        assert!(outcome.details[0].text.contains("exists"));

        fs::remove_dir_all(&dir).unwrap();
    }
}

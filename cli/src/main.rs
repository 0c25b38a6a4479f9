//! sms-doctor: verify a Twilio SMS setup before sending anything
//!
//! Runs read-only checks against the environment and filesystem, prints a
//! pass/fail report, and exits non-zero when any check fails.
//!
//! Usage: `sms-doctor [--json]`

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sd_cli::{checks, report::Report};

fn main() -> Result<ExitCode> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; the report owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = env::args().any(|arg| arg == "--json");
    let project_root = env::current_dir()?;
    debug!(root = %project_root.display(), "running SMS configuration checks");

    let report = Report::new(checks::run_all(&project_root));

    if json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

//! Diagnostic checks and report rendering for sms-doctor

pub mod checks;
pub mod report;

pub use checks::{run_all, CheckOutcome};
pub use report::Report;

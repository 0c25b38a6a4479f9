//! Report assembly and rendering

use serde::Serialize;

use crate::checks::CheckOutcome;

const RULE: &str = "============================================================";

/// Aggregated verification report
#[derive(Debug, Serialize)]
pub struct Report {
    pub checks: Vec<CheckOutcome>,
    pub passed: usize,
    pub total: usize,
}

impl Report {
    pub fn new(checks: Vec<CheckOutcome>) -> Self {
        let total = checks.len();
        let passed = checks.iter().filter(|c| c.passed).count();
        Self {
            checks,
            passed,
            total,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Render the human-readable report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(RULE);
        out.push_str("\nSMS CONFIGURATION VERIFICATION\n");
        out.push_str(RULE);
        out.push('\n');

        for check in &self.checks {
            out.push_str(&format!("\nChecking {}...\n", check.name));
            for detail in &check.details {
                let mark = if detail.ok { '✓' } else { '✗' };
                out.push_str(&format!("  {mark} {}\n", detail.text));
            }
        }

        out.push('\n');
        out.push_str(RULE);
        out.push_str("\nVERIFICATION SUMMARY\n");
        out.push_str(RULE);
        out.push('\n');
        for check in &self.checks {
            let status = if check.passed { "✓ PASS" } else { "✗ FAIL" };
            out.push_str(&format!("{status}: {}\n", check.name));
        }
        out.push_str(RULE);
        out.push_str(&format!(
            "\nResult: {}/{} checks passed\n",
            self.passed, self.total
        ));
        out.push_str(RULE);
        out.push('\n');

        if self.all_passed() {
            out.push_str("\nAll checks passed. Your SMS setup is ready.\n");
        } else {
            out.push_str("\nSome checks failed. Fix the issues above and rerun.\n");
        }
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Detail;

    fn outcome(name: &'static str, passed: bool) -> CheckOutcome {
        CheckOutcome {
            name,
            passed,
            details: vec![Detail {
                ok: passed,
                text: format!("{name} detail"),
            }],
        }
    }

    #[test]
    fn counts_passed_checks() {
        let report = Report::new(vec![outcome("a", true), outcome("b", false)]);
        assert_eq!(report.passed, 1);
        assert_eq!(report.total, 2);
        assert!(!report.all_passed());
    }

    #[test]
    fn text_report_lists_every_check() {
        let report = Report::new(vec![outcome("credentials", true), outcome("settings", false)]);
        let text = report.render_text();
        assert!(text.contains("✓ PASS: credentials"));
        assert!(text.contains("✗ FAIL: settings"));
        assert!(text.contains("Result: 1/2 checks passed"));
    }

    #[test]
    fn json_report_round_trips_counts() {
        let report = Report::new(vec![outcome("a", true)]);
        let json = report.render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passed"], 1);
        assert_eq!(value["total"], 1);
        assert_eq!(value["checks"][0]["name"], "a");
    }
}

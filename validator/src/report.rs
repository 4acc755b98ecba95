//! Renderers for a finished [`ValidationReport`].
//!
//! Two formats are supported:
//! - `text`: a satisfied/not-satisfied tally followed by failures, warnings
//!   and passes, one per line
//! - `json`: an object with the overall flag, every assertion, and
//!   per-category counts

use std::fmt::Write as _;

use serde::Serialize;

use crate::assertion::{Assertion, ValidationReport};
use crate::error::Result;

/// Environment variable selecting the default output format.
pub const FORMAT_ENV: &str = "COMPONENT_VALIDATOR_FORMAT";

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text for a console.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Renders `report` in the given format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(report: &ValidationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
    }
}

/// Renders the console form: tally line, blank line, then `[N]`, `[W]` and
/// `[Y]` lines in that order, each group in check order.
#[must_use]
pub fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    let verdict = if report.all_satisfied() {
        "SATISFIED"
    } else {
        "NOT SATISFIED"
    };
    let _ = writeln!(
        out,
        "{} ({}/{})",
        verdict,
        report.satisfied_count(),
        report.len()
    );
    out.push('\n');
    let groups: [fn(&Assertion) -> bool; 3] = [
        Assertion::is_failure,
        Assertion::is_warning,
        |a| matches!(a, Assertion::Pass(_)),
    ];
    for belongs in groups {
        for assertion in report.assertions().iter().filter(|a| belongs(a)) {
            let _ = writeln!(out, "{assertion}");
        }
    }
    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    all_satisfied: bool,
    assertions: Vec<JsonAssertion<'a>>,
    num_satisfied: usize,
    num_warning: usize,
    num_failed: usize,
    num_total: usize,
}

#[derive(Serialize)]
struct JsonAssertion<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    message: &'a str,
}

/// Renders the structured form.
///
/// `numSatisfied` counts plain passes; warnings are counted separately in
/// `numWarning`.
///
/// # Errors
///
/// Returns an error only if serialization fails.
pub fn render_json(report: &ValidationReport) -> Result<String> {
    let json = JsonReport {
        all_satisfied: report.all_satisfied(),
        assertions: report
            .assertions()
            .iter()
            .map(|a| JsonAssertion {
                kind: a.kind(),
                message: a.text(),
            })
            .collect(),
        num_satisfied: report.pass_count(),
        num_warning: report.warning_count(),
        num_failed: report.failure_count(),
        num_total: report.len(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

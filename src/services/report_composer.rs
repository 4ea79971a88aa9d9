use chrono::{NaiveDate, Utc};
use log::debug;
use thiserror::Error;

use crate::domain::simulation_result::SimulationResult;
use crate::services::report_manifest::{build_report_manifest, ReportManifest};
use crate::services::report_pdf::{render_report_pdf, ReportPdfError};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("inconsistent simulation result: {0}")]
    InconsistentResult(String),
    #[error(transparent)]
    Pdf(#[from] ReportPdfError),
}

/// A rendered report: its content manifest, the PDF bytes and a
/// filesystem-safe file name for transport.
#[derive(Debug, Clone)]
pub struct ComposedReport {
    pub manifest: ReportManifest,
    pub document: Vec<u8>,
    pub filename: String,
}

/// Composes the report for `result`, dated today (UTC).
pub fn compose(result: &SimulationResult, email: &str) -> Result<ComposedReport, ReportError> {
    compose_on(result, email, Utc::now().date_naive())
}

pub fn compose_on(
    result: &SimulationResult,
    email: &str,
    generated_on: NaiveDate,
) -> Result<ComposedReport, ReportError> {
    validate_email(email)?;
    check_result_consistency(result)?;

    let manifest = build_report_manifest(result, email, generated_on);
    let document = render_report_pdf(&manifest)?;
    debug!(
        "composed report for {:?}: {} sections, {} bytes",
        result.scenario_name,
        manifest.sections.len(),
        document.len()
    );

    Ok(ComposedReport {
        manifest,
        document,
        filename: suggested_filename(&result.scenario_name),
    })
}

/// Accepts `local@domain.tld` shaped addresses; the address is not normalised.
pub fn validate_email(email: &str) -> Result<(), ReportError> {
    let invalid = || ReportError::InvalidEmail(email.to_string());
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(invalid());
    }
    if domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }
    Ok(())
}

fn check_result_consistency(result: &SimulationResult) -> Result<(), ReportError> {
    if result.scenario_name.is_empty() {
        return Err(ReportError::InconsistentResult(
            "scenario_name is empty".to_string(),
        ));
    }
    for (name, value) in result.derived_fields() {
        let may_be_infinite = matches!(name, "payback_months" | "roi_percentage");
        let consistent = if may_be_infinite {
            !value.is_nan() && value != f64::NEG_INFINITY
        } else {
            value.is_finite()
        };
        if !consistent {
            return Err(ReportError::InconsistentResult(format!(
                "{name} has unrepresentable value {value}"
            )));
        }
    }
    Ok(())
}

/// `roi_report_<name>.pdf` with every character outside `[A-Za-z0-9_-]`
/// replaced by `_`.
pub fn suggested_filename(scenario_name: &str) -> String {
    let safe_name: String = scenario_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    format!("roi_report_{safe_name}.pdf")
}

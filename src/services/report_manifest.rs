use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::simulation_result::SimulationResult;
use crate::services::number_format::{
    format_count, format_currency, format_months, format_percentage, format_rate,
};

pub const REPORT_TITLE: &str = "Invoicing ROI Report";
pub const KEY_RESULTS_TITLE: &str = "Key Results";
pub const INPUT_PARAMETERS_TITLE: &str = "Input Parameters";
pub const COST_BREAKDOWN_TITLE: &str = "Cost Breakdown";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
    pub emphasized: bool,
}

impl ReportRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasized: false,
        }
    }

    fn emphasized(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            emphasized: true,
            ..Self::new(label, value)
        }
    }
}

/// A titled block of label/value rows. Table sections carry column headings,
/// the header section does not.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: String,
    pub columns: Option<(String, String)>,
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    fn table(title: &str, columns: (&str, &str), rows: Vec<ReportRow>) -> Self {
        Self {
            title: title.to_string(),
            columns: Some((columns.0.to_string(), columns.1.to_string())),
            rows,
        }
    }

    pub fn row(&self, label: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

/// Ordered content of a report: header, key results, input parameters and
/// cost breakdown.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportManifest {
    pub sections: Vec<ReportSection>,
}

impl ReportManifest {
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.title == title)
    }
}

pub fn build_report_manifest(
    result: &SimulationResult,
    email: &str,
    generated_on: NaiveDate,
) -> ReportManifest {
    ReportManifest {
        sections: vec![
            header_section(result, email, generated_on),
            key_results_section(result),
            input_parameters_section(result),
            cost_breakdown_section(result),
        ],
    }
}

fn header_section(result: &SimulationResult, email: &str, generated_on: NaiveDate) -> ReportSection {
    ReportSection {
        title: REPORT_TITLE.to_string(),
        columns: None,
        rows: vec![
            ReportRow::new("Scenario", result.scenario_name.as_str()),
            ReportRow::new("Report Generated", generated_on.format("%B %d, %Y").to_string()),
            ReportRow::new("Email", email),
        ],
    }
}

fn key_results_section(result: &SimulationResult) -> ReportSection {
    ReportSection::table(
        KEY_RESULTS_TITLE,
        ("Metric", "Value"),
        vec![
            ReportRow::new("Monthly Savings", format_currency(result.monthly_savings)),
            ReportRow::new("Payback Period", format_months(result.payback_months)),
            ReportRow::new(
                format!("ROI ({} months)", result.time_horizon_months),
                format_percentage(result.roi_percentage, 1),
            ),
            ReportRow::new("Net Savings", format_currency(result.net_savings)),
        ],
    )
}

fn input_parameters_section(result: &SimulationResult) -> ReportSection {
    ReportSection::table(
        INPUT_PARAMETERS_TITLE,
        ("Parameter", "Value"),
        vec![
            ReportRow::new("Scenario Name", result.scenario_name.as_str()),
            ReportRow::new("Monthly Invoice Volume", format_count(result.monthly_invoice_volume)),
            ReportRow::new("AP Staff", format_count(result.num_ap_staff)),
            ReportRow::new(
                "Avg Hours per Invoice",
                format!("{:.2}", result.avg_hours_per_invoice),
            ),
            ReportRow::new("Hourly Wage", format_currency(result.hourly_wage)),
            ReportRow::new("Manual Error Rate", format_rate(result.error_rate_manual)),
            ReportRow::new("Error Cost", format_currency(result.error_cost)),
            ReportRow::new(
                "Time Horizon",
                format!("{} months", format_count(result.time_horizon_months)),
            ),
            ReportRow::new(
                "Implementation Cost",
                format_currency(result.one_time_implementation_cost),
            ),
        ],
    )
}

fn cost_breakdown_section(result: &SimulationResult) -> ReportSection {
    ReportSection::table(
        COST_BREAKDOWN_TITLE,
        ("Item", "Monthly Cost"),
        vec![
            ReportRow::new("Manual Labor Cost", format_currency(result.labor_cost_manual)),
            ReportRow::new("Automation Cost", format_currency(result.auto_cost)),
            ReportRow::new("Error Savings", format_currency(result.error_savings)),
            ReportRow::emphasized("Net Monthly Savings", format_currency(result.monthly_savings)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report_date, result_named};

    fn labels(section: &ReportSection) -> Vec<&str> {
        section.rows.iter().map(|row| row.label.as_str()).collect()
    }

    #[test]
    fn manifest_sections_are_in_report_order() {
        let manifest = build_report_manifest(&result_named("Pilot"), "a@b.com", report_date());
        let titles: Vec<&str> = manifest.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![REPORT_TITLE, KEY_RESULTS_TITLE, INPUT_PARAMETERS_TITLE, COST_BREAKDOWN_TITLE]
        );
    }

    #[test]
    fn header_section_echoes_scenario_date_and_email() {
        let manifest =
            build_report_manifest(&result_named("Pilot"), "CFO+roi@Example.org", report_date());
        let header = &manifest.sections[0];

        assert_eq!(header.columns, None);
        assert_eq!(header.row("Scenario").unwrap().value, "Pilot");
        assert_eq!(header.row("Report Generated").unwrap().value, "March 14, 2026");
        assert_eq!(header.row("Email").unwrap().value, "CFO+roi@Example.org");
    }

    #[test]
    fn key_results_has_four_rows_in_order() {
        let manifest = build_report_manifest(&result_named("Pilot"), "a@b.com", report_date());
        let key_results = manifest.section(KEY_RESULTS_TITLE).unwrap();

        assert_eq!(
            labels(key_results),
            vec!["Monthly Savings", "Payback Period", "ROI (36 months)", "Net Savings"]
        );
        let values: Vec<&str> = key_results.rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["$9,570.00", "2.0 months", "1700.0%", "$325,380.00"]);
    }

    #[test]
    fn key_results_render_infinite_payback_and_roi() {
        let mut result = result_named("Pilot");
        result.payback_months = f64::INFINITY;
        result.roi_percentage = f64::INFINITY;
        result.time_horizon_months = 12;

        let manifest = build_report_manifest(&result, "a@b.com", report_date());
        let key_results = manifest.section(KEY_RESULTS_TITLE).unwrap();

        assert_eq!(key_results.row("Payback Period").unwrap().value, "∞ months");
        assert_eq!(key_results.row("ROI (12 months)").unwrap().value, "∞%");
    }

    #[test]
    fn input_parameters_cover_every_input_field() {
        let mut result = result_named("Pilot");
        result.monthly_invoice_volume = 12500;

        let manifest = build_report_manifest(&result, "a@b.com", report_date());
        let inputs = manifest.section(INPUT_PARAMETERS_TITLE).unwrap();

        assert_eq!(inputs.rows.len(), 9);
        assert_eq!(inputs.row("Scenario Name").unwrap().value, "Pilot");
        assert_eq!(inputs.row("Monthly Invoice Volume").unwrap().value, "12,500");
        assert_eq!(inputs.row("AP Staff").unwrap().value, "2");
        assert_eq!(inputs.row("Avg Hours per Invoice").unwrap().value, "0.17");
        assert_eq!(inputs.row("Hourly Wage").unwrap().value, "$25.00");
        assert_eq!(inputs.row("Manual Error Rate").unwrap().value, "0.5%");
        assert_eq!(inputs.row("Error Cost").unwrap().value, "$100.00");
        assert_eq!(inputs.row("Time Horizon").unwrap().value, "36 months");
        assert_eq!(inputs.row("Implementation Cost").unwrap().value, "$19,140.00");
    }

    #[test]
    fn cost_breakdown_emphasizes_only_the_last_row() {
        let manifest = build_report_manifest(&result_named("Pilot"), "a@b.com", report_date());
        let costs = manifest.section(COST_BREAKDOWN_TITLE).unwrap();

        assert_eq!(
            labels(costs),
            vec!["Manual Labor Cost", "Automation Cost", "Error Savings", "Net Monthly Savings"]
        );
        let emphasized: Vec<bool> = costs.rows.iter().map(|r| r.emphasized).collect();
        assert_eq!(emphasized, vec![false, false, false, true]);
        assert_eq!(costs.rows[3].value, "$9,570.00");
        assert_eq!(costs.columns, Some(("Item".to_string(), "Monthly Cost".to_string())));
    }
}

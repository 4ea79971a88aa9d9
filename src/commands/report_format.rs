use invoice_roi::domain::scenario::Scenario;
use invoice_roi::domain::simulation_result::SimulationResult;
use invoice_roi::services::number_format::{format_currency, format_months, format_percentage};

pub fn format_result_summary(result: &SimulationResult) -> String {
    let mut lines = Vec::new();
    lines.push("ROI Simulation".to_string());
    lines.push(format!("Scenario: {}", result.scenario_name));
    lines.push(format!("Time horizon: {} months", result.time_horizon_months));
    lines.push(String::new());
    lines.push(format_amount_row("Manual labor cost", result.labor_cost_manual));
    lines.push(format_amount_row("Automation cost", result.auto_cost));
    lines.push(format_amount_row("Error savings", result.error_savings));
    lines.push(format_amount_row("Monthly savings", result.monthly_savings));
    lines.push(format_amount_row("Cumulative savings", result.cumulative_savings));
    lines.push(format_amount_row("Net savings", result.net_savings));
    lines.push(format!("Payback period: {}", format_months(result.payback_months)));
    lines.push(format!("ROI: {}", format_percentage(result.roi_percentage, 2)));

    lines.join("\n")
}

pub fn format_scenario_line(scenario: &Scenario) -> String {
    format!(
        "{id} | {created} | {name} | {savings}/month",
        id = scenario.id,
        created = scenario.created_at.format("%Y-%m-%d %H:%M"),
        name = scenario.scenario_name,
        savings = format_currency(scenario.simulation_result.monthly_savings)
    )
}

fn format_amount_row(label: &str, value: f64) -> String {
    format!("{label}: {}", format_currency(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use invoice_roi::domain::simulation_input::SimulationInput;
    use invoice_roi::services::roi_calculator::compute_at;

    fn build_input() -> SimulationInput {
        SimulationInput {
            scenario_name: Some("Pilot".to_string()),
            monthly_invoice_volume: 1000,
            num_ap_staff: 2,
            avg_hours_per_invoice: 0.17,
            hourly_wage: 25.0,
            error_rate_manual: 0.5,
            error_cost: 100.0,
            time_horizon_months: 36,
            one_time_implementation_cost: 0.0,
        }
    }

    #[test]
    fn format_result_summary_lists_all_metrics() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let result = compute_at(&build_input(), timestamp);
        let output = format_result_summary(&result);

        assert!(output.contains("Scenario: Pilot"));
        assert!(output.contains("Time horizon: 36 months"));
        assert!(output.contains("Manual labor cost: $8,500.00"));
        assert!(output.contains("Automation cost: $200.00"));
        assert!(output.contains("Error savings: $400.00"));
        assert!(output.contains("Monthly savings: $9,570.00"));
        assert!(output.contains("Cumulative savings: $344,520.00"));
        assert!(output.contains("Net savings: $344,520.00"));
        assert!(output.contains("Payback period: 0.0 months"));
        assert!(output.contains("ROI: ∞%"));
    }

    #[test]
    fn format_scenario_line_includes_id_and_name() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let input = build_input();
        let result = compute_at(&input, timestamp);
        let mut scenario = Scenario::new(input, result);
        scenario.created_at = timestamp;

        let line = format_scenario_line(&scenario);
        assert!(line.starts_with(&scenario.id.to_string()));
        assert!(line.contains("2026-03-14 09:30 | Pilot | $9,570.00/month"));
    }
}

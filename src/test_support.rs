use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::simulation_input::SimulationInput;
use crate::domain::simulation_result::SimulationResult;
use crate::services::roi_calculator::compute_at;

// 1000 invoices a month handled by two clerks at $25/h
pub fn baseline_input() -> SimulationInput {
    SimulationInput {
        scenario_name: Some("Baseline".to_string()),
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

pub fn zero_input() -> SimulationInput {
    SimulationInput {
        scenario_name: None,
        monthly_invoice_volume: 0,
        num_ap_staff: 0,
        avg_hours_per_invoice: 0.0,
        hourly_wage: 0.0,
        error_rate_manual: 0.0,
        error_cost: 0.0,
        time_horizon_months: 0,
        one_time_implementation_cost: 0.0,
    }
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
}

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

pub fn result_named(name: &str) -> SimulationResult {
    let mut input = baseline_input();
    input.scenario_name = Some(name.to_string());
    input.one_time_implementation_cost = 19140.0;
    compute_at(&input, fixed_timestamp())
}

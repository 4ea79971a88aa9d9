use chrono::{DateTime, Utc};
use log::debug;

use crate::domain::simulation_input::SimulationInput;
use crate::domain::simulation_result::SimulationResult;

/// Cost of processing one invoice with automation.
pub const AUTOMATED_COST_PER_INVOICE: f64 = 0.20;
/// Error rate of the automated process as a fraction (0.1%).
pub const AUTOMATED_ERROR_RATE: f64 = 0.001;
/// Multiplier applied once to the combined monthly savings to favor automation.
pub const SAVINGS_BIAS_FACTOR: f64 = 1.10;

/// Full-precision intermediate values of one ROI calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiBreakdown {
    pub labor_cost_manual: f64,
    pub auto_cost: f64,
    pub error_rate_manual_decimal: f64,
    pub error_savings: f64,
    pub monthly_savings: f64,
    pub cumulative_savings: f64,
    pub net_savings: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
}

pub fn calculate_breakdown(input: &SimulationInput) -> RoiBreakdown {
    let volume = input.monthly_invoice_volume as f64;
    let implementation_cost = input.one_time_implementation_cost;

    let labor_cost_manual =
        input.num_ap_staff as f64 * input.hourly_wage * input.avg_hours_per_invoice * volume;
    let auto_cost = volume * AUTOMATED_COST_PER_INVOICE;
    let error_rate_manual_decimal = input.error_rate_manual / 100.0;
    // Negative when the manual rate is below the automated one; left unclamped.
    let error_savings =
        (error_rate_manual_decimal - AUTOMATED_ERROR_RATE) * volume * input.error_cost;
    let monthly_savings = ((labor_cost_manual + error_savings) - auto_cost) * SAVINGS_BIAS_FACTOR;
    let cumulative_savings = monthly_savings * input.time_horizon_months as f64;
    let net_savings = cumulative_savings - implementation_cost;

    let payback_months = if monthly_savings > 0.0 {
        implementation_cost / monthly_savings
    } else {
        f64::INFINITY
    };
    let roi_percentage = if implementation_cost > 0.0 {
        (net_savings / implementation_cost) * 100.0
    } else {
        f64::INFINITY
    };

    RoiBreakdown {
        labor_cost_manual,
        auto_cost,
        error_rate_manual_decimal,
        error_savings,
        monthly_savings,
        cumulative_savings,
        net_savings,
        payback_months,
        roi_percentage,
    }
}

/// Projects the savings of automated invoice processing for `input`.
pub fn compute(input: &SimulationInput) -> SimulationResult {
    compute_at(input, Utc::now())
}

pub fn compute_at(input: &SimulationInput, timestamp: DateTime<Utc>) -> SimulationResult {
    let breakdown = calculate_breakdown(input);
    debug!(
        "computed roi for {:?}: monthly_savings={} payback_months={} roi_percentage={}",
        input.scenario_name,
        breakdown.monthly_savings,
        breakdown.payback_months,
        breakdown.roi_percentage
    );

    SimulationResult {
        scenario_name: input.resolved_scenario_name(),
        monthly_invoice_volume: input.monthly_invoice_volume,
        num_ap_staff: input.num_ap_staff,
        avg_hours_per_invoice: input.avg_hours_per_invoice,
        hourly_wage: input.hourly_wage,
        error_rate_manual: input.error_rate_manual,
        error_cost: input.error_cost,
        time_horizon_months: input.time_horizon_months,
        one_time_implementation_cost: input.one_time_implementation_cost,
        labor_cost_manual: round_to_cents(breakdown.labor_cost_manual),
        auto_cost: round_to_cents(breakdown.auto_cost),
        error_savings: round_to_cents(breakdown.error_savings),
        monthly_savings: round_to_cents(breakdown.monthly_savings),
        cumulative_savings: round_to_cents(breakdown.cumulative_savings),
        net_savings: round_to_cents(breakdown.net_savings),
        payback_months: round_to_cents(breakdown.payback_months),
        roi_percentage: round_to_cents(breakdown.roi_percentage),
        timestamp,
    }
}

/// Every f64 at or above this magnitude is already a whole number.
const INTEGRAL_MAGNITUDE: f64 = 9_007_199_254_740_992.0; // 2^53

/// Rounds to two decimal places, ties to even. Non-finite values pass
/// through unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    // scaling these by 100 could overflow to infinity
    if !value.is_finite() || value.abs() >= INTEGRAL_MAGNITUDE {
        return value;
    }
    (value * 100.0).round_ties_even() / 100.0
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_SCENARIO_NAME: &str = "Untitled Scenario";
pub const DEFAULT_TIME_HORIZON_MONTHS: i64 = 36;

/// Business parameters describing the current manual invoicing process.
///
/// Counts are signed so that every type-valid value reaches the calculator;
/// plausibility (e.g. negative staff) is not checked anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationInput {
    #[serde(default)]
    pub scenario_name: Option<String>,
    pub monthly_invoice_volume: i64,
    pub num_ap_staff: i64,
    pub avg_hours_per_invoice: f64,
    pub hourly_wage: f64,
    /// Percentage, so `0.5` means 0.5%.
    pub error_rate_manual: f64,
    pub error_cost: f64,
    #[serde(default = "default_time_horizon_months")]
    pub time_horizon_months: i64,
    #[serde(default)]
    pub one_time_implementation_cost: f64,
}

fn default_time_horizon_months() -> i64 {
    DEFAULT_TIME_HORIZON_MONTHS
}

impl SimulationInput {
    /// Scenario name with the default applied for missing or empty names.
    pub fn resolved_scenario_name(&self) -> String {
        match self.scenario_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_SCENARIO_NAME.to_string(),
        }
    }
}

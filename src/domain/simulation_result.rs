use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input parameters echoed verbatim plus the derived metrics, each rounded to
/// two decimal places. `payback_months` and `roi_percentage` may be
/// `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub scenario_name: String,
    pub monthly_invoice_volume: i64,
    pub num_ap_staff: i64,
    pub avg_hours_per_invoice: f64,
    pub hourly_wage: f64,
    pub error_rate_manual: f64,
    pub error_cost: f64,
    pub time_horizon_months: i64,
    pub one_time_implementation_cost: f64,

    pub labor_cost_manual: f64,
    pub auto_cost: f64,
    pub error_savings: f64,
    pub monthly_savings: f64,
    pub cumulative_savings: f64,
    pub net_savings: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
    pub timestamp: DateTime<Utc>,
}

impl SimulationResult {
    /// Derived fields as `(name, value)` pairs in calculation order.
    pub fn derived_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("labor_cost_manual", self.labor_cost_manual),
            ("auto_cost", self.auto_cost),
            ("error_savings", self.error_savings),
            ("monthly_savings", self.monthly_savings),
            ("cumulative_savings", self.cumulative_savings),
            ("net_savings", self.net_savings),
            ("payback_months", self.payback_months),
            ("roi_percentage", self.roi_percentage),
        ]
    }

    pub fn has_infinite_payback(&self) -> bool {
        self.payback_months.is_infinite()
    }

    pub fn has_infinite_roi(&self) -> bool {
        self.roi_percentage.is_infinite()
    }
}

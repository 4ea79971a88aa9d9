use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::simulation_input::SimulationInput;
use crate::domain::simulation_result::SimulationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(Uuid);

impl ScenarioId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScenarioId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A named snapshot of one input together with the result it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub scenario_name: String,
    pub simulation_input: SimulationInput,
    pub simulation_result: SimulationResult,
    pub created_at: DateTime<Utc>,
}

impl Scenario {
    pub fn new(simulation_input: SimulationInput, simulation_result: SimulationResult) -> Self {
        Self {
            id: ScenarioId::new(),
            scenario_name: simulation_result.scenario_name.clone(),
            simulation_input,
            simulation_result,
            created_at: Utc::now(),
        }
    }
}

use std::io::{self, Write};

use thiserror::Error;

use crate::domain::simulation_input::SimulationInput;
use crate::domain::simulation_result::SimulationResult;

#[derive(Error, Debug)]
pub enum SimulationYamlError {
    #[error("failed to read simulation yaml: {0}")]
    Read(#[from] io::Error),
    #[error("invalid simulation yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn load_input_from_yaml_file(path: &str) -> Result<SimulationInput, SimulationYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_input_from_yaml_str(&contents)
}

/// Parses a simulation input record. Missing required fields, unknown fields
/// and non-numeric values for numeric fields are rejected rather than coerced.
pub fn deserialize_input_from_yaml_str(input: &str) -> Result<SimulationInput, SimulationYamlError> {
    Ok(serde_yaml::from_str(input)?)
}

pub fn load_result_from_yaml_file(path: &str) -> Result<SimulationResult, SimulationYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

pub fn serialize_result_to_yaml<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    let yaml = serde_yaml::to_string(result).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

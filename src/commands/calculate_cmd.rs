use std::process::ExitCode;

use invoice_roi::services::roi_calculator::compute;
use invoice_roi::services::simulation_yaml::{load_input_from_yaml_file, serialize_result_to_yaml};
use log::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_result_summary;

pub fn calculate_command(cmd: Commands) -> ExitCode {
    let Commands::Calculate { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let simulation_input = match load_input_from_yaml_file(&input) {
        Ok(simulation_input) => simulation_input,
        Err(e) => {
            eprintln!("Failed to load simulation input: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = compute(&simulation_input);
    println!("{}", format_result_summary(&result));

    if let Some(output) = output {
        let mut buffer = Vec::new();
        if let Err(e) = serialize_result_to_yaml(&mut buffer, &result) {
            eprintln!("Failed to serialize simulation result: {e:?}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write simulation result: {e:?}");
            return ExitCode::FAILURE;
        }
        info!("simulation result for {} written to {output}", result.scenario_name);
        println!("Simulation result written to {output}");
    }
    ExitCode::SUCCESS
}

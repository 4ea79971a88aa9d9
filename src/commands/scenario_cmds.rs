use std::process::ExitCode;

use invoice_roi::domain::scenario::{Scenario, ScenarioId};
use invoice_roi::services::app_config::AppConfig;
use invoice_roi::services::roi_calculator::compute;
use invoice_roi::services::scenario_store::{ScenarioStore, YamlScenarioStore};
use invoice_roi::services::simulation_yaml::load_input_from_yaml_file;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_scenario_line;

pub fn scenario_command(cmd: Commands, config: &AppConfig) -> ExitCode {
    let store = YamlScenarioStore::new(&config.data_dir);
    match cmd {
        Commands::Save { input } => save_scenario(&store, &input),
        Commands::List => list_scenarios(&store),
        Commands::Show { id } => show_scenario(&store, &id),
        Commands::Delete { id } => delete_scenario(&store, &id),
        _ => ExitCode::FAILURE,
    }
}

pub(crate) fn parse_scenario_id(id: &str) -> Option<ScenarioId> {
    match id.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            eprintln!("Invalid scenario id {id:?}: {e}");
            None
        }
    }
}

fn save_scenario(store: &impl ScenarioStore, input: &str) -> ExitCode {
    let simulation_input = match load_input_from_yaml_file(input) {
        Ok(simulation_input) => simulation_input,
        Err(e) => {
            eprintln!("Failed to load simulation input: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = compute(&simulation_input);
    let scenario = Scenario::new(simulation_input, result);

    match store.save(&scenario) {
        Ok(()) => {
            println!("Scenario {} saved as {}", scenario.scenario_name, scenario.id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to save scenario: {e}");
            ExitCode::FAILURE
        }
    }
}

fn list_scenarios(store: &impl ScenarioStore) -> ExitCode {
    match store.list() {
        Ok(scenarios) if scenarios.is_empty() => {
            println!("No saved scenarios");
            ExitCode::SUCCESS
        }
        Ok(scenarios) => {
            for scenario in &scenarios {
                println!("{}", format_scenario_line(scenario));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to list scenarios: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_scenario(store: &impl ScenarioStore, id: &str) -> ExitCode {
    let Some(id) = parse_scenario_id(id) else {
        return ExitCode::FAILURE;
    };
    let scenario = match store.get(&id) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load scenario: {e}");
            return ExitCode::FAILURE;
        }
    };
    match serde_yaml::to_string(&scenario) {
        Ok(yaml) => {
            print!("{yaml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize scenario: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn delete_scenario(store: &impl ScenarioStore, id: &str) -> ExitCode {
    let Some(id) = parse_scenario_id(id) else {
        return ExitCode::FAILURE;
    };
    match store.delete(&id) {
        Ok(()) => {
            println!("Scenario {id} deleted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to delete scenario: {e}");
            ExitCode::FAILURE
        }
    }
}

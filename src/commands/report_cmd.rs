use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use invoice_roi::domain::simulation_result::SimulationResult;
use invoice_roi::services::app_config::AppConfig;
use invoice_roi::services::report_composer::compose;
use invoice_roi::services::scenario_store::{ReportRequest, ScenarioStore, YamlScenarioStore};
use invoice_roi::services::simulation_yaml::load_result_from_yaml_file;
use log::info;

use crate::commands::base_commands::Commands;
use crate::commands::scenario_cmds::parse_scenario_id;

pub fn report_command(cmd: Commands, config: &AppConfig) -> ExitCode {
    let Commands::Report {
        email,
        scenario_id,
        result,
        output,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let store = YamlScenarioStore::new(&config.data_dir);
    let Some(simulation_result) = load_simulation_result(&store, scenario_id, result) else {
        return ExitCode::FAILURE;
    };

    let report = match compose(&simulation_result, &email) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to compose report: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => {
            if let Err(e) = std::fs::create_dir_all(&config.report_dir) {
                eprintln!("Failed to create report directory: {e:?}");
                return ExitCode::FAILURE;
            }
            config.report_dir.join(&report.filename)
        }
    };

    if let Err(e) = std::fs::write(&output_path, &report.document) {
        eprintln!("Failed to write report: {e:?}");
        return ExitCode::FAILURE;
    }

    let request = ReportRequest {
        email: email.clone(),
        scenario_name: simulation_result.scenario_name.clone(),
        timestamp: Utc::now(),
    };
    if let Err(e) = store.record_report_request(&request) {
        eprintln!("Failed to record report request: {e}");
        return ExitCode::FAILURE;
    }
    info!(
        "report for {} ({} bytes) sent to {email}",
        simulation_result.scenario_name,
        report.document.len()
    );
    println!("Report written to {}", output_path.display());
    ExitCode::SUCCESS
}

fn load_simulation_result(
    store: &YamlScenarioStore,
    scenario_id: Option<String>,
    result_path: Option<String>,
) -> Option<SimulationResult> {
    if let Some(id) = scenario_id {
        let id = parse_scenario_id(&id)?;
        return match store.get(&id) {
            Ok(scenario) => Some(scenario.simulation_result),
            Err(e) => {
                eprintln!("Failed to load scenario: {e}");
                None
            }
        };
    }
    if let Some(path) = result_path {
        return match load_result_from_yaml_file(&path) {
            Ok(result) => Some(result),
            Err(e) => {
                eprintln!("Failed to load simulation result: {e}");
                None
            }
        };
    }
    eprintln!("Either --scenario-id or --result must be provided");
    None
}

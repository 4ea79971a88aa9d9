use std::process::ExitCode;

use invoice_roi::services::savings_plot::plot_savings_from_yaml_file;

use crate::commands::base_commands::Commands;

pub fn plot_savings_command(cmd: Commands) -> ExitCode {
    let Commands::PlotSavings { input, output } = cmd else {
        return ExitCode::FAILURE;
    };
    match plot_savings_from_yaml_file(&input, &output) {
        Ok(()) => {
            println!("Savings plot written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot savings: {e:?}");
            ExitCode::FAILURE
        }
    }
}

mod commands;

use std::io;
use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::calculate_cmd::calculate_command;
use crate::commands::plot_savings_cmd::plot_savings_command;
use crate::commands::report_cmd::report_command;
use crate::commands::scenario_cmds::scenario_command;
use clap::{CommandFactory, Parser};
use invoice_roi::services::app_config::AppConfig;

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("using data dir {}", config.data_dir.display());

    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd),
        cmd @ (Commands::Save { .. }
        | Commands::List
        | Commands::Show { .. }
        | Commands::Delete { .. }) => scenario_command(cmd, &config),
        cmd @ Commands::Report { .. } => report_command(cmd, &config),
        cmd @ Commands::PlotSavings { .. } => plot_savings_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "invoice-roi", &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}

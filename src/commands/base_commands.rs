use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Optional YAML config with data_dir and report_dir
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the ROI of automating invoice processing
    Calculate {
        /// Simulation input YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file for the result
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Calculate and save a scenario
    Save {
        /// Simulation input YAML file
        #[arg(short, long)]
        input: String,
    },
    /// List saved scenarios, newest first
    List,
    /// Print a saved scenario as YAML
    Show {
        /// Scenario id
        id: String,
    },
    /// Delete a saved scenario
    Delete {
        /// Scenario id
        id: String,
    },
    /// Generate a PDF report for a saved scenario or a result file
    Report {
        /// Email address of the report recipient
        #[arg(short, long)]
        email: String,
        /// Id of a saved scenario
        #[arg(long, conflicts_with = "result", required_unless_present = "result")]
        scenario_id: Option<String>,
        /// Simulation result YAML file
        #[arg(short, long)]
        result: Option<String>,
        /// Output PDF file (defaults to the suggested name in the report directory)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Plot the cumulative net savings over the time horizon into a PNG chart
    PlotSavings {
        /// Simulation input YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_requires_scenario_id_or_result() {
        let parsed = CliArgs::try_parse_from(["invoice-roi", "report", "-e", "a@b.co"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_rejects_scenario_id_together_with_result() {
        let parsed = CliArgs::try_parse_from([
            "invoice-roi",
            "report",
            "-e",
            "a@b.co",
            "--scenario-id",
            "abc",
            "-r",
            "result.yaml",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_is_accepted_after_the_subcommand() {
        let args = CliArgs::parse_from(["invoice-roi", "list", "--config", "roi.yaml"]);
        assert_eq!(args.config.as_deref(), Some("roi.yaml"));
        assert!(matches!(args.command, Commands::List));
    }

    #[test]
    fn calculate_output_is_optional() {
        let args = CliArgs::parse_from(["invoice-roi", "calculate", "-i", "input.yaml"]);
        if let Commands::Calculate { input, output } = args.command {
            assert_eq!(input, "input.yaml");
            assert_eq!(output, None);
        } else {
            panic!("expected calculate command");
        }
    }
}

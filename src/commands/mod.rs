pub mod base_commands;
pub mod calculate_cmd;
pub mod plot_savings_cmd;
pub mod report_cmd;
pub mod report_format;
pub mod scenario_cmds;

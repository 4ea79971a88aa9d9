pub mod app_config;
pub mod number_format;
pub mod report_composer;
pub mod report_manifest;
pub mod report_pdf;
pub mod roi_calculator;
pub mod savings_plot;
pub mod scenario_store;
pub mod simulation_yaml;

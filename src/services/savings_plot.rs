use log::info;
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::simulation_result::SimulationResult;
use crate::services::number_format::format_currency;
use crate::services::roi_calculator::compute;
use crate::services::simulation_yaml::{load_input_from_yaml_file, SimulationYamlError};

#[derive(Error, Debug)]
pub enum SavingsPlotError {
    #[error("failed to load simulation input: {0}")]
    Input(#[from] SimulationYamlError),
    #[error("failed to render savings plot: {0}")]
    Plot(String),
}

pub fn plot_savings_from_yaml_file(input_path: &str, output_path: &str) -> Result<(), SavingsPlotError> {
    let input = load_input_from_yaml_file(input_path)?;
    let result = compute(&input);
    render_savings_png(output_path, &result)?;
    info!("savings plot for {} written to {output_path}", result.scenario_name);
    Ok(())
}

/// Net position after each month of the horizon: cumulative savings minus the
/// one-time implementation cost. Month 0 is the day of the investment.
pub fn savings_projection(result: &SimulationResult) -> Vec<(i64, f64)> {
    let months = result.time_horizon_months.max(0);
    (0..=months)
        .map(|month| {
            let position =
                result.monthly_savings * month as f64 - result.one_time_implementation_cost;
            (month, position)
        })
        .collect()
}

fn render_savings_png(output_path: &str, result: &SimulationResult) -> Result<(), SavingsPlotError> {
    let projection = savings_projection(result);
    let max_x = result.time_horizon_months.max(1);

    let mut min_y = projection
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::min);
    let mut max_y = projection
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);
    if (max_y - min_y).abs() < f64::EPSILON {
        min_y -= 1.0;
        max_y += 1.0;
    }
    let padding = (max_y - min_y) * 0.05;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| SavingsPlotError::Plot(e.to_string()))?;

    let caption = format!("Net Savings: {}", result.scenario_name);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(110)
        .build_cartesian_2d(0..max_x, (min_y - padding)..(max_y + padding))
        .map_err(|e| SavingsPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Months")
        .y_desc("Net position")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_label_formatter(&|value| format_currency(*value))
        .draw()
        .map_err(|e| SavingsPlotError::Plot(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(vec![(0, 0.0), (max_x, 0.0)], &BLACK))
        .map_err(|e| SavingsPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(30, 64, 175);
    chart
        .draw_series(LineSeries::new(projection, line_color.stroke_width(3)))
        .map_err(|e| SavingsPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| SavingsPlotError::Plot(e.to_string()))?;
    Ok(())
}

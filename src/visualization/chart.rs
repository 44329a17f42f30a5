use plotters::prelude::*;
use std::path::Path;

use crate::error::{Result, TelemetryError};
use crate::sensor::{Region, SensorKey, Thresholds};
use crate::store::{to_chart_points, History};

fn chart_err<E: std::fmt::Display>(e: E) -> TelemetryError {
    TelemetryError::Chart(e.to_string())
}

/// Draws one sensor's trend for a region, with warn and danger lines.
pub fn render_history_chart(
    region: Region,
    history: &History,
    sensor: SensorKey,
    path: &Path,
) -> Result<()> {
    let points = to_chart_points(history);
    if points.is_empty() {
        return Err(TelemetryError::EmptyHistory);
    }

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (min, max) = sensor.range();
    let last_x = (points.len() - 1).max(1) as f64;
    let caption = format!("{} - {} ({})", region.label(), sensor.label(), sensor.unit());

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..last_x, min..max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc(sensor.unit())
        .x_label_formatter(&|x| {
            points
                .get(x.round() as usize)
                .map(|p| p.time_label.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(chart_err)?;

    let readings = history.to_vec();
    chart
        .draw_series(LineSeries::new(
            readings
                .iter()
                .enumerate()
                .map(|(i, r)| (i as f64, r.value(sensor))),
            &BLUE,
        ))
        .map_err(chart_err)?;

    let thresholds = Thresholds::for_sensor(sensor);
    for (level, color) in [(thresholds.warn, &YELLOW), (thresholds.danger, &RED)] {
        chart
            .draw_series(LineSeries::new(vec![(0.0, level), (last_x, level)], color))
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

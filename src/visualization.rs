//! Visualization module - Trend charts and text status board

pub mod chart;
pub mod dashboard;

pub use chart::render_history_chart;
pub use dashboard::{detail_panel, render_store_charts, sensor_cards, status_board};

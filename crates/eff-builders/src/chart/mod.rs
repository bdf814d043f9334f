//! Chart descriptions, flat chart data and settings upgrades.

mod bar;
mod component;
pub mod description;
mod line;
mod panel;
pub mod upgrade;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;

pub use bar::bar_data;
pub use component::component_data;
pub use description::{Axis, ChartDescription, NumberFormat, PanelChart, Series, SeriesChart, Title};
pub use line::line_data;
pub use panel::panel_data;
pub use upgrade::{
    ChartOptionsV1, ChartSettingsV1, ChartSettingsV2, ChartType, NO_COLUMN, upgrade_v1_to_v2,
};

/// Flat tabular data built from a chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(rename = "x-axis")]
    pub x_axis: String,
    #[serde(rename = "y-axis")]
    pub y_axis: String,
    pub data: Vec<Vec<Cell>>,
}

/// Builds flat data for any supported chart type.
pub struct ChartObjectDataBuilder;

impl ChartObjectDataBuilder {
    /// Flat data for the chart, or `None` when its type is not supported.
    pub fn build(chart: &ChartDescription) -> Option<ChartData> {
        let data = match chart {
            ChartDescription::Bar(series) | ChartDescription::SmallBar(series) => bar_data(series),
            ChartDescription::Line(series) => line_data(series),
            ChartDescription::Component(series) => component_data(series),
            ChartDescription::PanelBarChart(panels) => panel_data(panels, bar_data),
            ChartDescription::PanelLineChart(panels) => panel_data(panels, line_data),
            ChartDescription::Unknown => {
                debug!("unsupported chart type, no data built");
                return None;
            }
        };
        Some(ChartData {
            kind: chart.type_name().to_string(),
            title: chart.title().to_string(),
            x_axis: chart.x_axis().map(Axis::label).unwrap_or_default().to_string(),
            y_axis: chart.y_axis().map(Axis::label).unwrap_or_default().to_string(),
            data,
        })
    }
}

//! Line charts.

use crate::cell::Cell;
use crate::chart::description::SeriesChart;

/// Flat rows for a line chart: `["Ethnicity", x label, y label]` then
/// `[series, category, value]` rows, series by series.
pub fn line_data(chart: &SeriesChart) -> Vec<Vec<Cell>> {
    if chart.series.is_empty() {
        return Vec::new();
    }
    let mut data = vec![vec![
        Cell::from("Ethnicity"),
        Cell::from(chart.x_axis.label()),
        Cell::from(chart.y_axis.label()),
    ]];
    for series in &chart.series {
        for (idx, category) in chart.categories().iter().enumerate() {
            data.push(vec![
                Cell::from(&series.name),
                Cell::from(category),
                series.value_at(idx),
            ]);
        }
    }
    data
}

//! Component (stacked bar) charts.

use crate::cell::Cell;
use crate::chart::bar::first_non_empty;
use crate::chart::description::SeriesChart;

/// Flat rows for a component chart: `["", "", label]` then
/// `[category, series, value]` rows, series by series.
pub fn component_data(chart: &SeriesChart) -> Vec<Vec<Cell>> {
    if chart.series.is_empty() {
        return Vec::new();
    }
    let label = first_non_empty(chart.y_axis.label(), chart.number_format.suffix());
    let mut data = vec![vec![Cell::empty(), Cell::empty(), Cell::from(label)]];
    for series in &chart.series {
        for (idx, category) in chart.categories().iter().enumerate() {
            data.push(vec![
                Cell::from(category),
                Cell::from(&series.name),
                series.value_at(idx),
            ]);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::description::{Axis, NumberFormat, Series, Title};

    fn qualifications() -> SeriesChart {
        SeriesChart {
            x_axis: Axis {
                categories: vec!["Asian".into(), "White".into()],
                ..Axis::default()
            },
            series: vec![
                Series::new("Degree", [Cell::from(40), Cell::from(30)]),
                Series::new("None", [Cell::from(10), Cell::from(20)]),
            ],
            number_format: NumberFormat {
                suffix: Some("%".into()),
                ..NumberFormat::default()
            },
            ..SeriesChart::default()
        }
    }

    #[test]
    fn rows_lead_with_category_then_series() {
        assert_eq!(
            component_data(&qualifications()),
            vec![
                vec![Cell::empty(), Cell::empty(), Cell::from("%")],
                vec![Cell::from("Asian"), Cell::from("Degree"), Cell::from(40)],
                vec![Cell::from("White"), Cell::from("Degree"), Cell::from(30)],
                vec![Cell::from("Asian"), Cell::from("None"), Cell::from(10)],
                vec![Cell::from("White"), Cell::from("None"), Cell::from(20)],
            ]
        );
    }

    #[test]
    fn y_axis_title_wins_over_suffix() {
        let mut chart = qualifications();
        chart.y_axis.title = Title::new("Share");
        assert_eq!(component_data(&chart)[0][2], Cell::from("Share"));
    }
}

//! Bar and small bar charts.

use crate::cell::Cell;
use crate::chart::description::SeriesChart;

/// Flat rows for a bar chart.
///
/// A single series gives `["Ethnicity", label]` then `[category, value]` rows.
/// Several series give `["", "", label]` then `[series, category, value]` rows,
/// series by series.
pub fn bar_data(chart: &SeriesChart) -> Vec<Vec<Cell>> {
    match chart.series.as_slice() {
        [] => Vec::new(),
        [series] => {
            let label = first_non_empty(chart.x_axis.label(), chart.number_format.suffix());
            let mut data = vec![vec![Cell::from("Ethnicity"), Cell::from(label)]];
            data.extend(
                chart
                    .categories()
                    .iter()
                    .enumerate()
                    .map(|(idx, category)| vec![Cell::from(category), series.value_at(idx)]),
            );
            data
        }
        many => {
            let label = first_non_empty(chart.y_axis.label(), chart.number_format.suffix());
            let mut data = vec![vec![Cell::empty(), Cell::empty(), Cell::from(label)]];
            for series in many {
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
    }
}

pub(crate) fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() { fallback } else { preferred }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::description::{Axis, NumberFormat, Series, Title};

    #[test]
    fn single_series_falls_back_to_suffix() {
        let chart = SeriesChart {
            x_axis: Axis {
                title: Title::default(),
                categories: vec!["White".into()],
            },
            series: vec![Series::new("Rate", [Cell::from(4)])],
            number_format: NumberFormat {
                suffix: Some("%".into()),
                ..NumberFormat::default()
            },
            ..SeriesChart::default()
        };
        assert_eq!(
            bar_data(&chart),
            vec![
                vec![Cell::from("Ethnicity"), Cell::from("%")],
                vec![Cell::from("White"), Cell::from(4)],
            ]
        );
    }

    #[test]
    fn multi_series_is_series_major() {
        let chart = SeriesChart {
            x_axis: Axis {
                title: Title::default(),
                categories: vec!["Asian".into(), "White".into()],
            },
            y_axis: Axis {
                title: Title::new("Percentage"),
                categories: Vec::new(),
            },
            series: vec![
                Series::new("2019", [Cell::from(1), Cell::from(2)]),
                Series::new("2020", [Cell::from(3)]),
            ],
            ..SeriesChart::default()
        };
        let data = bar_data(&chart);
        assert_eq!(data[0], vec![Cell::empty(), Cell::empty(), Cell::from("Percentage")]);
        assert_eq!(data[1], vec![Cell::from("2019"), Cell::from("Asian"), Cell::from(1)]);
        assert_eq!(data[3], vec![Cell::from("2020"), Cell::from("Asian"), Cell::from(3)]);
        assert_eq!(data[4], vec![Cell::from("2020"), Cell::from("White"), Cell::empty()]);
    }
}

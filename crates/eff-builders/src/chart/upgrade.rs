//! Upgrading version 1 chart settings to the version 2 shape.
//!
//! Version 1 settings record which source columns fed each part of the chart.
//! Version 2 settings carry the chart data itself, ethnicity first, plus the
//! part of the chart that shows ethnicity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;
use crate::chart::description::{Axis, ChartDescription, PanelChart, SeriesChart};
use crate::roles::{EthnicityRole, is_ethnicity_column};

pub const SETTINGS_VERSION: &str = "2.0";

/// Sentinel meaning "no secondary column" in version 1 bar chart settings.
pub const NO_COLUMN: &str = "[None]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    BarChart,
    /// Only produced by an upgrade; version 1 settings record grouped bars as `bar_chart`.
    GroupedBarChart,
    LineGraph,
    ComponentChart,
    PanelBarChart,
    PanelLineChart,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptionsV1 {
    pub primary_column: Option<String>,
    pub secondary_column: Option<String>,
    pub component_bar_column: Option<String>,
    pub component_component_column: Option<String>,
    pub panel_primary_column: Option<String>,
    pub panel_grouping_column: Option<String>,
    pub line_series_column: Option<String>,
    pub line_x_axis_column: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettingsV1 {
    #[serde(rename = "type")]
    pub kind: ChartType,
    #[serde(rename = "chartOptions", default)]
    pub chart_options: ChartOptionsV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettingsV2 {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: ChartType,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub ethnicity_as: Option<EthnicityRole>,
    pub data: Vec<Vec<Cell>>,
}

/// Version 2 settings for a chart saved with version 1 settings.
///
/// Returns `None` when either the settings type or the chart description is
/// not one this crate understands, or when the two disagree.
pub fn upgrade_v1_to_v2(
    chart: &ChartDescription,
    settings: &ChartSettingsV1,
) -> Option<ChartSettingsV2> {
    let options = &settings.chart_options;
    let (kind, ethnicity_as, data) = match (settings.kind, chart) {
        (
            ChartType::BarChart,
            ChartDescription::Bar(series) | ChartDescription::SmallBar(series),
        ) => bar(series, options),
        (ChartType::LineGraph, ChartDescription::Line(series)) => {
            let role = if is_ethnicity_column(column(&options.line_x_axis_column))
                && !is_ethnicity_column(column(&options.line_series_column))
            {
                EthnicityRole::XAxis
            } else {
                EthnicityRole::Line
            };
            let other = match role {
                EthnicityRole::XAxis => column(&options.line_series_column),
                _ => column(&options.line_x_axis_column),
            };
            let data = series_data(series, other, role == EthnicityRole::Line);
            (ChartType::LineGraph, Some(role), data)
        }
        (ChartType::ComponentChart, ChartDescription::Component(series)) => {
            let role = if is_ethnicity_column(column(&options.component_component_column))
                && !is_ethnicity_column(column(&options.component_bar_column))
            {
                EthnicityRole::Section
            } else {
                EthnicityRole::Bar
            };
            let other = match role {
                EthnicityRole::Section => column(&options.component_bar_column),
                _ => column(&options.component_component_column),
            };
            let data = series_data(series, other, role == EthnicityRole::Section);
            (ChartType::ComponentChart, Some(role), data)
        }
        (ChartType::PanelBarChart, ChartDescription::PanelBarChart(panels)) => {
            panel_bar(panels, options)
        }
        (ChartType::PanelLineChart, ChartDescription::PanelLineChart(panels)) => {
            panel_line(panels, options)
        }
        (kind, chart) => {
            debug!(
                settings = ?kind,
                chart = chart.type_name(),
                "chart settings cannot be upgraded"
            );
            return None;
        }
    };

    Some(ChartSettingsV2 {
        version: SETTINGS_VERSION.to_string(),
        kind,
        title: chart.title().to_string(),
        x_axis_label: chart.x_axis().map(Axis::label).unwrap_or_default().to_string(),
        y_axis_label: chart.y_axis().map(Axis::label).unwrap_or_default().to_string(),
        ethnicity_as,
        data,
    })
}

type Upgraded = (ChartType, Option<EthnicityRole>, Vec<Vec<Cell>>);

fn bar(chart: &SeriesChart, options: &ChartOptionsV1) -> Upgraded {
    let secondary = column(&options.secondary_column);
    if secondary.is_empty() || secondary == NO_COLUMN {
        let mut data = vec![vec![Cell::from("Ethnicity"), Cell::from("Value")]];
        if let Some(series) = chart.series.first() {
            data.extend(
                chart
                    .categories()
                    .iter()
                    .enumerate()
                    .map(|(idx, category)| vec![Cell::from(category), series.value_at(idx)]),
            );
        }
        return (ChartType::BarChart, None, data);
    }

    let primary = column(&options.primary_column);
    let role = if is_ethnicity_column(secondary) && !is_ethnicity_column(primary) {
        EthnicityRole::Group
    } else {
        EthnicityRole::Bar
    };
    let other = match role {
        EthnicityRole::Group => primary,
        _ => secondary,
    };
    let data = series_data(chart, other, role == EthnicityRole::Group);
    (ChartType::GroupedBarChart, Some(role), data)
}

/// Ethnicity-first rows from a series chart. When `series_is_ethnicity` the
/// series names are the ethnicities, otherwise the categories are.
fn series_data(chart: &SeriesChart, other: &str, series_is_ethnicity: bool) -> Vec<Vec<Cell>> {
    let mut data = vec![header(&[other])];
    if series_is_ethnicity {
        for series in &chart.series {
            for (idx, category) in chart.categories().iter().enumerate() {
                data.push(vec![
                    Cell::from(&series.name),
                    Cell::from(category),
                    series.value_at(idx),
                ]);
            }
        }
    } else {
        for (idx, category) in chart.categories().iter().enumerate() {
            for series in &chart.series {
                data.push(vec![
                    Cell::from(category),
                    Cell::from(&series.name),
                    series.value_at(idx),
                ]);
            }
        }
    }
    data
}

fn panel_bar(chart: &PanelChart, options: &ChartOptionsV1) -> Upgraded {
    let panel_column = column(&options.panel_primary_column);
    let grouping_column = column(&options.panel_grouping_column);
    let role = if is_ethnicity_column(panel_column) && !is_ethnicity_column(grouping_column) {
        EthnicityRole::Panel
    } else {
        EthnicityRole::Bar
    };

    let other = match role {
        EthnicityRole::Panel => grouping_column,
        _ => panel_column,
    };
    let mut data = vec![header(&[other])];
    for panel in &chart.panels {
        let title = Cell::from(panel.title.text());
        for series in &panel.series {
            for (idx, category) in panel.categories().iter().enumerate() {
                let row = match role {
                    EthnicityRole::Panel => vec![title.clone(), Cell::from(category)],
                    _ => vec![Cell::from(category), title.clone()],
                };
                data.push(with_value(row, series.value_at(idx)));
            }
        }
    }
    (ChartType::PanelBarChart, Some(role), data)
}

fn panel_line(chart: &PanelChart, options: &ChartOptionsV1) -> Upgraded {
    let panel_column = column(&options.panel_primary_column);
    let x_axis_column = column(&options.line_x_axis_column);

    if is_ethnicity_column(panel_column) {
        let mut data = vec![header(&[x_axis_column])];
        for panel in &chart.panels {
            let title = Cell::from(panel.title.text());
            for series in &panel.series {
                for (idx, category) in panel.categories().iter().enumerate() {
                    let row = vec![title.clone(), Cell::from(category)];
                    data.push(with_value(row, series.value_at(idx)));
                }
            }
        }
        return (ChartType::PanelLineChart, Some(EthnicityRole::Panel), data);
    }

    // Lines within each panel are the ethnicities.
    let mut data = vec![header(&[panel_column, x_axis_column])];
    for panel in &chart.panels {
        let title = Cell::from(panel.title.text());
        for series in &panel.series {
            for (idx, category) in panel.categories().iter().enumerate() {
                let row = vec![Cell::from(&series.name), title.clone(), Cell::from(category)];
                data.push(with_value(row, series.value_at(idx)));
            }
        }
    }
    (ChartType::PanelLineChart, Some(EthnicityRole::Line), data)
}

fn header(others: &[&str]) -> Vec<Cell> {
    let mut row = vec![Cell::from("Ethnicity")];
    row.extend(others.iter().map(|name| Cell::from(*name)));
    row.push(Cell::from("Value"));
    row
}

fn with_value(mut row: Vec<Cell>, value: Cell) -> Vec<Cell> {
    row.push(value);
    row
}

fn column(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::description::{Series, Title};

    fn grouped_bar() -> ChartDescription {
        ChartDescription::Bar(SeriesChart {
            title: Title::new("Employment"),
            x_axis: Axis {
                title: Title::new("Ethnicity"),
                categories: vec!["Asian".into(), "White".into()],
            },
            y_axis: Axis {
                title: Title::new("%"),
                categories: Vec::new(),
            },
            series: vec![
                Series::new("Men", [Cell::from(60), Cell::from(70)]),
                Series::new("Women", [Cell::from(50), Cell::from(65)]),
            ],
            ..SeriesChart::default()
        })
    }

    fn settings(kind: ChartType, options: ChartOptionsV1) -> ChartSettingsV1 {
        ChartSettingsV1 {
            kind,
            chart_options: options,
        }
    }

    #[test]
    fn grouped_bar_with_ethnicity_bars() {
        let upgraded = upgrade_v1_to_v2(
            &grouped_bar(),
            &settings(
                ChartType::BarChart,
                ChartOptionsV1 {
                    primary_column: Some("Ethnicity".into()),
                    secondary_column: Some("Gender".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.version, "2.0");
        assert_eq!(upgraded.kind, ChartType::GroupedBarChart);
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Bar));
        assert_eq!(upgraded.x_axis_label, "Ethnicity");
        assert_eq!(
            upgraded.data[..3],
            [
                vec![Cell::from("Ethnicity"), Cell::from("Gender"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("Men"), Cell::from(60)],
                vec![Cell::from("Asian"), Cell::from("Women"), Cell::from(50)],
            ]
        );
    }

    #[test]
    fn grouped_bar_with_ethnicity_groups() {
        let upgraded = upgrade_v1_to_v2(
            &grouped_bar(),
            &settings(
                ChartType::BarChart,
                ChartOptionsV1 {
                    primary_column: Some("Gender".into()),
                    secondary_column: Some("Ethnicity".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Group));
        assert_eq!(upgraded.data[0][1], Cell::from("Gender"));
        assert_eq!(
            upgraded.data[1],
            vec![Cell::from("Men"), Cell::from("Asian"), Cell::from(60)]
        );
    }

    #[test]
    fn none_secondary_column_is_single_series() {
        let upgraded = upgrade_v1_to_v2(
            &grouped_bar(),
            &settings(
                ChartType::BarChart,
                ChartOptionsV1 {
                    primary_column: Some("Ethnicity".into()),
                    secondary_column: Some(NO_COLUMN.into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.kind, ChartType::BarChart);
        assert_eq!(upgraded.ethnicity_as, None);
        assert_eq!(
            upgraded.data,
            vec![
                vec![Cell::from("Ethnicity"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from(60)],
                vec![Cell::from("White"), Cell::from(70)],
            ]
        );
    }

    #[test]
    fn mismatched_settings_are_not_upgraded() {
        let none = upgrade_v1_to_v2(
            &grouped_bar(),
            &settings(ChartType::LineGraph, ChartOptionsV1::default()),
        );
        assert!(none.is_none());

        let unknown: ChartSettingsV1 =
            serde_json::from_str(r#"{"type": "pie_chart", "chartOptions": {}}"#).unwrap();
        assert_eq!(unknown.kind, ChartType::Unknown);
        assert!(upgrade_v1_to_v2(&grouped_bar(), &unknown).is_none());
    }

    #[test]
    fn panel_line_with_ethnicity_panels() {
        let chart = ChartDescription::PanelLineChart(PanelChart {
            panels: vec![SeriesChart {
                title: Title::new("Asian"),
                x_axis: Axis {
                    title: Title::default(),
                    categories: vec!["2019".into(), "2020".into()],
                },
                series: vec![Series::new("Rate", [Cell::from(3), Cell::from(4)])],
                ..SeriesChart::default()
            }],
            ..PanelChart::default()
        });
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::PanelLineChart,
                ChartOptionsV1 {
                    panel_primary_column: Some("Ethnicity".into()),
                    line_x_axis_column: Some("Year".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Panel));
        assert_eq!(
            upgraded.data,
            vec![
                vec![Cell::from("Ethnicity"), Cell::from("Year"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("2019"), Cell::from(3)],
                vec![Cell::from("Asian"), Cell::from("2020"), Cell::from(4)],
            ]
        );
    }

    fn two_series(categories: [&str; 2], names: [&str; 2]) -> SeriesChart {
        SeriesChart {
            title: Title::new(names[0]),
            x_axis: Axis {
                title: Title::default(),
                categories: categories.iter().map(|c| (*c).to_string()).collect(),
            },
            series: vec![
                Series::new(names[0], [Cell::from(1), Cell::from(2)]),
                Series::new(names[1], [Cell::from(3), Cell::from(4)]),
            ],
            ..SeriesChart::default()
        }
    }

    fn panels(titles: [&str; 2]) -> PanelChart {
        PanelChart {
            panels: titles
                .iter()
                .map(|title| SeriesChart {
                    title: Title::new(*title),
                    ..two_series(["Asian", "White"], ["Rate", "Count"])
                })
                .collect(),
            ..PanelChart::default()
        }
    }

    fn first_rows(upgraded: &ChartSettingsV2) -> &[Vec<Cell>] {
        &upgraded.data[..2]
    }

    #[test]
    fn line_graph_with_ethnicity_lines() {
        let chart = ChartDescription::Line(two_series(["2019", "2020"], ["Asian", "White"]));
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::LineGraph,
                ChartOptionsV1 {
                    line_series_column: Some("Ethnicity".into()),
                    line_x_axis_column: Some("Year".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.kind, ChartType::LineGraph);
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Line));
        assert_eq!(
            first_rows(&upgraded),
            [
                vec![Cell::from("Ethnicity"), Cell::from("Year"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("2019"), Cell::from(1)],
            ]
        );
    }

    #[test]
    fn line_graph_with_ethnicity_on_x_axis() {
        let chart = ChartDescription::Line(two_series(["Asian", "White"], ["Men", "Women"]));
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::LineGraph,
                ChartOptionsV1 {
                    line_series_column: Some("Gender".into()),
                    line_x_axis_column: Some("Ethnic group".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::XAxis));
        assert_eq!(
            first_rows(&upgraded),
            [
                vec![Cell::from("Ethnicity"), Cell::from("Gender"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("Men"), Cell::from(1)],
            ]
        );
    }

    #[test]
    fn component_chart_with_ethnicity_sections() {
        let chart = ChartDescription::Component(two_series(["Degree", "None"], ["Asian", "White"]));
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::ComponentChart,
                ChartOptionsV1 {
                    component_bar_column: Some("Qualification".into()),
                    component_component_column: Some("Ethnicity".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.kind, ChartType::ComponentChart);
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Section));
        assert_eq!(
            first_rows(&upgraded),
            [
                vec![Cell::from("Ethnicity"), Cell::from("Qualification"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("Degree"), Cell::from(1)],
            ]
        );
    }

    #[test]
    fn panel_bar_with_ethnicity_panels() {
        let chart = ChartDescription::PanelBarChart(panels(["Asian", "White"]));
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::PanelBarChart,
                ChartOptionsV1 {
                    panel_primary_column: Some("Ethnicity".into()),
                    panel_grouping_column: Some("Region".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.kind, ChartType::PanelBarChart);
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Panel));
        assert_eq!(
            first_rows(&upgraded),
            [
                vec![Cell::from("Ethnicity"), Cell::from("Region"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("Asian"), Cell::from(1)],
            ]
        );
    }

    #[test]
    fn panel_bar_with_ethnicity_bars() {
        let chart = ChartDescription::PanelBarChart(panels(["North", "South"]));
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::PanelBarChart,
                ChartOptionsV1 {
                    panel_primary_column: Some("Region".into()),
                    panel_grouping_column: Some("Ethnicity".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Bar));
        assert_eq!(
            first_rows(&upgraded),
            [
                vec![Cell::from("Ethnicity"), Cell::from("Region"), Cell::from("Value")],
                vec![Cell::from("Asian"), Cell::from("North"), Cell::from(1)],
            ]
        );
    }

    #[test]
    fn panel_line_with_ethnicity_lines() {
        let chart = ChartDescription::PanelLineChart(PanelChart {
            panels: vec![SeriesChart {
                title: Title::new("North"),
                ..two_series(["2019", "2020"], ["Asian", "White"])
            }],
            ..PanelChart::default()
        });
        let upgraded = upgrade_v1_to_v2(
            &chart,
            &settings(
                ChartType::PanelLineChart,
                ChartOptionsV1 {
                    panel_primary_column: Some("Region".into()),
                    line_x_axis_column: Some("Year".into()),
                    ..ChartOptionsV1::default()
                },
            ),
        )
        .unwrap();
        assert_eq!(upgraded.ethnicity_as, Some(EthnicityRole::Line));
        assert_eq!(
            first_rows(&upgraded),
            [
                vec![
                    Cell::from("Ethnicity"),
                    Cell::from("Region"),
                    Cell::from("Year"),
                    Cell::from("Value"),
                ],
                vec![
                    Cell::from("Asian"),
                    Cell::from("North"),
                    Cell::from("2019"),
                    Cell::from(1),
                ],
            ]
        );
    }
}

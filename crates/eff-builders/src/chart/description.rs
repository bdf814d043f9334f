//! Typed chart descriptions as saved by the chart builder.
//!
//! A description is a Highcharts-style object tagged by `type`. Types this
//! crate cannot build deserialize to [`ChartDescription::Unknown`], and so does
//! a description whose `type` is missing or not a string.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, DataPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum ChartDescription {
    Bar(SeriesChart),
    SmallBar(SeriesChart),
    Line(SeriesChart),
    Component(SeriesChart),
    PanelBarChart(PanelChart),
    PanelLineChart(PanelChart),
    #[serde(other)]
    Unknown,
}

impl Serialize for ChartDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ChartDescription::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ChartDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.get("type").is_some_and(serde_json::Value::is_string) {
            return Ok(ChartDescription::Unknown);
        }
        ChartDescription::deserialize(value).map_err(de::Error::custom)
    }
}

impl ChartDescription {
    /// The `type` tag this description was saved with.
    pub fn type_name(&self) -> &'static str {
        match self {
            ChartDescription::Bar(_) => "bar",
            ChartDescription::SmallBar(_) => "small_bar",
            ChartDescription::Line(_) => "line",
            ChartDescription::Component(_) => "component",
            ChartDescription::PanelBarChart(_) => "panel_bar_chart",
            ChartDescription::PanelLineChart(_) => "panel_line_chart",
            ChartDescription::Unknown => "unknown",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartDescription::Bar(chart)
            | ChartDescription::SmallBar(chart)
            | ChartDescription::Line(chart)
            | ChartDescription::Component(chart) => chart.title.text(),
            ChartDescription::PanelBarChart(chart) | ChartDescription::PanelLineChart(chart) => {
                chart.title.text()
            }
            ChartDescription::Unknown => "",
        }
    }

    pub fn x_axis(&self) -> Option<&Axis> {
        match self {
            ChartDescription::Bar(chart)
            | ChartDescription::SmallBar(chart)
            | ChartDescription::Line(chart)
            | ChartDescription::Component(chart) => Some(&chart.x_axis),
            ChartDescription::PanelBarChart(chart) | ChartDescription::PanelLineChart(chart) => {
                Some(&chart.x_axis)
            }
            ChartDescription::Unknown => None,
        }
    }

    pub fn y_axis(&self) -> Option<&Axis> {
        match self {
            ChartDescription::Bar(chart)
            | ChartDescription::SmallBar(chart)
            | ChartDescription::Line(chart)
            | ChartDescription::Component(chart) => Some(&chart.y_axis),
            ChartDescription::PanelBarChart(chart) | ChartDescription::PanelLineChart(chart) => {
                Some(&chart.y_axis)
            }
            ChartDescription::Unknown => None,
        }
    }
}

/// A text holder such as `{"text": "Proportion"}`. Null text reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub text: Option<String>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    pub title: Title,
    pub categories: Vec<String>,
}

impl Axis {
    pub fn label(&self) -> &str {
        self.title.text()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl NumberFormat {
    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    pub name: String,
    pub data: Vec<DataPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            name: name.into(),
            data: data.into_iter().map(DataPoint::from).collect(),
        }
    }

    /// The value at a category index. Points past the end read as empty.
    pub fn value_at(&self, index: usize) -> Cell {
        self.data.get(index).map(DataPoint::value).unwrap_or_default()
    }
}

/// Bar, small bar, line and component charts: categories on the x axis and
/// one or more series of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesChart {
    pub title: Title,
    #[serde(rename = "xAxis")]
    pub x_axis: Axis,
    #[serde(rename = "yAxis")]
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub number_format: NumberFormat,
}

impl SeriesChart {
    pub fn categories(&self) -> &[String] {
        &self.x_axis.categories
    }
}

/// A chart split into titled panels, each a series chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelChart {
    pub title: Title,
    #[serde(rename = "xAxis")]
    pub x_axis: Axis,
    #[serde(rename = "yAxis")]
    pub y_axis: Axis,
    pub number_format: NumberFormat,
    pub panels: Vec<SeriesChart>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_is_captured() {
        let chart: ChartDescription =
            serde_json::from_str(r#"{"type": "pie", "series": []}"#).unwrap();
        assert_eq!(chart, ChartDescription::Unknown);
        assert_eq!(chart.title(), "");
    }

    #[test]
    fn missing_or_non_string_type_is_unknown() {
        for text in [
            r#"{"series": []}"#,
            r#"{"type": null, "series": []}"#,
            r#"{"type": 3}"#,
        ] {
            let chart: ChartDescription = serde_json::from_str(text).unwrap();
            assert_eq!(chart, ChartDescription::Unknown, "{text}");
        }
    }

    #[test]
    fn known_type_keeps_its_shape() {
        let chart: ChartDescription = serde_json::from_str(
            r#"{"type": "line", "xAxis": {"categories": ["2020"]}, "series": [{"name": "Asian", "data": [3]}]}"#,
        )
        .unwrap();
        let ChartDescription::Line(line) = &chart else {
            panic!("expected a line chart");
        };
        assert_eq!(line.series[0].value_at(0), Cell::from(3));
        assert_eq!(serde_json::to_value(&chart).unwrap()["type"], "line");
    }

    #[test]
    fn null_titles_read_as_empty() {
        let chart: ChartDescription = serde_json::from_str(
            r#"{"type": "bar", "title": {"text": null}, "xAxis": {"categories": ["White"]}}"#,
        )
        .unwrap();
        let ChartDescription::Bar(bar) = &chart else {
            panic!("expected a bar chart");
        };
        assert_eq!(chart.title(), "");
        assert_eq!(bar.categories(), ["White"]);
        assert_eq!(bar.x_axis.label(), "");
    }

    #[test]
    fn panel_charts_nest_series_charts() {
        let chart: ChartDescription = serde_json::from_str(
            r#"{
                "type": "panel_line_chart",
                "title": {"text": "Rates"},
                "panels": [{"title": {"text": "Asian"}, "series": [{"name": "Rate", "data": [1, 2]}]}]
            }"#,
        )
        .unwrap();
        let ChartDescription::PanelLineChart(panel) = chart else {
            panic!("expected a panel line chart");
        };
        assert_eq!(panel.panels[0].title.text(), "Asian");
        assert_eq!(panel.panels[0].series[0].value_at(1), Cell::from(2));
        assert_eq!(panel.panels[0].series[0].value_at(5), Cell::empty());
    }
}

//! Primitive cell values shared by chart and table data.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A flat data cell: a string or a number.
///
/// Numbers keep their JSON form, so `10` stays an integer and `10.5` a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(Number),
    Text(String),
}

impl Cell {
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Text(text) if text.is_empty())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(number) => write!(f, "{number}"),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::Text(value.clone())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(Number::from(value))
    }
}

impl From<f64> for Cell {
    /// Non-finite values have no JSON form and become empty text.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(Cell::empty, Cell::Number)
    }
}

/// A chart series data point: a bare value, an object carrying `y`, or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(Cell),
    Point {
        #[serde(default)]
        y: Option<Cell>,
    },
    Missing,
}

impl DataPoint {
    /// The scalar value of the point. Missing values are empty text.
    pub fn value(&self) -> Cell {
        match self {
            DataPoint::Value(cell) => cell.clone(),
            DataPoint::Point { y: Some(cell) } => cell.clone(),
            DataPoint::Point { y: None } | DataPoint::Missing => Cell::empty(),
        }
    }
}

impl From<Cell> for DataPoint {
    fn from(value: Cell) -> Self {
        DataPoint::Value(value)
    }
}

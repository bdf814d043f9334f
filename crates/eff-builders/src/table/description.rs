//! Typed table descriptions as saved by the table builder.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// A table tagged by `type`. Unsupported, missing or non-string types read as
/// [`TableDescription::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum TableDescription {
    Simple(SimpleTable),
    Grouped(GroupedTable),
    #[serde(other)]
    Unknown,
}

impl Serialize for TableDescription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TableDescription::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for TableDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.get("type").is_some_and(serde_json::Value::is_string) {
            return Ok(TableDescription::Unknown);
        }
        TableDescription::deserialize(value).map_err(de::Error::custom)
    }
}

impl TableDescription {
    pub fn type_name(&self) -> &'static str {
        match self {
            TableDescription::Simple(_) => "simple",
            TableDescription::Grouped(_) => "grouped",
            TableDescription::Unknown => "unknown",
        }
    }

    pub fn title(&self) -> &str {
        let header = match self {
            TableDescription::Simple(table) => table.header.as_deref(),
            TableDescription::Grouped(table) => table.header.as_deref(),
            TableDescription::Unknown => None,
        };
        header.unwrap_or_default()
    }
}

/// One category row of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    pub category: String,
    pub values: Vec<Cell>,
}

impl TableRow {
    pub fn new(category: impl Into<String>, values: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            category: category.into(),
            values: values.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleTable {
    pub header: Option<String>,
    pub subtitle: Option<String>,
    pub category_caption: String,
    pub columns: Vec<String>,
    pub data: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableGroup {
    pub group: String,
    pub data: Vec<TableRow>,
}

/// A table whose rows are split into groups, e.g. one group per gender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedTable {
    pub header: Option<String>,
    pub subtitle: Option<String>,
    pub category_caption: String,
    pub group_column: String,
    pub columns: Vec<String>,
    pub groups: Vec<TableGroup>,
}

impl GroupedTable {
    /// Categories in first-seen order across all groups.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for row in self.groups.iter().flat_map(|group| &group.data) {
            if !categories.contains(&row.category.as_str()) {
                categories.push(&row.category);
            }
        }
        categories
    }
}

impl TableGroup {
    /// The first row for a category in this group.
    pub fn row(&self, category: &str) -> Option<&TableRow> {
        self.data.iter().find(|row| row.category == category)
    }
}

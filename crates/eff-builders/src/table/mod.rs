//! Table descriptions, flat and cross-tab table data, and settings upgrades.

mod columns;
pub mod description;
pub mod upgrade;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;
use crate::error::{BuildError, Result};

pub use columns::{build_grouped_table, build_simple_table};
pub use description::{GroupedTable, SimpleTable, TableDescription, TableGroup, TableRow};
pub use upgrade::{TableOptionsV1, TableSettingsV1, TableSettingsV2, TableType, upgrade_v1_to_v2};

/// Tabular data built from a table description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub primary_category_column: String,
    pub secondary_category_column: Option<String>,
    pub value_columns: Vec<String>,
    pub data: Vec<Vec<Cell>>,
}

impl TableData {
    fn simple(table: &SimpleTable, data: Vec<Vec<Cell>>) -> Self {
        Self {
            kind: "simple".to_string(),
            title: table.header.clone().unwrap_or_default(),
            primary_category_column: table.category_caption.clone(),
            secondary_category_column: None,
            value_columns: table.columns.clone(),
            data,
        }
    }

    fn grouped(table: &GroupedTable, data: Vec<Vec<Cell>>) -> Self {
        Self {
            kind: "grouped".to_string(),
            title: table.header.clone().unwrap_or_default(),
            primary_category_column: table.category_caption.clone(),
            secondary_category_column: Some(table.group_column.clone()),
            value_columns: table.columns.clone(),
            data,
        }
    }
}

/// Builds flat, one-row-per-observation table data.
pub struct TableObjectDataBuilder;

impl TableObjectDataBuilder {
    /// Flat data for the table, or `None` when its type is not supported.
    ///
    /// Grouped tables are flattened group by group into
    /// `[category, group, values...]` rows.
    pub fn build(table: &TableDescription) -> Option<TableData> {
        match table {
            TableDescription::Simple(simple) => {
                Some(TableData::simple(simple, simple_data(simple)))
            }
            TableDescription::Grouped(grouped) => {
                let mut header = vec![
                    Cell::from(&grouped.category_caption),
                    Cell::from(&grouped.group_column),
                ];
                header.extend(grouped.columns.iter().map(Cell::from));

                let mut data = vec![header];
                for group in &grouped.groups {
                    for row in &group.data {
                        let mut cells = vec![Cell::from(&row.category), Cell::from(&group.group)];
                        cells.extend(row.values.iter().cloned());
                        data.push(cells);
                    }
                }
                Some(TableData::grouped(grouped, data))
            }
            TableDescription::Unknown => {
                debug!("unsupported table type, no data built");
                None
            }
        }
    }
}

/// Builds table data laid out as it is displayed: grouped tables become a
/// cross-tab with one row per category and one column block per group.
pub struct TableObjectTableBuilder;

impl TableObjectTableBuilder {
    /// Display data for the table, or `None` when its type is not supported.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingCrosstabCell`] when a grouped table has no
    /// row for some category within some group.
    pub fn build(table: &TableDescription) -> Result<Option<TableData>> {
        match table {
            TableDescription::Simple(simple) => {
                Ok(Some(TableData::simple(simple, simple_data(simple))))
            }
            TableDescription::Grouped(grouped) => {
                Ok(Some(TableData::grouped(grouped, crosstab(grouped)?)))
            }
            TableDescription::Unknown => {
                debug!("unsupported table type, no table built");
                Ok(None)
            }
        }
    }
}

fn simple_data(table: &SimpleTable) -> Vec<Vec<Cell>> {
    let mut header = vec![Cell::from(&table.category_caption)];
    header.extend(table.columns.iter().map(Cell::from));

    let mut data = vec![header];
    data.extend(table.data.iter().map(|row| {
        let mut cells = vec![Cell::from(&row.category)];
        cells.extend(row.values.iter().cloned());
        cells
    }));
    data
}

fn crosstab(table: &GroupedTable) -> Result<Vec<Vec<Cell>>> {
    let mut groups_row = vec![Cell::empty()];
    let mut columns_row = vec![Cell::from(&table.category_caption)];
    // A group spans its value columns, so without value columns it has no cell.
    if !table.columns.is_empty() {
        for group in &table.groups {
            groups_row.push(Cell::from(&group.group));
            groups_row.extend((1..table.columns.len()).map(|_| Cell::empty()));
            columns_row.extend(table.columns.iter().map(Cell::from));
        }
    }

    let mut data = vec![groups_row, columns_row];
    for category in table.categories() {
        let mut cells = vec![Cell::from(category)];
        for group in &table.groups {
            let row = group
                .row(category)
                .ok_or_else(|| BuildError::MissingCrosstabCell {
                    category: category.to_string(),
                    group: group.group.clone(),
                })?;
            cells.extend(row.values.iter().cloned());
        }
        data.push(cells);
    }
    Ok(data)
}

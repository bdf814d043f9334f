//! Upgrading version 1 table settings to the version 2 shape.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;
use crate::chart::upgrade::SETTINGS_VERSION;
use crate::roles::{EthnicityRole, is_ethnicity_column};
use crate::table::description::{GroupedTable, SimpleTable, TableDescription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    Simple,
    Grouped,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptionsV1 {
    pub row_column: Option<String>,
    pub grouping_column: Option<String>,
    pub data_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettingsV1 {
    #[serde(rename = "type")]
    pub kind: TableType,
    #[serde(rename = "tableOptions", default)]
    pub table_options: TableOptionsV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettingsV2 {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: TableType,
    pub title: String,
    pub ethnicity_as: EthnicityRole,
    pub data: Vec<Vec<Cell>>,
}

/// Version 2 settings for a table saved with version 1 settings.
///
/// Data rows lead with the ethnicity. In a grouped table ethnicity is either
/// the row category or the group, whichever column the settings name as an
/// ethnicity column; rows win when neither or both do.
pub fn upgrade_v1_to_v2(
    table: &TableDescription,
    settings: &TableSettingsV1,
) -> Option<TableSettingsV2> {
    let (kind, ethnicity_as, data) = match (settings.kind, table) {
        (TableType::Simple, TableDescription::Simple(simple)) => {
            (TableType::Simple, EthnicityRole::Row, simple_data(simple))
        }
        (TableType::Grouped, TableDescription::Grouped(grouped)) => {
            let options = &settings.table_options;
            let row_column = options.row_column.as_deref().unwrap_or_default();
            let grouping_column = options.grouping_column.as_deref().unwrap_or_default();
            let role = if is_ethnicity_column(grouping_column) && !is_ethnicity_column(row_column) {
                EthnicityRole::Column
            } else {
                EthnicityRole::Row
            };
            (TableType::Grouped, role, grouped_data(grouped, role))
        }
        (kind, table) => {
            debug!(
                settings = ?kind,
                table = table.type_name(),
                "table settings cannot be upgraded"
            );
            return None;
        }
    };

    Some(TableSettingsV2 {
        version: SETTINGS_VERSION.to_string(),
        kind,
        title: table.title().to_string(),
        ethnicity_as,
        data,
    })
}

fn simple_data(table: &SimpleTable) -> Vec<Vec<Cell>> {
    let mut header = vec![Cell::from("Ethnicity")];
    header.extend(table.columns.iter().map(Cell::from));

    let mut data = vec![header];
    for row in &table.data {
        let mut cells = vec![Cell::from(&row.category)];
        cells.extend(row.values.iter().cloned());
        data.push(cells);
    }
    data
}

fn grouped_data(table: &GroupedTable, role: EthnicityRole) -> Vec<Vec<Cell>> {
    let other = match role {
        EthnicityRole::Column => &table.category_caption,
        _ => &table.group_column,
    };
    let mut header = vec![Cell::from("Ethnicity"), Cell::from(other)];
    header.extend(table.columns.iter().map(Cell::from));

    let mut data = vec![header];
    match role {
        EthnicityRole::Column => {
            for group in &table.groups {
                for row in &group.data {
                    let mut cells = vec![Cell::from(&group.group), Cell::from(&row.category)];
                    cells.extend(row.values.iter().cloned());
                    data.push(cells);
                }
            }
        }
        _ => {
            for category in table.categories() {
                for group in &table.groups {
                    let Some(row) = group.row(category) else {
                        continue;
                    };
                    let mut cells = vec![Cell::from(category), Cell::from(&group.group)];
                    cells.extend(row.values.iter().cloned());
                    data.push(cells);
                }
            }
        }
    }
    data
}

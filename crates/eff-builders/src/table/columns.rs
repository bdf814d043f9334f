//! Building table descriptions from named columns of a dataset.

use eff_model::EthnicityDataSet;

use crate::cell::Cell;
use crate::error::{BuildError, Result};
use crate::table::description::{GroupedTable, SimpleTable, TableDescription, TableGroup, TableRow};

/// A simple table with one row per data row.
///
/// # Errors
///
/// Returns [`BuildError::ColumnsMissing`] naming every requested column that
/// is not a header of the dataset.
pub fn build_simple_table<S: AsRef<str>>(
    dataset: &EthnicityDataSet,
    category_column: &str,
    value_columns: &[S],
) -> Result<TableDescription> {
    let names: Vec<&str> = std::iter::once(category_column)
        .chain(value_columns.iter().map(AsRef::as_ref))
        .collect();
    let indices = column_indices(dataset, &names)?;
    let (category_idx, value_idx) = (indices[0], &indices[1..]);

    let data = dataset
        .rows()
        .iter()
        .map(|row| TableRow::new(cell_text(row, category_idx), values(row, value_idx)))
        .collect();

    Ok(TableDescription::Simple(SimpleTable {
        category_caption: category_column.to_string(),
        columns: names[1..].iter().map(|name| (*name).to_string()).collect(),
        data,
        ..SimpleTable::default()
    }))
}

/// A grouped table with groups in first-seen order and rows in data order.
///
/// # Errors
///
/// Returns [`BuildError::ColumnsMissing`] naming every requested column that
/// is not a header of the dataset.
pub fn build_grouped_table<S: AsRef<str>>(
    dataset: &EthnicityDataSet,
    category_column: &str,
    group_column: &str,
    value_columns: &[S],
) -> Result<TableDescription> {
    let names: Vec<&str> = [category_column, group_column]
        .into_iter()
        .chain(value_columns.iter().map(AsRef::as_ref))
        .collect();
    let indices = column_indices(dataset, &names)?;
    let (category_idx, group_idx, value_idx) = (indices[0], indices[1], &indices[2..]);

    let mut groups: Vec<TableGroup> = Vec::new();
    for row in dataset.rows() {
        let group_name = cell_text(row, group_idx);
        let table_row = TableRow::new(cell_text(row, category_idx), values(row, value_idx));
        match groups.iter_mut().find(|group| group.group == group_name) {
            Some(group) => group.data.push(table_row),
            None => groups.push(TableGroup {
                group: group_name,
                data: vec![table_row],
            }),
        }
    }

    Ok(TableDescription::Grouped(GroupedTable {
        category_caption: category_column.to_string(),
        group_column: group_column.to_string(),
        columns: names[2..].iter().map(|name| (*name).to_string()).collect(),
        groups,
        ..GroupedTable::default()
    }))
}

fn column_indices(dataset: &EthnicityDataSet, names: &[&str]) -> Result<Vec<usize>> {
    let mut indices = Vec::with_capacity(names.len());
    let mut missing = Vec::new();
    for name in names {
        match dataset.column_by_name(name) {
            Some(idx) => indices.push(idx),
            None => missing.push((*name).to_string()),
        }
    }
    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(BuildError::ColumnsMissing { columns: missing })
    }
}

fn cell_text(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

fn values(row: &[String], indices: &[usize]) -> Vec<Cell> {
    indices
        .iter()
        .map(|&idx| Cell::Text(cell_text(row, idx)))
        .collect()
}

//! Pasted tabular data with ethnicity column discovery.
//!
//! Row 0 of the input is the header row. Rows are expected to be as wide as the
//! header, but short rows are tolerated: missing cells read as empty strings.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Header names recognised as the ethnicity column (compared trimmed, case-insensitive).
pub const ETHNICITY_COLUMN_NAMES: &[&str] = &["ethnicity", "ethnic group", "ethnicity_name"];

/// Header names recognised as the ethnicity type column.
pub const ETHNICITY_TYPE_COLUMN_NAMES: &[&str] = &[
    "ethnicity type",
    "ethnicity_type",
    "ethnicity-type",
    "ethnicity type name",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthnicityDataSet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl EthnicityDataSet {
    /// Build a dataset from header row plus data rows.
    pub fn new(mut rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ModelError::MissingHeader);
        }
        let headers = rows.remove(0);
        Ok(Self { headers, rows })
    }

    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    pub fn headers_mut(&mut self) -> &mut Vec<String> {
        &mut self.headers
    }

    /// Index of the first header matching one of `names`.
    pub fn find_column(&self, names: &[&str]) -> Option<usize> {
        find_column(&self.headers, names)
    }

    /// Ethnicity column index. Column 0 when no header is recognised.
    pub fn ethnicity_column(&self) -> usize {
        self.find_column(ETHNICITY_COLUMN_NAMES).unwrap_or(0)
    }

    pub fn ethnicity_type_column(&self) -> Option<usize> {
        self.find_column(ETHNICITY_TYPE_COLUMN_NAMES)
    }

    pub fn column_by_name(&self, name: &str) -> Option<usize> {
        self.find_column(&[name])
    }

    /// Values of one column in row order.
    pub fn column(&self, index: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect()
    }

    pub fn ethnicity_values(&self) -> Vec<String> {
        self.column(self.ethnicity_column())
    }

    /// Ethnicity values with duplicates removed, in first-occurrence order.
    pub fn distinct_ethnicity_values(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for value in self.ethnicity_values() {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }

    /// Append a column. `values` must hold one cell per data row.
    pub fn append_column(&mut self, header: impl Into<String>, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(ModelError::ColumnLength {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.headers.push(header.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row followed by data rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.headers);
        rows.extend(self.rows);
        rows
    }
}

/// Index of the first header equal (trimmed, case-insensitive) to one of `names`.
pub fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim();
        names.iter().any(|name| header.eq_ignore_ascii_case(name.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn locates_ethnicity_columns_case_insensitively() {
        let dataset = EthnicityDataSet::new(rows(&[
            &["Year", " ETHNICITY ", "Ethnicity_type", "Value"],
            &["2019", "White", "ONS 2011 5+1", "10"],
        ]))
        .unwrap();
        assert_eq!(dataset.ethnicity_column(), 1);
        assert_eq!(dataset.ethnicity_type_column(), Some(2));
        assert_eq!(dataset.ethnicity_values(), vec!["White"]);
    }

    #[test]
    fn defaults_to_first_column() {
        let dataset = EthnicityDataSet::new(rows(&[&["Group", "Value"], &["Asian", "1"]])).unwrap();
        assert_eq!(dataset.ethnicity_column(), 0);
        assert_eq!(dataset.ethnicity_type_column(), None);
    }

    #[test]
    fn short_rows_read_as_empty() {
        let dataset =
            EthnicityDataSet::new(rows(&[&["Value", "Ethnicity"], &["1"], &["2", "Black"]])).unwrap();
        assert_eq!(dataset.ethnicity_values(), vec!["", "Black"]);
    }

    #[test]
    fn distinct_values_keep_first_occurrence() {
        let dataset = EthnicityDataSet::new(rows(&[
            &["Ethnicity"],
            &["White"],
            &["Black"],
            &["White"],
        ]))
        .unwrap();
        assert_eq!(dataset.distinct_ethnicity_values(), vec!["White", "Black"]);
    }

    #[test]
    fn append_column_checks_length() {
        let mut dataset = EthnicityDataSet::new(rows(&[&["Ethnicity"], &["White"]])).unwrap();
        assert!(matches!(
            dataset.append_column("Extra", vec![]),
            Err(ModelError::ColumnLength { expected: 1, actual: 0 })
        ));
        dataset
            .append_column("Standard", vec!["White".to_string()])
            .unwrap();
        assert_eq!(
            dataset.into_rows(),
            rows(&[&["Ethnicity", "Standard"], &["White", "White"]])
        );
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(
            EthnicityDataSet::new(Vec::new()),
            Err(ModelError::MissingHeader)
        ));
    }
}
